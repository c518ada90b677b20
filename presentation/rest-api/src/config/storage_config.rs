use std::env;

const DEFAULT_PUBLIC_PATH: &str = "/media";

/// Where uploaded product images live and how they are exposed over HTTP.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub directory: String,
    pub public_path: String,
}

impl StorageConfig {
    /// Environment variables:
    /// - IMAGE_STORAGE_DIR: Directory for uploaded images (default: "./public/products")
    /// - IMAGE_PUBLIC_PATH: URL prefix the directory is served under (default: "/media")
    pub fn from_env() -> Self {
        let directory =
            env::var("IMAGE_STORAGE_DIR").unwrap_or_else(|_| "./public/products".to_string());
        let public_path =
            env::var("IMAGE_PUBLIC_PATH").unwrap_or_else(|_| DEFAULT_PUBLIC_PATH.to_string());

        Self {
            directory,
            public_path: normalize_public_path(&public_path),
        }
    }
}

/// Leading slash, no trailing slash. The root path would shadow the API
/// routes, so it falls back to the default.
fn normalize_public_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        tracing::warn!(
            "IMAGE_PUBLIC_PATH {:?} cannot be the root path, using {}",
            raw,
            DEFAULT_PUBLIC_PATH
        );
        return DEFAULT_PUBLIC_PATH.to_string();
    }
    format!("/{}", trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_add_leading_slash_to_public_path() {
        assert_eq!(normalize_public_path("media"), "/media");
    }

    #[test]
    fn should_strip_trailing_slash_from_public_path() {
        assert_eq!(normalize_public_path("/static/products/"), "/static/products");
    }

    #[test]
    fn should_fall_back_to_default_when_public_path_is_root() {
        assert_eq!(normalize_public_path("/"), "/media");
        assert_eq!(normalize_public_path(""), "/media");
        assert_eq!(normalize_public_path(" // "), "/media");
    }
}
