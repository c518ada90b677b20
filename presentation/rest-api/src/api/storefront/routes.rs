use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_detail::{
    GetProductDetailParams, GetProductDetailUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::storefront::dto::{StorefrontProductCard, StorefrontProductDetailResponse};
use crate::api::tags::ApiTags;
use crate::config::display_config::DisplayConfig;

pub struct StorefrontApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_detail_use_case: Arc<dyn GetProductDetailUseCase>,
    display: Arc<DisplayConfig>,
}

impl StorefrontApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_detail_use_case: Arc<dyn GetProductDetailUseCase>,
        display: Arc<DisplayConfig>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_detail_use_case,
            display,
        }
    }
}

#[OpenApi]
impl StorefrontApi {
    /// List products
    ///
    /// Same order as the admin panel: pinned products first, then by id.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Storefront")]
    async fn get_all_products(&self) -> GetStorefrontProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => GetStorefrontProductsResponse::Ok(Json(
                products
                    .into_iter()
                    .map(|p| StorefrontProductCard::from_listing(p, &self.display))
                    .collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetStorefrontProductsResponse::InternalError(json)
            }
        }
    }

    /// Product detail page
    ///
    /// The product with its category and the other products of that category.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Storefront")]
    async fn get_product_detail(&self, id: Path<String>) -> GetProductDetailResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetProductDetailResponse::BadRequest(Json(ErrorResponse::invalid_id()));
        };

        match self
            .get_detail_use_case
            .execute(GetProductDetailParams { id })
            .await
        {
            Ok(detail) => GetProductDetailResponse::Ok(Json(
                StorefrontProductDetailResponse::from_domain(detail, &self.display),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductDetailResponse::NotFound(json),
                    _ => GetProductDetailResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetStorefrontProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<StorefrontProductCard>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetProductDetailResponse {
    #[oai(status = 200)]
    Ok(Json<StorefrontProductDetailResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
