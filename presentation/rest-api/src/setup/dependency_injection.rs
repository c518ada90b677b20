use std::sync::Arc;

use logger::TracingLogger;
use persistence::category::repository::CategoryRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use storage::local::LocalImageStorage;

use business::application::category::get_all::GetAllCategoriesUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_detail::GetProductDetailUseCaseImpl;
use business::application::product::toggle_pin::TogglePinUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub admin_product_api: crate::api::product::routes::AdminProductApi,
    pub storefront_api: crate::api::storefront::routes::StorefrontApi,
    pub category_api: crate::api::category::routes::CategoryApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let display = Arc::new(config.display.clone());
        let health_api = crate::api::health::routes::Api::new(pool.clone());

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let category_repository = Arc::new(CategoryRepositoryPostgres::new(pool));
        let image_storage = Arc::new(LocalImageStorage::new(config.storage.directory.clone()));

        // Product use cases
        // One listing use case feeds both the admin panel and the storefront.
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let get_detail_use_case = Arc::new(GetProductDetailUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            image_storage: image_storage.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            category_repository: category_repository.clone(),
            image_storage,
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_pin_use_case = Arc::new(TogglePinUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Category use cases
        let get_all_categories_use_case = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: category_repository,
            logger,
        });

        let admin_product_api = crate::api::product::routes::AdminProductApi::new(
            get_all_use_case.clone(),
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            toggle_pin_use_case,
            display.clone(),
        );

        let storefront_api = crate::api::storefront::routes::StorefrontApi::new(
            get_all_use_case,
            get_detail_use_case,
            display,
        );

        let category_api =
            crate::api::category::routes::CategoryApi::new(get_all_categories_use_case);

        Self {
            health_api,
            admin_product_api,
            storefront_api,
            category_api,
        }
    }
}
