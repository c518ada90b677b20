use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::listing::sort_for_listing;
use crate::domain::product::model::ProductWithCategory;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;

/// Listing shared by the admin panel and the storefront.
pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<ProductWithCategory>, ProductError> {
        self.logger.info("Fetching all products");
        let mut products = self.repository.get_all().await?;
        sort_for_listing(&mut products);
        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        BEVERAGES, MockProductRepo, SNACKS, category, mock_logger, product,
    };
    use crate::domain::errors::RepositoryError;

    fn entry(id: u128, category_id: u128, is_pinned: bool) -> ProductWithCategory {
        ProductWithCategory {
            product: product(id, category_id, is_pinned),
            category: category(category_id),
        }
    }

    fn ids(products: &[ProductWithCategory]) -> Vec<u128> {
        products.iter().map(|p| p.product.id.as_u128()).collect()
    }

    #[tokio::test]
    async fn should_list_pinned_products_first_when_requested() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                entry(1, BEVERAGES, false),
                entry(2, SNACKS, true),
                entry(3, BEVERAGES, false),
            ])
        });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        assert_eq!(ids(&products), vec![2, 1, 3]);
        assert_eq!(products[0].category.name, "Snacks");
    }

    #[tokio::test]
    async fn should_order_pinned_products_by_id_when_several_are_pinned() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                entry(3, BEVERAGES, false),
                entry(2, SNACKS, true),
                entry(1, BEVERAGES, true),
            ])
        });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case.execute().await.unwrap();

        assert_eq!(ids(&products), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_catalog_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| Ok(vec![]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result, Err(ProductError::Repository(_))));
    }
}
