use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::model::Category;
use crate::domain::category::repository::CategoryRepository;
use crate::domain::category::use_cases::get_all::GetAllCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetAllCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllCategoriesUseCase for GetAllCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CategoryError> {
        self.logger.info("Fetching all categories");
        let categories = self.repository.get_all().await?;
        self.logger
            .info(&format!("Found {} categories", categories.len()));
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        BEVERAGES, MockCategoryRepo, SNACKS, category, mock_logger,
    };
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_categories_from_repository() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![category(BEVERAGES), category(SNACKS)]));

        let use_case = GetAllCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let categories = use_case.execute().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Beverages");
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockCategoryRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::DatabaseError));

        let use_case = GetAllCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result, Err(CategoryError::Repository(_))));
    }
}
