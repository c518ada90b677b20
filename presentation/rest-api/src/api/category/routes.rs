use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, payload::Json};

use business::domain::category::use_cases::get_all::GetAllCategoriesUseCase;

use crate::api::category::dto::CategoryResponse;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CategoryApi {
    get_all_use_case: Arc<dyn GetAllCategoriesUseCase>,
}

impl CategoryApi {
    pub fn new(get_all_use_case: Arc<dyn GetAllCategoriesUseCase>) -> Self {
        Self { get_all_use_case }
    }
}

#[OpenApi]
impl CategoryApi {
    /// List categories
    ///
    /// Returns every category ordered by name, for the product form's category picker.
    #[oai(path = "/categories", method = "get", tag = "ApiTags::Categories")]
    async fn get_all_categories(&self) -> GetAllCategoriesResponse {
        match self.get_all_use_case.execute().await {
            Ok(categories) => GetAllCategoriesResponse::Ok(Json(
                categories.into_iter().map(|c| c.into()).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllCategoriesResponse::InternalError(json)
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<CategoryResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
