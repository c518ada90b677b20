use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::toggle_pin::{TogglePinParams, TogglePinUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{AdminProductResponse, ProductFormRequest, ProductResponse};
use crate::api::tags::ApiTags;
use crate::config::display_config::DisplayConfig;

pub struct AdminProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    toggle_pin_use_case: Arc<dyn TogglePinUseCase>,
    display: Arc<DisplayConfig>,
}

impl AdminProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        toggle_pin_use_case: Arc<dyn TogglePinUseCase>,
        display: Arc<DisplayConfig>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            toggle_pin_use_case,
            display,
        }
    }
}

/// Admin catalog API
///
/// Endpoints the admin panel uses to list, create, edit, delete and pin products.
#[OpenApi]
impl AdminProductApi {
    /// List products for the admin panel
    ///
    /// Pinned products first, then by id. Each row carries its category.
    #[oai(path = "/admin/products", method = "get", tag = "ApiTags::AdminProducts")]
    async fn get_all_products(&self) -> GetAllAdminProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let rows: Vec<AdminProductResponse> = products
                    .into_iter()
                    .map(|p| AdminProductResponse::from_domain(p, &self.display))
                    .collect();
                GetAllAdminProductsResponse::Ok(Json(rows))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllAdminProductsResponse::InternalError(json)
            }
        }
    }

    /// Create a product
    ///
    /// New products start unpinned. The image, when sent, must be a jpg, png or webp.
    #[oai(path = "/admin/products", method = "post", tag = "ApiTags::AdminProducts")]
    async fn create_product(&self, body: Json<ProductFormRequest>) -> CreateProductResponse {
        let (form, image_base64) = body.0.into_parts();

        match self
            .create_use_case
            .execute(CreateProductParams { form, image_base64 })
            .await
        {
            Ok(product) => CreateProductResponse::Created(Json(ProductResponse::from_domain(
                product,
                &self.display,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns the product with its category, as shown on the edit form.
    #[oai(path = "/admin/products/:id", method = "get", tag = "ApiTags::AdminProducts")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetProductByIdResponse::BadRequest(Json(ErrorResponse::invalid_id()));
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(AdminProductResponse::from_domain(
                product,
                &self.display,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces every field. Without `image_base64` the stored image is kept.
    #[oai(path = "/admin/products/:id", method = "put", tag = "ApiTags::AdminProducts")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductFormRequest>,
    ) -> UpdateProductResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return UpdateProductResponse::BadRequest(Json(ErrorResponse::invalid_id()));
        };
        let (form, image_base64) = body.0.into_parts();

        match self
            .update_use_case
            .execute(UpdateProductParams {
                id,
                form,
                image_base64,
            })
            .await
        {
            Ok(product) => UpdateProductResponse::Ok(Json(ProductResponse::from_domain(
                product,
                &self.display,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Permanently removes the product. Its image file is left in storage.
    #[oai(path = "/admin/products/:id", method = "delete", tag = "ApiTags::AdminProducts")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteProductResponse::BadRequest(Json(ErrorResponse::invalid_id()));
        };

        match self.delete_use_case.execute(DeleteProductParams { id }).await {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Toggle the pinned flag
    ///
    /// Pinned products are listed before every unpinned one.
    #[oai(
        path = "/admin/products/:id/pin",
        method = "post",
        tag = "ApiTags::AdminProducts"
    )]
    async fn toggle_pin(&self, id: Path<String>) -> TogglePinResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return TogglePinResponse::BadRequest(Json(ErrorResponse::invalid_id()));
        };

        match self.toggle_pin_use_case.execute(TogglePinParams { id }).await {
            Ok(product) => TogglePinResponse::Ok(Json(ProductResponse::from_domain(
                product,
                &self.display,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => TogglePinResponse::NotFound(json),
                    _ => TogglePinResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum GetAllAdminProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<AdminProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<AdminProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum TogglePinResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
