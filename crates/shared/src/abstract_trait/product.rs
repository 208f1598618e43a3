use crate::{
    domain::{
        requests::{
            AddProductImagesRequest, CreateProductRequest, FindAllProducts, UpdateProductRequest,
        },
        responses::{ApiResponse, ApiResponsePagination, ProductImageResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Product, ProductImage},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;
pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;
pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;
pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self, req: &FindAllProducts)
    -> Result<(Vec<Product>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_barcode(&self, barcode: &str) -> Result<Option<Product>, RepositoryError>;
    async fn find_images(&self, product_id: i32) -> Result<Vec<ProductImage>, RepositoryError>;
    async fn find_images_for_products(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<ProductImage>, RepositoryError>;
}

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError>;
    async fn update(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn add_images(
        &self,
        product_id: i32,
        urls: &[String],
    ) -> Result<Vec<ProductImage>, RepositoryError>;
    async fn delete_image(&self, image_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn find_images(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<ProductImageResponse>>, ServiceError>;
}

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
    async fn add_images(
        &self,
        product_id: i32,
        req: &AddProductImagesRequest,
    ) -> Result<ApiResponse<Vec<ProductImageResponse>>, ServiceError>;
    async fn delete_image(&self, image_id: i32) -> Result<(), ServiceError>;
}
