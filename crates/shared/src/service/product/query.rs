use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::{
        requests::{FindAllProducts, MAX_PAGE_SIZE},
        responses::{
            ApiResponse, ApiResponsePagination, Pagination, ProductImageResponse, ProductResponse,
            to_product_response,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::ProductImage,
};
use async_trait::async_trait;
use std::collections::HashMap;

pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        let (products, total) = self.query.find_all(req).await?;

        let product_ids: Vec<i32> = products.iter().map(|p| p.product_id).collect();
        let mut images_by_product: HashMap<i32, Vec<ProductImage>> = HashMap::new();
        for image in self.query.find_images_for_products(&product_ids).await? {
            images_by_product
                .entry(image.product_id)
                .or_default()
                .push(image);
        }

        let page_size = req.page_size.clamp(1, MAX_PAGE_SIZE);
        let data = products
            .into_iter()
            .map(|product| {
                let images = images_by_product
                    .remove(&product.product_id)
                    .unwrap_or_default();
                to_product_response(product, images)
            })
            .collect();

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products fetched successfully".to_string(),
            data,
            pagination: Pagination::new(req.page.max(1), page_size, total),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let images = self.query.find_images(id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product fetched successfully".to_string(),
            data: to_product_response(product, images),
        })
    }

    async fn find_images(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<Vec<ProductImageResponse>>, ServiceError> {
        self.query
            .find_by_id(product_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let images = self.query.find_images(product_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product images fetched successfully".to_string(),
            data: images.into_iter().map(ProductImageResponse::from).collect(),
        })
    }
}
