use crate::{
    abstract_trait::{
        DynProductCommandRepository, DynProductQueryRepository, ProductCommandServiceTrait,
    },
    domain::{
        requests::{AddProductImagesRequest, CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductImageResponse, ProductResponse, to_product_response},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandService {
    query: DynProductQueryRepository,
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(query: DynProductQueryRepository, command: DynProductCommandRepository) -> Self {
        Self { query, command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("📦 Creating product: {}", req.description);

        if let Some(barcode) = &req.barcode {
            if self.query.find_by_barcode(barcode).await?.is_some() {
                error!("❌ Barcode already taken: {barcode}");
                return Err(ServiceError::Conflict(
                    "Barcode already registered".to_string(),
                ));
            }
        }

        let product = self.command.create(req).await?;

        info!("✅ Created product {}", product.product_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn update(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let id = req
            .product_id
            .ok_or_else(|| ServiceError::Validation(vec!["Product ID is required".to_string()]))?;

        let existing = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        if let Some(barcode) = &req.barcode {
            if existing.barcode.as_deref() != Some(barcode.as_str()) {
                if let Some(other) = self.query.find_by_barcode(barcode).await? {
                    if other.product_id != id {
                        return Err(ServiceError::Conflict(
                            "Barcode already registered by another product".to_string(),
                        ));
                    }
                }
            }
        }

        let product = self.command.update(req).await?;
        let images = self.query.find_images(id).await?;

        info!("✅ Updated product {id}");

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: to_product_response(product, images),
        })
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.command.delete(id).await?;

        info!("🗑️ Deleted product {id} and its images");

        Ok(())
    }

    async fn add_images(
        &self,
        product_id: i32,
        req: &AddProductImagesRequest,
    ) -> Result<ApiResponse<Vec<ProductImageResponse>>, ServiceError> {
        self.query
            .find_by_id(product_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let urls: Vec<String> = req.images.iter().map(|image| image.url.clone()).collect();
        let images = self.command.add_images(product_id, &urls).await?;

        info!("🖼️ Attached {} image(s) to product {product_id}", images.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product images added successfully".to_string(),
            data: images.into_iter().map(ProductImageResponse::from).collect(),
        })
    }

    async fn delete_image(&self, image_id: i32) -> Result<(), ServiceError> {
        self.command.delete_image(image_id).await?;

        info!("🗑️ Deleted product image {image_id}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
        domain::requests::FindAllProducts,
        model::{Product, ProductImage},
    };
    use rust_decimal::Decimal;
    use std::sync::Arc;

    struct StubProductQueryRepository {
        by_id: Option<Product>,
        by_barcode: Option<Product>,
    }

    #[async_trait]
    impl ProductQueryRepositoryTrait for StubProductQueryRepository {
        async fn find_all(
            &self,
            _req: &FindAllProducts,
        ) -> Result<(Vec<Product>, i64), RepositoryError> {
            Ok((Vec::new(), 0))
        }

        async fn find_by_id(&self, _id: i32) -> Result<Option<Product>, RepositoryError> {
            Ok(self.by_id.clone())
        }

        async fn find_by_barcode(
            &self,
            _barcode: &str,
        ) -> Result<Option<Product>, RepositoryError> {
            Ok(self.by_barcode.clone())
        }

        async fn find_images(
            &self,
            _product_id: i32,
        ) -> Result<Vec<ProductImage>, RepositoryError> {
            Ok(Vec::new())
        }

        async fn find_images_for_products(
            &self,
            _product_ids: &[i32],
        ) -> Result<Vec<ProductImage>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    struct StubProductCommandRepository;

    #[async_trait]
    impl ProductCommandRepositoryTrait for StubProductCommandRepository {
        async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
            Ok(sample_product(1, req.barcode.clone()))
        }

        async fn update(&self, _req: &UpdateProductRequest) -> Result<Product, RepositoryError> {
            Err(RepositoryError::NotFound)
        }

        async fn delete(&self, _id: i32) -> Result<(), RepositoryError> {
            Ok(())
        }

        async fn add_images(
            &self,
            product_id: i32,
            urls: &[String],
        ) -> Result<Vec<ProductImage>, RepositoryError> {
            Ok(urls
                .iter()
                .enumerate()
                .map(|(i, url)| ProductImage {
                    image_id: i as i32 + 1,
                    product_id,
                    url: url.clone(),
                    created_at: None,
                })
                .collect())
        }

        async fn delete_image(&self, _image_id: i32) -> Result<(), RepositoryError> {
            Ok(())
        }
    }

    fn sample_product(id: i32, barcode: Option<String>) -> Product {
        Product {
            product_id: id,
            description: "Linen shirt".into(),
            category: None,
            section: None,
            price: Decimal::new(5990, 2),
            barcode,
            initial_stock: 10,
            current_stock: 10,
            expiry_date: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_duplicate_barcode_conflicts() {
        let service = ProductCommandService::new(
            Arc::new(StubProductQueryRepository {
                by_id: None,
                by_barcode: Some(sample_product(3, Some("789".into()))),
            }),
            Arc::new(StubProductCommandRepository),
        );

        let err = service
            .create(&CreateProductRequest {
                description: "Linen shirt".into(),
                category: None,
                section: None,
                price: Decimal::new(5990, 2),
                barcode: Some("789".into()),
                initial_stock: 10,
                current_stock: 10,
                expiry_date: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_add_images_to_missing_product_is_not_found() {
        let service = ProductCommandService::new(
            Arc::new(StubProductQueryRepository {
                by_id: None,
                by_barcode: None,
            }),
            Arc::new(StubProductCommandRepository),
        );

        let err = service
            .add_images(
                99,
                &AddProductImagesRequest {
                    images: vec![crate::domain::requests::CreateProductImageRequest {
                        url: "https://cdn.example.com/shirt.png".into(),
                    }],
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_add_images_returns_created_urls() {
        let service = ProductCommandService::new(
            Arc::new(StubProductQueryRepository {
                by_id: Some(sample_product(1, None)),
                by_barcode: None,
            }),
            Arc::new(StubProductCommandRepository),
        );

        let response = service
            .add_images(
                1,
                &AddProductImagesRequest {
                    images: vec![crate::domain::requests::CreateProductImageRequest {
                        url: "https://cdn.example.com/shirt.png".into(),
                    }],
                },
            )
            .await
            .unwrap();

        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].url, "https://cdn.example.com/shirt.png");
    }
}
