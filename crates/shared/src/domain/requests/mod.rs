mod auth;
mod client;
mod order;
mod product;

pub use self::auth::{LoginRequest, RefreshTokenRequest, RegisterRequest};
pub use self::client::{CreateClientRequest, FindAllClients, UpdateClientRequest};
pub use self::order::{
    CreateOrderItemRequest, CreateOrderRequest, FindAllOrders, UpdateOrderRequest,
};
pub use self::product::{
    AddProductImagesRequest, CreateProductImageRequest, CreateProductRequest, FindAllProducts,
    UpdateProductRequest,
};

/// Upper bound applied to `page_size` on every list endpoint.
pub const MAX_PAGE_SIZE: i32 = 100;
