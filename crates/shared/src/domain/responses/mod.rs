mod api;
mod client;
mod order;
mod pagination;
mod product;
mod token;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination};
pub use self::client::ClientResponse;
pub use self::order::{OrderItemResponse, OrderResponse, to_order_response};
pub use self::pagination::Pagination;
pub use self::product::{ProductImageResponse, ProductResponse, to_product_response};
pub use self::token::{RefreshTokenResponse, TokenResponse};
pub use self::user::UserResponse;
