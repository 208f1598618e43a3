mod auth;
mod client;
mod order;
mod product;

pub use self::auth::AuthService;
pub use self::client::ClientService;
pub use self::order::OrderService;
pub use self::product::ProductService;
