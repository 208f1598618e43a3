mod client;
mod order;
mod product;
mod user;

pub use self::client::Client;
pub use self::order::{Order, OrderItem};
pub use self::product::{Product, ProductImage};
pub use self::user::User;
