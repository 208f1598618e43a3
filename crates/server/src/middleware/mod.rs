pub mod admin;
pub mod jwt;
pub mod validate;

pub use self::admin::admin_gate;
pub use self::jwt::{AuthUser, auth_middleware};
pub use self::validate::SimpleValidatedJson;
