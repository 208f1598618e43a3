mod auth;
mod client;
mod hashing;
mod jwt;
mod order;
mod product;
mod user;

pub use self::auth::{
    DynLoginService, DynRegisterService, DynTokenService, LoginServiceTrait, RegisterServiceTrait,
    TokenServiceTrait,
};
pub use self::client::{
    ClientCommandRepositoryTrait, ClientCommandServiceTrait, ClientQueryRepositoryTrait,
    ClientQueryServiceTrait, DynClientCommandRepository, DynClientCommandService,
    DynClientQueryRepository, DynClientQueryService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait,
};
