mod login;
mod register;
mod token;

pub use self::login::LoginService;
pub use self::register::RegisterService;
pub use self::token::TokenService;

use crate::{
    abstract_trait::{
        DynHashing, DynJwtService, DynLoginService, DynRegisterService, DynTokenService,
    },
    repository::UserRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AuthService {
    pub login: DynLoginService,
    pub register: DynRegisterService,
    pub token: DynTokenService,
}

impl AuthService {
    pub fn new(users: &UserRepository, hashing: DynHashing, jwt: DynJwtService) -> Self {
        let login = Arc::new(LoginService::new(
            hashing.clone(),
            jwt.clone(),
            users.query.clone(),
        )) as DynLoginService;

        let register = Arc::new(RegisterService::new(
            hashing.clone(),
            users.query.clone(),
            users.command.clone(),
        )) as DynRegisterService;

        let token = Arc::new(TokenService::new(jwt.clone(), users.query.clone()))
            as DynTokenService;

        Self {
            login,
            register,
            token,
        }
    }
}
