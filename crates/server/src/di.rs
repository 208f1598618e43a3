use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::ConnectionPool,
    repository::{ClientRepository, OrderRepository, ProductRepository, UserRepository},
    service::{AuthService, ClientService, OrderService, ProductService},
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: AuthService,
    pub client_service: ClientService,
    pub product_service: ProductService,
    pub order_service: OrderService,
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, jwt: DynJwtService) -> Self {
        let users = UserRepository::new(pool.clone());
        let clients = ClientRepository::new(pool.clone());
        let products = ProductRepository::new(pool.clone());
        let orders = OrderRepository::new(pool.clone());

        let auth_service = AuthService::new(&users, hashing, jwt);
        let client_service = ClientService::new(&clients);
        let product_service = ProductService::new(&products);
        let order_service = OrderService::new(&orders);

        Self {
            auth_service,
            client_service,
            product_service,
            order_service,
        }
    }
}
