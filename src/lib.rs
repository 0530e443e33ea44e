pub mod api;
pub mod auth;
pub mod cart;
pub mod db;
pub mod enums;
pub mod models;
pub mod test_utils;

use crate::auth::AuthConfig;
use crate::cart::CartStore;
use crate::db::{
    establish_connection_pool, run_db_migrations, MenuOperations, OrderOperations,
    ReviewOperations, TokenOperations, UserOperations,
};

#[derive(Clone)]
pub struct AppState {
    pub user_ops: UserOperations,
    pub menu_ops: MenuOperations,
    pub order_ops: OrderOperations,
    pub token_ops: TokenOperations,
    pub review_ops: ReviewOperations,
    pub cart: CartStore,
    pub auth_cfg: AuthConfig,
}

impl AppState {
    pub fn new(database_url: &str, redis_url: &str, auth_cfg: AuthConfig) -> Self {
        let db = establish_connection_pool(database_url);
        run_db_migrations(db.clone()).expect("Unable to run migrations");

        let redis_client =
            redis::Client::open(redis_url).expect("Unable to create cart storage client");

        AppState {
            user_ops: UserOperations::new(db.clone()),
            menu_ops: MenuOperations::new(db.clone()),
            order_ops: OrderOperations::new(db.clone()),
            token_ops: TokenOperations::new(db.clone()),
            review_ops: ReviewOperations::new(db),
            cart: CartStore::new(redis_client),
            auth_cfg,
        }
    }
}
