use actix_web::{web, App, HttpServer};
use canteen_backend::auth::{AuthConfig, AuthLayer};
use canteen_backend::{api, AppState};
use dotenvy::dotenv;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = dotenv() {
        eprintln!("Failed to load .env file: {}", e);
    }

    // Setup logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let redis_url =
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string());
    let auth_cfg = AuthConfig::from_env();

    info!("Initializing database connection pool...");
    let state = AppState::new(&database_url, &redis_url, auth_cfg.clone());

    // Server configuration
    const HOST: &str = "127.0.0.1";
    const PORT: u16 = 8080;

    info!("Starting server at http://{}:{}", HOST, PORT);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().error_handler(api::default_error_handler))
            .wrap(AuthLayer::new(auth_cfg.clone()))
            .configure(|cfg| api::configure(cfg, &state))
    })
    .bind((HOST, PORT))?
    .run()
    .await
}
