pub mod account;
pub mod admin;
pub mod common;
mod errors;
pub mod staff;
pub mod students;

use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
pub use errors::default_error_handler;
pub(crate) use errors::status_for;

#[get("/")]
async fn root_endpoint() -> impl Responder {
    HttpResponse::Ok().body("Server up!")
}

#[get("/health")]
async fn health_endpoint() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(root_endpoint)
        .service(health_endpoint)
        .configure(|cfg| account::config(cfg, state))
        .configure(|cfg| common::config(cfg, state))
        .configure(|cfg| students::config(cfg, state))
        .configure(|cfg| staff::config(cfg, state))
        .configure(|cfg| admin::config(cfg, state));
}
