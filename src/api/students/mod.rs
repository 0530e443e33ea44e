mod cart;
mod orders;
mod reviews;

use crate::AppState;
use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(
        web::scope("/cart")
            .app_data(web::Data::new(state.cart.clone()))
            .app_data(web::Data::new(state.menu_ops.clone()))
            .service(cart::add_to_cart)
            .service(cart::remove_from_cart)
            .service(cart::clear_cart)
            .service(cart::view_cart),
    )
    .service(
        web::scope("/orders")
            .app_data(web::Data::new(state.cart.clone()))
            .app_data(web::Data::new(state.order_ops.clone()))
            .app_data(web::Data::new(state.token_ops.clone()))
            .service(orders::checkout)
            .service(orders::my_orders)
            .service(orders::my_tokens),
    )
    .service(
        web::scope("/reviews")
            .app_data(web::Data::new(state.review_ops.clone()))
            .service(reviews::list_reviews)
            .service(reviews::submit_review),
    );
}
