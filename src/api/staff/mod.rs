mod menu;
mod orders;
mod tokens;

use crate::AppState;
use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(
        web::scope("/staff")
            .app_data(web::Data::new(state.menu_ops.clone()))
            .app_data(web::Data::new(state.order_ops.clone()))
            .app_data(web::Data::new(state.token_ops.clone()))
            .service(menu::add_menu_item)
            .service(menu::update_menu_item)
            .service(menu::delete_menu_item)
            .service(tokens::tokens_today)
            .service(tokens::mark_token_used)
            .service(orders::update_order_status),
    );
}
