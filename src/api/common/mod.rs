mod menu;

use crate::AppState;
use actix_web::web;
use menu::view_menu;

pub fn config(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(
        web::scope("/menu")
            .app_data(web::Data::new(state.menu_ops.clone()))
            .service(view_menu),
    );
}
