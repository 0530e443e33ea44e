mod dashboard;
mod reports;
mod reviews;

use crate::AppState;
use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.service(
        web::scope("/admin")
            .app_data(web::Data::new(state.menu_ops.clone()))
            .app_data(web::Data::new(state.token_ops.clone()))
            .app_data(web::Data::new(state.review_ops.clone()))
            .service(dashboard::dashboard)
            .service(reports::token_report)
            .service(reviews::list_all_reviews)
            .service(reviews::toggle_review),
    );
}
