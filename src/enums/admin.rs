use crate::db::TokenReportRow;
use crate::models::menu::MenuItem;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct DashboardData {
    pub todays_menu: Vec<MenuItem>,
    pub tokens_issued_today: i64,
}

#[derive(Serialize, ToSchema)]
pub struct DashboardResponse {
    pub status: String,
    pub data: Option<DashboardData>,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct TokenReportResponse {
    pub status: String,
    pub data: Vec<TokenReportRow>,
    pub error: Option<String>,
}
