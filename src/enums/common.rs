use crate::models::enums::Role;
use crate::models::menu::MenuItem;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema, Debug)]
pub struct RegisterReq {
    pub username: String,
    pub phone: String,
    pub email: Option<String>,
    /// Defaults to student when omitted.
    pub role: Option<Role>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResp {
    pub status: String,
    pub error: Option<String>,
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct LoginReq {
    pub username: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResp {
    pub status: String,
    pub token: Option<String>,
    pub role: Option<Role>,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MenuListResponse {
    pub status: String,
    pub data: Vec<MenuItem>,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct MenuItemResponse {
    pub status: String,
    pub data: Option<MenuItem>,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub error: Option<String>,
}
