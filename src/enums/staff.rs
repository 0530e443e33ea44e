use crate::models::enums::OrderStatus;
use crate::models::order::Order;
use crate::models::token::MealToken;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct TokenQueueResponse {
    pub status: String,
    pub data: Vec<MealToken>,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct TokenResponse {
    pub status: String,
    pub data: Option<MealToken>,
    pub error: Option<String>,
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct UpdateOrderStatusReq {
    pub status: OrderStatus,
}

#[derive(Serialize, ToSchema)]
pub struct OrderResponse {
    pub status: String,
    pub data: Option<Order>,
    pub error: Option<String>,
}
