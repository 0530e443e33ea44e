use crate::db::PlacedOrder;
use crate::models::enums::{Category, MealType};
use crate::models::order::Order;
use crate::models::review::Review;
use crate::models::token::MealToken;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct CartLineDto {
    pub item_id: i32,
    pub name: String,
    pub category: Category,
    /// Current menu price, not a snapshot.
    pub price: String,
    pub quantity: i32,
    pub line_total: String,
}

#[derive(Serialize, ToSchema)]
pub struct CartContents {
    pub lines: Vec<CartLineDto>,
    pub total: String,
}

#[derive(Serialize, ToSchema)]
pub struct CartResponse {
    pub status: String,
    pub data: Option<CartContents>,
    pub error: Option<String>,
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct CheckoutReq {
    pub meal_type: MealType,
}

#[derive(Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub status: String,
    pub data: Option<PlacedOrder>,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct OrderListResponse {
    pub status: String,
    pub data: Vec<Order>,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct TokenListResponse {
    pub status: String,
    pub data: Vec<MealToken>,
    pub error: Option<String>,
}

#[derive(Deserialize, ToSchema, Debug)]
pub struct NewReviewReq {
    pub rating: i32,
    pub comment: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReviewListResponse {
    pub status: String,
    pub data: Vec<Review>,
    pub error: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ReviewResponse {
    pub status: String,
    pub data: Option<Review>,
    pub error: Option<String>,
}
