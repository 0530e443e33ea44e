use crate::models::enums::TokenStatus;
use chrono::{DateTime, Utc};
use diesel::{Identifiable, Queryable, Selectable};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Queryable, Selectable, Identifiable, Serialize, ToSchema, Clone, Debug)]
#[diesel(table_name = crate::db::schema::meal_tokens)]
#[diesel(primary_key(token_id))]
pub struct MealToken {
    pub token_id: i32,
    pub order_id: i32,
    pub code: String,
    pub generated_at: DateTime<Utc>,
    pub status: TokenStatus,
    pub served_at: Option<DateTime<Utc>>,
    pub served_by: Option<i32>,
}
