use crate::models::enums::{MealType, OrderStatus};
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::{Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Queryable, Selectable, Identifiable, Serialize, ToSchema, Clone, Debug)]
#[diesel(table_name = crate::db::schema::orders)]
#[diesel(primary_key(order_id))]
pub struct Order {
    pub order_id: i32,
    pub user_id: i32,
    pub order_date: DateTime<Utc>,
    /// Nullable to admit legacy rows created before meal types were recorded;
    /// every new checkout sets it. See the `backfill_meal_types` binary.
    pub meal_type: Option<MealType>,
    #[schema(value_type = String)]
    pub total_amount: BigDecimal,
    pub status: OrderStatus,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Serialize, ToSchema, Clone, Debug)]
#[diesel(table_name = crate::db::schema::order_items)]
#[diesel(primary_key(order_item_id))]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub order_item_id: i32,
    pub order_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    /// Menu price snapshotted at order time; never recomputed afterwards.
    #[schema(value_type = String)]
    pub price: BigDecimal,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = crate::db::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    pub price: BigDecimal,
}
