use crate::models::enums::Category;
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Queryable, Selectable, Identifiable, Serialize, ToSchema, Clone, Debug)]
#[diesel(table_name = crate::db::schema::menu_items)]
#[diesel(primary_key(item_id))]
pub struct MenuItem {
    pub item_id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = String)]
    pub price: BigDecimal,
    pub category: Category,
    pub available: bool,
    pub date_available: Option<NaiveDate>,
}

#[derive(Insertable, Deserialize, ToSchema, Debug)]
#[diesel(table_name = crate::db::schema::menu_items)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    #[schema(value_type = String)]
    pub price: BigDecimal,
    pub category: Category,
    pub available: bool,
    pub date_available: Option<NaiveDate>,
}

/// Partial update; `None` fields are left untouched.
#[derive(AsChangeset, Deserialize, ToSchema, Debug)]
#[diesel(table_name = crate::db::schema::menu_items)]
pub struct UpdateMenuItem {
    pub name: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>)]
    pub price: Option<BigDecimal>,
    pub category: Option<Category>,
    pub available: Option<bool>,
    pub date_available: Option<NaiveDate>,
}
