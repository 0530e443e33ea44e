use chrono::{DateTime, Utc};
use diesel::{Identifiable, Queryable, Selectable};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Queryable, Selectable, Identifiable, Serialize, ToSchema, Clone, Debug)]
#[diesel(table_name = crate::db::schema::reviews)]
#[diesel(primary_key(review_id))]
pub struct Review {
    pub review_id: i32,
    pub user_id: i32,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub visible: bool,
}
