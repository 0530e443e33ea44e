use crate::models::enums::Role;
use diesel::{Identifiable, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Queryable, Selectable, Identifiable, Serialize, ToSchema, Clone, Debug)]
#[diesel(table_name = crate::db::schema::users)]
#[diesel(primary_key(user_id))]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub phone: String,
    pub role: Role,
    pub email: Option<String>,
}

#[derive(Insertable, Deserialize, ToSchema, Debug)]
#[diesel(table_name = crate::db::schema::users)]
pub struct NewUser {
    pub username: String,
    pub phone: String,
    pub role: Role,
    pub email: Option<String>,
}
