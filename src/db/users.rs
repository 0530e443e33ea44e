use crate::db::schema::users::dsl::*;
use crate::db::{DbConnection, RepositoryError};
use crate::models::user::{NewUser, User};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error};
use log::error;

#[derive(Clone)]
pub struct UserOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl UserOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    pub fn create_user(&self, new_user: NewUser) -> Result<User, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("create_user: failed to acquire DB connection: {}", e);
            e
        })?;

        diesel::insert_into(users)
            .values(&new_user)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "create_user: error inserting user '{}': {}",
                    new_user.username, e
                );
                match e {
                    Error::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RepositoryError::ValidationError(format!(
                            "Username '{}' is already taken",
                            new_user.username
                        ))
                    }
                    other => RepositoryError::DatabaseError(other),
                }
            })
    }

    pub fn get_user(&self, userid: i32) -> Result<User, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_user: failed to acquire DB connection for id {}: {}",
                userid, e
            );
            e
        })?;

        users
            .filter(user_id.eq(userid))
            .first::<User>(conn.connection())
            .map_err(|e| {
                error!("get_user: error fetching user with id {}: {}", userid, e);
                match e {
                    Error::NotFound => RepositoryError::NotFound(format!("users: {userid}")),
                    other => RepositoryError::DatabaseError(other),
                }
            })
    }

    pub fn get_user_by_username(&self, search_username: &str) -> Result<User, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_user_by_username: failed to acquire DB connection for '{}': {}",
                search_username, e
            );
            e
        })?;

        users
            .filter(username.eq(search_username))
            .first::<User>(conn.connection())
            .map_err(|e| {
                error!(
                    "get_user_by_username: error fetching user '{}': {}",
                    search_username, e
                );
                match e {
                    Error::NotFound => {
                        RepositoryError::NotFound(format!("users: {search_username}"))
                    }
                    other => RepositoryError::DatabaseError(other),
                }
            })
    }
}
