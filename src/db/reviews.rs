use crate::db::schema::reviews::dsl::*;
use crate::db::{DbConnection, RepositoryError};
use crate::models::review::Review;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error;
use log::error;

#[derive(Clone)]
pub struct ReviewOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl ReviewOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    pub fn create_review(
        &self,
        userid: i32,
        rating_val: i32,
        comment_val: &str,
    ) -> Result<Review, RepositoryError> {
        if !(1..=5).contains(&rating_val) {
            return Err(RepositoryError::ValidationError(format!(
                "Rating must be between 1 and 5, got {rating_val}"
            )));
        }

        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("create_review: failed to acquire DB connection: {}", e);
            e
        })?;

        diesel::insert_into(reviews)
            .values((
                user_id.eq(userid),
                rating.eq(rating_val),
                comment.eq(comment_val),
            ))
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "create_review: error inserting review for user {}: {}",
                    userid, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    /// Student-facing listing: moderated-out reviews excluded.
    pub fn list_visible(&self) -> Result<Vec<Review>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("list_visible: failed to acquire DB connection: {}", e);
            e
        })?;

        reviews
            .filter(visible.eq(true))
            .order_by((created_at.desc(), review_id.desc()))
            .load::<Review>(conn.connection())
            .map_err(|e| {
                error!("list_visible: error fetching reviews: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }

    /// Admin moderation listing, hidden reviews included.
    pub fn list_all(&self) -> Result<Vec<Review>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("list_all: failed to acquire DB connection: {}", e);
            e
        })?;

        reviews
            .order_by((created_at.desc(), review_id.desc()))
            .load::<Review>(conn.connection())
            .map_err(|e| {
                error!("list_all: error fetching reviews: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn toggle_visibility(&self, reviewid: i32) -> Result<Review, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "toggle_visibility: failed to acquire DB connection for id {}: {}",
                reviewid, e
            );
            e
        })?;

        conn.connection().transaction(|conn| {
            let current_visible: bool = reviews
                .filter(review_id.eq(reviewid))
                .select(visible)
                .for_update()
                .first::<bool>(conn)
                .map_err(|e| {
                    error!(
                        "toggle_visibility: error fetching review {}: {}",
                        reviewid, e
                    );
                    match e {
                        Error::NotFound => {
                            RepositoryError::NotFound(format!("reviews: {reviewid}"))
                        }
                        other => RepositoryError::DatabaseError(other),
                    }
                })?;

            diesel::update(reviews.filter(review_id.eq(reviewid)))
                .set(visible.eq(!current_visible))
                .get_result::<Review>(conn)
                .map_err(RepositoryError::DatabaseError)
        })
    }
}
