use crate::db::{DbConnection, RepositoryError};
use crate::models::enums::{MealType, TokenStatus};
use crate::models::token::MealToken;
use chrono::{NaiveDate, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error;
use log::{debug, error};
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LENGTH: usize = 8;
// Collisions are vanishingly rare at 36^8 codes; the retry bound only guards
// against a broken RNG looping forever.
const CODE_ATTEMPTS: usize = 5;

/// One row of the admin token report: issuance day, the order's meal type and
/// token status, with the number of tokens in that bucket.
#[derive(Serialize, ToSchema, Clone, Debug, PartialEq, Eq)]
pub struct TokenReportRow {
    pub day: NaiveDate,
    pub meal_type: Option<MealType>,
    pub status: TokenStatus,
    pub count: i64,
}

#[derive(Clone)]
pub struct TokenOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl TokenOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    pub(crate) fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        (0..CODE_LENGTH)
            .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
            .collect()
    }

    /// Issue the meal token for a freshly inserted order. Must run inside the
    /// checkout transaction so the order and its token commit together.
    ///
    /// Uniqueness is enforced by the unique index on `code` within the same
    /// transaction as the insert: `ON CONFLICT (code) DO NOTHING` reports a
    /// collision as zero inserted rows, and we regenerate.
    pub fn issue_for_order(
        conn: &mut PgConnection,
        for_order_id: i32,
    ) -> Result<String, RepositoryError> {
        use crate::db::schema::meal_tokens::dsl::*;

        for _ in 0..CODE_ATTEMPTS {
            let new_code = Self::generate_code();
            let inserted = diesel::insert_into(meal_tokens)
                .values((
                    order_id.eq(for_order_id),
                    code.eq(&new_code),
                    status.eq(TokenStatus::Pending),
                ))
                .on_conflict(code)
                .do_nothing()
                .execute(conn)
                .map_err(|e| {
                    error!(
                        "issue_for_order: error inserting token for order {}: {}",
                        for_order_id, e
                    );
                    RepositoryError::DatabaseError(e)
                })?;

            if inserted == 1 {
                debug!(
                    "issue_for_order: issued token {} for order {}",
                    new_code, for_order_id
                );
                return Ok(new_code);
            }
        }

        Err(RepositoryError::ValidationError(format!(
            "Could not allocate a unique token code for order {for_order_id}"
        )))
    }

    /// Redeem a token at pickup. Second and later attempts fail without
    /// touching the original served_at/served_by stamps.
    pub fn mark_used(
        &self,
        tokenid: i32,
        staff_user_id: i32,
    ) -> Result<MealToken, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "mark_used: failed to acquire DB connection for token_id {}: {}",
                tokenid, e
            );
            e
        })?;

        conn.connection().transaction(|conn| {
            use crate::db::schema::meal_tokens::dsl::*;

            let token: MealToken = meal_tokens
                .filter(token_id.eq(tokenid))
                .for_update()
                .first::<MealToken>(conn)
                .map_err(|e| {
                    error!("mark_used: error fetching token {}: {}", tokenid, e);
                    match e {
                        Error::NotFound => {
                            RepositoryError::NotFound(format!("meal_tokens: {tokenid}"))
                        }
                        other => RepositoryError::DatabaseError(other),
                    }
                })?;

            if token.status != TokenStatus::Pending {
                return Err(RepositoryError::AlreadyUsed(token.code));
            }

            diesel::update(meal_tokens.filter(token_id.eq(tokenid)))
                .set((
                    status.eq(TokenStatus::Used),
                    served_at.eq(Some(Utc::now())),
                    served_by.eq(Some(staff_user_id)),
                ))
                .get_result::<MealToken>(conn)
                .map_err(RepositoryError::DatabaseError)
        })
    }

    /// Student view of their own tokens, newest first.
    pub fn tokens_for_user(&self, userid: i32) -> Result<Vec<MealToken>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "tokens_for_user: failed to acquire DB connection for user_id {}: {}",
                userid, e
            );
            e
        })?;

        use crate::db::schema::{meal_tokens, orders};
        meal_tokens::table
            .inner_join(orders::table.on(meal_tokens::order_id.eq(orders::order_id)))
            .filter(orders::user_id.eq(userid))
            .select(MealToken::as_select())
            .order_by((meal_tokens::generated_at.desc(), meal_tokens::token_id.desc()))
            .load::<MealToken>(conn.connection())
            .map_err(|e| {
                error!(
                    "tokens_for_user: error fetching tokens for user_id {}: {}",
                    userid, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    /// Staff fulfillment queue: today's tokens in order placement order.
    pub fn tokens_today(&self) -> Result<Vec<MealToken>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("tokens_today: failed to acquire DB connection: {}", e);
            e
        })?;

        let today_start = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();

        use crate::db::schema::{meal_tokens, orders};
        meal_tokens::table
            .inner_join(orders::table.on(meal_tokens::order_id.eq(orders::order_id)))
            .filter(meal_tokens::generated_at.ge(today_start))
            .select(MealToken::as_select())
            .order_by((orders::order_date.asc(), meal_tokens::token_id.asc()))
            .load::<MealToken>(conn.connection())
            .map_err(|e| {
                error!("tokens_today: error fetching today's tokens: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn count_today(&self) -> Result<i64, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("count_today: failed to acquire DB connection: {}", e);
            e
        })?;

        let today_start = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            .and_utc();

        use crate::db::schema::meal_tokens::dsl::*;
        meal_tokens
            .filter(generated_at.ge(today_start))
            .count()
            .get_result(conn.connection())
            .map_err(|e| {
                error!("count_today: error counting today's tokens: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }

    /// Token counts per (day, meal type, status), newest day first.
    pub fn token_report(&self) -> Result<Vec<TokenReportRow>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("token_report: failed to acquire DB connection: {}", e);
            e
        })?;

        use crate::db::schema::{meal_tokens, orders};
        let rows = meal_tokens::table
            .inner_join(orders::table.on(meal_tokens::order_id.eq(orders::order_id)))
            .select((
                meal_tokens::generated_at,
                orders::meal_type,
                meal_tokens::status,
            ))
            .load::<(chrono::DateTime<Utc>, Option<MealType>, TokenStatus)>(conn.connection())
            .map_err(|e| {
                error!("token_report: error fetching tokens: {}", e);
                RepositoryError::DatabaseError(e)
            })?;

        let mut buckets: HashMap<(NaiveDate, Option<MealType>, TokenStatus), i64> = HashMap::new();
        for (generated, meal, token_status) in rows {
            *buckets
                .entry((generated.date_naive(), meal, token_status))
                .or_insert(0) += 1;
        }

        let mut report: Vec<TokenReportRow> = buckets
            .into_iter()
            .map(|((day, meal, token_status), count)| TokenReportRow {
                day,
                meal_type: meal,
                status: token_status,
                count,
            })
            .collect();
        report.sort_by(|a, b| {
            b.day
                .cmp(&a.day)
                .then_with(|| a.meal_type.map(|m| m.as_str()).cmp(&b.meal_type.map(|m| m.as_str())))
                .then_with(|| a.status.as_str().cmp(b.status.as_str()))
        });
        Ok(report)
    }
}
