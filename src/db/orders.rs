use crate::db::tokens::TokenOperations;
use crate::db::{DbConnection, RepositoryError};
use crate::models::enums::{MealType, OrderStatus};
use crate::models::menu::MenuItem;
use crate::models::order::{NewOrderItem, Order, OrderItem};
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error;
use log::{debug, error};
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Result of a successful checkout: the committed order plus its meal token.
#[derive(Serialize, ToSchema, Clone, Debug)]
pub struct PlacedOrder {
    pub order_id: i32,
    #[schema(value_type = String)]
    pub total_amount: BigDecimal,
    pub token_code: String,
}

#[derive(Clone)]
pub struct OrderOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl OrderOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    /// Convert a cart into a persisted order with line items and a meal token.
    ///
    /// Everything runs inside one transaction: the order row, the line items
    /// with their price snapshots, the recomputed total and the token insert
    /// either all commit or all roll back. Token issuance is an explicit call
    /// into [`TokenOperations::issue_for_order`] at the end of the
    /// transaction, so the two-step commit is visible here rather than hidden
    /// behind a save hook.
    pub fn checkout(
        &self,
        userid: i32,
        meal: MealType,
        cart_entries: Vec<(i32, i32)>,
    ) -> Result<PlacedOrder, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("checkout: failed to acquire DB connection: {}", e);
            e
        })?;

        if cart_entries.is_empty() {
            return Err(RepositoryError::EmptyCart);
        }
        for (itemid, qty) in &cart_entries {
            if *qty <= 0 {
                return Err(RepositoryError::ValidationError(format!(
                    "Quantity for menu item {} must be positive, got {}",
                    itemid, qty
                )));
            }
        }

        conn.connection().transaction(|conn| {
            let itemids: Vec<i32> = cart_entries.iter().map(|(itemid, _)| *itemid).collect();

            let items_in_cart: Vec<MenuItem>;
            {
                use crate::db::schema::menu_items;
                items_in_cart = menu_items::table
                    .filter(menu_items::item_id.eq_any(&itemids))
                    .load::<MenuItem>(conn)
                    .map_err(|e| {
                        error!(
                            "checkout: error loading menu items for item_ids {:?}: {}",
                            itemids, e
                        );
                        RepositoryError::DatabaseError(e)
                    })?;
            }

            let items_by_id: HashMap<i32, &MenuItem> = items_in_cart
                .iter()
                .map(|item| (item.item_id, item))
                .collect();
            for itemid in &itemids {
                if !items_by_id.contains_key(itemid) {
                    return Err(RepositoryError::NotFound(format!("menu_items: {itemid}")));
                }
            }

            let new_order_id: i32;
            {
                use crate::db::schema::orders::dsl::*;
                new_order_id = diesel::insert_into(orders)
                    .values((
                        user_id.eq(userid),
                        meal_type.eq(Some(meal)),
                        status.eq(OrderStatus::Pending),
                    ))
                    .returning(order_id)
                    .get_result::<i32>(conn)
                    .map_err(RepositoryError::DatabaseError)?;
            }

            // Snapshot each item's current price; these rows are never updated.
            let mut order_total = BigDecimal::from(0);
            let mut new_order_items: Vec<NewOrderItem> = Vec::new();
            for (itemid, qty) in &cart_entries {
                let item = items_by_id[itemid];
                order_total += item.price.clone() * BigDecimal::from(*qty);
                new_order_items.push(NewOrderItem {
                    order_id: new_order_id,
                    item_id: *itemid,
                    quantity: *qty,
                    price: item.price.clone(),
                });
            }

            {
                use crate::db::schema::order_items::dsl::*;
                diesel::insert_into(order_items)
                    .values(&new_order_items)
                    .execute(conn)
                    .map_err(RepositoryError::DatabaseError)?;
            }

            {
                use crate::db::schema::orders::dsl::*;
                diesel::update(orders.filter(order_id.eq(new_order_id)))
                    .set(total_amount.eq(order_total.clone()))
                    .execute(conn)
                    .map_err(RepositoryError::DatabaseError)?;
            }

            let token_code = TokenOperations::issue_for_order(conn, new_order_id)?;

            debug!(
                "checkout: created order {} for user {} with {} line items, total {}",
                new_order_id,
                userid,
                new_order_items.len(),
                order_total
            );

            Ok(PlacedOrder {
                order_id: new_order_id,
                total_amount: order_total,
                token_code,
            })
        })
    }

    pub fn get_orders_by_userid(&self, userid: i32) -> Result<Vec<Order>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_orders_by_userid: failed to acquire DB connection for user_id {}: {}",
                userid, e
            );
            e
        })?;

        use crate::db::schema::orders::dsl::*;
        orders
            .filter(user_id.eq(userid))
            .order_by((order_date.desc(), order_id.desc()))
            .load::<Order>(conn.connection())
            .map_err(|e| {
                error!(
                    "get_orders_by_userid: error loading orders for user_id {}: {}",
                    userid, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn get_order(&self, orderid: i32) -> Result<Order, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_order: failed to acquire DB connection for order_id {}: {}",
                orderid, e
            );
            e
        })?;

        use crate::db::schema::orders::dsl::*;
        orders
            .filter(order_id.eq(orderid))
            .first::<Order>(conn.connection())
            .map_err(|e| {
                error!("get_order: error fetching order {}: {}", orderid, e);
                match e {
                    Error::NotFound => RepositoryError::NotFound(format!("orders: {orderid}")),
                    other => RepositoryError::DatabaseError(other),
                }
            })
    }

    pub fn get_order_items(&self, orderid: i32) -> Result<Vec<OrderItem>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_order_items: failed to acquire DB connection for order_id {}: {}",
                orderid, e
            );
            e
        })?;

        use crate::db::schema::order_items::dsl::*;
        order_items
            .filter(order_id.eq(orderid))
            .order_by(order_item_id.asc())
            .load::<OrderItem>(conn.connection())
            .map_err(|e| {
                error!(
                    "get_order_items: error fetching items for order {}: {}",
                    orderid, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    /// Staff-driven status change. Terminal orders (completed/cancelled) stay
    /// terminal; beyond that the workflow is a plain status field, matching
    /// the kitchen's actual process.
    pub fn update_status(
        &self,
        orderid: i32,
        new_status: OrderStatus,
    ) -> Result<Order, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "update_status: failed to acquire DB connection for order_id {}: {}",
                orderid, e
            );
            e
        })?;

        conn.connection().transaction(|conn| {
            use crate::db::schema::orders::dsl::*;

            let current: Order = orders
                .filter(order_id.eq(orderid))
                .for_update()
                .first::<Order>(conn)
                .map_err(|e| {
                    error!("update_status: error fetching order {}: {}", orderid, e);
                    match e {
                        Error::NotFound => RepositoryError::NotFound(format!("orders: {orderid}")),
                        other => RepositoryError::DatabaseError(other),
                    }
                })?;

            if current.status.is_terminal() {
                return Err(RepositoryError::ValidationError(format!(
                    "Order {} is already {} and cannot change status",
                    orderid, current.status
                )));
            }

            diesel::update(orders.filter(order_id.eq(orderid)))
                .set(status.eq(new_status))
                .get_result::<Order>(conn)
                .map_err(RepositoryError::DatabaseError)
        })
    }

    /// Assign `fallback` to legacy orders that predate meal type tracking.
    /// Returns the number of rows touched. Used by the backfill binary.
    pub fn backfill_meal_types(&self, fallback: MealType) -> Result<usize, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "backfill_meal_types: failed to acquire DB connection: {}",
                e
            );
            e
        })?;

        use crate::db::schema::orders::dsl::*;
        diesel::update(orders.filter(meal_type.is_null()))
            .set(meal_type.eq(Some(fallback)))
            .execute(conn.connection())
            .map_err(|e| {
                error!("backfill_meal_types: error updating orders: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }
}
