use crate::db::schema::menu_items::dsl::*;
use crate::db::{DbConnection, RepositoryError};
use crate::models::menu::{MenuItem, NewMenuItem, UpdateMenuItem};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error;
use log::error;

#[derive(Clone)]
pub struct MenuOperations {
    pool: Pool<ConnectionManager<PgConnection>>,
}

impl MenuOperations {
    pub fn new(pool: Pool<ConnectionManager<PgConnection>>) -> Self {
        Self { pool }
    }

    fn check_price(candidate: &BigDecimal) -> Result<(), RepositoryError> {
        if candidate <= &BigDecimal::from(0) {
            return Err(RepositoryError::ValidationError(format!(
                "Menu item price must be positive, got {candidate}"
            )));
        }
        Ok(())
    }

    pub fn add_menu_item(&self, menu_item: NewMenuItem) -> Result<MenuItem, RepositoryError> {
        Self::check_price(&menu_item.price)?;

        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("add_menu_item: failed to acquire DB connection: {}", e);
            e
        })?;

        diesel::insert_into(menu_items)
            .values(&menu_item)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "add_menu_item: error inserting menu item '{}': {}",
                    menu_item.name, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn update_menu_item(
        &self,
        itemid: i32,
        changed_menu_item: UpdateMenuItem,
    ) -> Result<MenuItem, RepositoryError> {
        if let Some(new_price) = changed_menu_item.price.as_ref() {
            Self::check_price(new_price)?;
        }

        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "update_menu_item: failed to acquire DB connection for id {}: {}",
                itemid, e
            );
            e
        })?;

        diesel::update(menu_items.filter(item_id.eq(itemid)))
            .set(&changed_menu_item)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "update_menu_item: error updating menu item with id {}: {}",
                    itemid, e
                );
                match e {
                    Error::NotFound => RepositoryError::NotFound(format!("menu_items: {itemid}")),
                    other => RepositoryError::DatabaseError(other),
                }
            })
    }

    pub fn remove_menu_item(&self, itemid: i32) -> Result<MenuItem, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "remove_menu_item: failed to acquire DB connection for id {}: {}",
                itemid, e
            );
            e
        })?;

        diesel::delete(menu_items.filter(item_id.eq(itemid)))
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "remove_menu_item: error deleting menu item with id {}: {}",
                    itemid, e
                );
                match e {
                    Error::NotFound => RepositoryError::NotFound(format!("menu_items: {itemid}")),
                    other => RepositoryError::DatabaseError(other),
                }
            })
    }

    /// Full menu, staff/admin view. Unavailable items included.
    pub fn get_all_menu_items(&self) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("get_all_menu_items: failed to acquire DB connection: {}", e);
            e
        })?;

        menu_items
            .order_by((category.asc(), name.asc()))
            .load::<MenuItem>(conn.connection())
            .map_err(|e| {
                error!("get_all_menu_items: error fetching menu items: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }

    /// Student view: available items only, optionally restricted to a date.
    pub fn get_available_menu_items(
        &self,
        on_date: Option<NaiveDate>,
    ) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_available_menu_items: failed to acquire DB connection: {}",
                e
            );
            e
        })?;

        let mut query = menu_items.filter(available.eq(true)).into_boxed();
        if let Some(day) = on_date {
            query = query.filter(date_available.eq(day));
        }

        query
            .order_by((category.asc(), name.asc()))
            .load::<MenuItem>(conn.connection())
            .map_err(|e| {
                error!(
                    "get_available_menu_items: error fetching menu items: {}",
                    e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    /// Cart resolution helper. Returns whatever subset of `itemids` exists;
    /// callers decide whether a missing id is an error.
    pub fn get_menu_items_by_ids(&self, itemids: &[i32]) -> Result<Vec<MenuItem>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_menu_items_by_ids: failed to acquire DB connection: {}",
                e
            );
            e
        })?;

        menu_items
            .filter(item_id.eq_any(itemids))
            .load::<MenuItem>(conn.connection())
            .map_err(|e| {
                error!(
                    "get_menu_items_by_ids: error fetching menu items {:?}: {}",
                    itemids, e
                );
                RepositoryError::DatabaseError(e)
            })
    }
}
