//! Session-scoped cart, backed by a Redis hash per user.
//!
//! The cart holds menu item ids and quantities only; prices are resolved
//! against the live menu when the cart is viewed or checked out, and are not
//! snapshotted until an order is placed. Nothing here is durable beyond the
//! Redis instance's own lifetime.

use crate::db::RepositoryError;
use crate::models::menu::MenuItem;
use bigdecimal::BigDecimal;
use log::{debug, error};
use redis::Commands;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Cart storage error: {0}")]
    Storage(#[from] redis::RedisError),
    #[error("Corrupt cart entry: {0}")]
    CorruptEntry(String),
}

/// A cart entry resolved against the menu, with its computed line total.
#[derive(Clone, Debug)]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: i32,
    pub line_total: BigDecimal,
}

#[derive(Clone)]
pub struct CartStore {
    client: redis::Client,
}

impl CartStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    fn cart_key(userid: i32) -> String {
        format!("cart:{userid}")
    }

    /// Increment the quantity for `itemid` by one, creating the entry if
    /// absent. No existence or availability check happens at add time; stale
    /// entries surface as NotFound when the cart is priced.
    pub fn add_item(&self, userid: i32, itemid: i32) -> Result<i64, CartError> {
        let mut conn = self.client.get_connection().map_err(|e| {
            error!("add_item: failed to connect to cart storage: {}", e);
            e
        })?;

        let quantity: i64 = conn.hincr(Self::cart_key(userid), itemid, 1)?;
        debug!(
            "add_item: user {} now has {} of item {}",
            userid, quantity, itemid
        );
        Ok(quantity)
    }

    /// Decrement the quantity for `itemid`; the entry disappears at zero.
    /// Removing an absent item leaves the cart unchanged.
    pub fn remove_item(&self, userid: i32, itemid: i32) -> Result<i64, CartError> {
        let mut conn = self.client.get_connection().map_err(|e| {
            error!("remove_item: failed to connect to cart storage: {}", e);
            e
        })?;

        let key = Self::cart_key(userid);
        let present: bool = conn.hexists(&key, itemid)?;
        if !present {
            return Ok(0);
        }

        let remaining: i64 = conn.hincr(&key, itemid, -1)?;
        if remaining <= 0 {
            let _: () = conn.hdel(&key, itemid)?;
            return Ok(0);
        }
        Ok(remaining)
    }

    pub fn clear(&self, userid: i32) -> Result<(), CartError> {
        let mut conn = self.client.get_connection().map_err(|e| {
            error!("clear: failed to connect to cart storage: {}", e);
            e
        })?;

        let _: () = conn.del(Self::cart_key(userid))?;
        debug!("clear: emptied cart for user {}", userid);
        Ok(())
    }

    /// Current cart contents as (item id, quantity), sorted by item id for a
    /// stable listing.
    pub fn entries(&self, userid: i32) -> Result<Vec<(i32, i32)>, CartError> {
        let mut conn = self.client.get_connection().map_err(|e| {
            error!("entries: failed to connect to cart storage: {}", e);
            e
        })?;

        let raw: HashMap<String, i64> = conn.hgetall(Self::cart_key(userid))?;
        let mut parsed: Vec<(i32, i32)> = Vec::with_capacity(raw.len());
        for (field, quantity) in raw {
            let itemid: i32 = field
                .parse()
                .map_err(|_| CartError::CorruptEntry(field.clone()))?;
            parsed.push((itemid, quantity as i32));
        }
        parsed.sort_by_key(|(itemid, _)| *itemid);
        Ok(parsed)
    }
}

/// Price cart entries against resolved menu rows. An entry whose menu item no
/// longer exists (deleted since it was added) fails with NotFound. Returns
/// the priced lines and the grand total.
pub fn price_cart(
    entries: &[(i32, i32)],
    items: Vec<MenuItem>,
) -> Result<(Vec<CartLine>, BigDecimal), RepositoryError> {
    let items_by_id: HashMap<i32, MenuItem> =
        items.into_iter().map(|item| (item.item_id, item)).collect();

    let mut lines = Vec::with_capacity(entries.len());
    let mut grand_total = BigDecimal::from(0);
    for (itemid, quantity) in entries {
        let item = items_by_id
            .get(itemid)
            .ok_or_else(|| RepositoryError::NotFound(format!("menu_items: {itemid}")))?;
        let line_total = item.price.clone() * BigDecimal::from(*quantity);
        grand_total += line_total.clone();
        lines.push(CartLine {
            item: item.clone(),
            quantity: *quantity,
            line_total,
        });
    }
    Ok((lines, grand_total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Category;
    use std::str::FromStr;

    fn menu_item(itemid: i32, price: &str) -> MenuItem {
        MenuItem {
            item_id: itemid,
            name: format!("Item {itemid}"),
            description: String::new(),
            price: BigDecimal::from_str(price).unwrap(),
            category: Category::Lunch,
            available: true,
            date_available: None,
        }
    }

    #[test]
    fn price_cart_totals_lines_and_grand_total() {
        let entries = vec![(1, 2), (2, 1)];
        let items = vec![menu_item(1, "50.00"), menu_item(2, "30.00")];

        let (lines, total) = price_cart(&entries, items).expect("price cart");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].line_total, BigDecimal::from_str("100.00").unwrap());
        assert_eq!(lines[1].line_total, BigDecimal::from_str("30.00").unwrap());
        assert_eq!(total, BigDecimal::from_str("130.00").unwrap());
    }

    #[test]
    fn price_cart_fails_when_item_was_deleted() {
        let entries = vec![(1, 1), (99, 1)];
        let items = vec![menu_item(1, "50.00")];

        let err = price_cart(&entries, items).expect_err("missing item");
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[test]
    fn price_cart_of_empty_entries_is_zero() {
        let (lines, total) = price_cart(&[], Vec::new()).expect("empty cart");
        assert!(lines.is_empty());
        assert_eq!(total, BigDecimal::from(0));
    }
}
