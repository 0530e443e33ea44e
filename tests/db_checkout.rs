mod common;

use bigdecimal::BigDecimal;
use canteen_backend::db::{DbConnection, OrderOperations, RepositoryError};
use canteen_backend::models::enums::{Category, MealType, OrderStatus, TokenStatus};
use canteen_backend::test_utils::seed_menu_item;
use diesel::prelude::*;
use diesel::PgConnection;
use std::str::FromStr;

fn orders_count(conn: &mut PgConnection) -> i64 {
    canteen_backend::db::schema::orders::table
        .count()
        .get_result(conn)
        .expect("count orders")
}

fn tokens_count(conn: &mut PgConnection) -> i64 {
    canteen_backend::db::schema::meal_tokens::table
        .count()
        .get_result(conn)
        .expect("count meal_tokens")
}

fn decimal(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).expect("decimal literal")
}

#[actix_rt::test]
async fn checkout_snapshots_prices_and_issues_one_pending_token() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let mut conn = DbConnection::new(&pool).expect("db connection");

    let thali = fixtures.menu_item_ids[0]; // 50.00
    let lassi = fixtures.menu_item_ids[1]; // 30.00

    let order_ops = OrderOperations::new(pool.clone());
    let placed = order_ops
        .checkout(fixtures.student_id, MealType::Lunch, vec![(thali, 2), (lassi, 1)])
        .expect("checkout");

    assert_eq!(placed.total_amount, decimal("130.00"));

    let order = order_ops.get_order(placed.order_id).expect("fetch order");
    assert_eq!(order.user_id, fixtures.student_id);
    assert_eq!(order.meal_type, Some(MealType::Lunch));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_amount, decimal("130.00"));

    let items = order_ops
        .get_order_items(placed.order_id)
        .expect("order items");
    assert_eq!(items.len(), 2);
    let thali_line = items.iter().find(|i| i.item_id == thali).expect("thali line");
    assert_eq!(thali_line.quantity, 2);
    assert_eq!(thali_line.price, decimal("50.00"));
    let lassi_line = items.iter().find(|i| i.item_id == lassi).expect("lassi line");
    assert_eq!(lassi_line.quantity, 1);
    assert_eq!(lassi_line.price, decimal("30.00"));

    use canteen_backend::db::schema::meal_tokens::dsl as tokens_dsl;
    let (token_code, token_status) = tokens_dsl::meal_tokens
        .filter(tokens_dsl::order_id.eq(placed.order_id))
        .select((tokens_dsl::code, tokens_dsl::status))
        .first::<(String, TokenStatus)>(conn.connection())
        .expect("token row");
    assert_eq!(token_code, placed.token_code);
    assert_eq!(token_status, TokenStatus::Pending);
    assert_eq!(tokens_count(conn.connection()), 1);
}

#[actix_rt::test]
async fn order_totals_survive_later_price_changes() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let mut conn = DbConnection::new(&pool).expect("db connection");

    let thali = fixtures.menu_item_ids[0];
    let order_ops = OrderOperations::new(pool.clone());
    let placed = order_ops
        .checkout(fixtures.student_id, MealType::Dinner, vec![(thali, 1)])
        .expect("checkout");

    use canteen_backend::db::schema::menu_items::dsl as menu_dsl;
    diesel::update(menu_dsl::menu_items.filter(menu_dsl::item_id.eq(thali)))
        .set(menu_dsl::price.eq(decimal("75.00")))
        .execute(conn.connection())
        .expect("raise price");

    let order = order_ops.get_order(placed.order_id).expect("fetch order");
    assert_eq!(order.total_amount, decimal("50.00"));
    let items = order_ops
        .get_order_items(placed.order_id)
        .expect("order items");
    assert_eq!(items[0].price, decimal("50.00"));
}

#[actix_rt::test]
async fn empty_cart_checkout_is_rejected_without_side_effects() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let mut conn = DbConnection::new(&pool).expect("db connection");

    let order_ops = OrderOperations::new(pool.clone());
    let err = order_ops
        .checkout(fixtures.student_id, MealType::Lunch, vec![])
        .expect_err("empty cart must fail");
    assert!(matches!(err, RepositoryError::EmptyCart));
    assert_eq!(orders_count(conn.connection()), 0);
    assert_eq!(tokens_count(conn.connection()), 0);
}

#[actix_rt::test]
async fn nonpositive_quantity_is_rejected() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();

    let thali = fixtures.menu_item_ids[0];
    let order_ops = OrderOperations::new(pool);
    let err = order_ops
        .checkout(fixtures.student_id, MealType::Lunch, vec![(thali, 0)])
        .expect_err("zero quantity must fail");
    assert!(matches!(err, RepositoryError::ValidationError(_)));
}

#[actix_rt::test]
async fn missing_menu_item_rolls_back_the_whole_order() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let mut conn = DbConnection::new(&pool).expect("db connection");

    let thali = fixtures.menu_item_ids[0];
    let order_ops = OrderOperations::new(pool.clone());
    let err = order_ops
        .checkout(
            fixtures.student_id,
            MealType::Lunch,
            vec![(thali, 1), (999_999, 1)],
        )
        .expect_err("unknown item must fail");
    assert!(matches!(err, RepositoryError::NotFound(_)));
    assert_eq!(orders_count(conn.connection()), 0);
    assert_eq!(tokens_count(conn.connection()), 0);
}

#[actix_rt::test]
async fn token_codes_stay_unique_across_many_checkouts() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();

    let lassi = fixtures.menu_item_ids[1];
    let order_ops = OrderOperations::new(pool);

    let mut codes = std::collections::HashSet::new();
    for _ in 0..20 {
        let placed = order_ops
            .checkout(fixtures.student_id, MealType::Snacks, vec![(lassi, 1)])
            .expect("checkout");
        assert_eq!(placed.token_code.len(), 8);
        assert!(codes.insert(placed.token_code));
    }
}

#[actix_rt::test]
async fn update_status_walks_the_workflow_but_not_out_of_terminal_states() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();

    let thali = fixtures.menu_item_ids[0];
    let order_ops = OrderOperations::new(pool);
    let placed = order_ops
        .checkout(fixtures.student_id, MealType::Lunch, vec![(thali, 1)])
        .expect("checkout");

    for next in [
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ] {
        let order = order_ops
            .update_status(placed.order_id, next)
            .expect("advance status");
        assert_eq!(order.status, next);
    }

    let err = order_ops
        .update_status(placed.order_id, OrderStatus::Pending)
        .expect_err("completed orders are frozen");
    assert!(matches!(err, RepositoryError::ValidationError(_)));
}

#[actix_rt::test]
async fn backfill_assigns_fallback_only_to_null_meal_types() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let mut conn = DbConnection::new(&pool).expect("db connection");

    let _ = seed_menu_item(
        conn.connection(),
        "Poha",
        "Morning batch",
        "20.00",
        Category::Breakfast,
        true,
    )
    .expect("extra item");

    let order_ops = OrderOperations::new(pool.clone());
    let placed = order_ops
        .checkout(
            fixtures.student_id,
            MealType::Breakfast,
            vec![(fixtures.menu_item_ids[0], 1)],
        )
        .expect("checkout");

    // A legacy row from before meal types were tracked.
    use canteen_backend::db::schema::orders::dsl as orders_dsl;
    diesel::insert_into(orders_dsl::orders)
        .values((
            orders_dsl::user_id.eq(fixtures.student_id),
            orders_dsl::meal_type.eq(None::<MealType>),
            orders_dsl::status.eq(OrderStatus::Pending),
        ))
        .execute(conn.connection())
        .expect("legacy order");

    let touched = order_ops
        .backfill_meal_types(MealType::Lunch)
        .expect("backfill");
    assert_eq!(touched, 1);

    let order = order_ops.get_order(placed.order_id).expect("fetch order");
    assert_eq!(order.meal_type, Some(MealType::Breakfast));
}
