mod common;

use canteen_backend::db::{DbConnection, OrderOperations, RepositoryError, TokenOperations};
use canteen_backend::models::enums::{MealType, TokenStatus};
use chrono::Utc;
use diesel::prelude::*;

fn place_order(
    pool: &diesel::r2d2::Pool<diesel::r2d2::ConnectionManager<diesel::PgConnection>>,
    user_id: i32,
    item_id: i32,
    meal: MealType,
) -> i32 {
    OrderOperations::new(pool.clone())
        .checkout(user_id, meal, vec![(item_id, 1)])
        .expect("checkout")
        .order_id
}

fn token_id_for_order(
    pool: &diesel::r2d2::Pool<diesel::r2d2::ConnectionManager<diesel::PgConnection>>,
    for_order_id: i32,
) -> i32 {
    use canteen_backend::db::schema::meal_tokens::dsl::*;
    let mut conn = DbConnection::new(pool).expect("db connection");
    meal_tokens
        .filter(order_id.eq(for_order_id))
        .select(token_id)
        .first::<i32>(conn.connection())
        .expect("token for order")
}

#[actix_rt::test]
async fn mark_used_stamps_server_and_time() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();

    let order_id = place_order(
        &pool,
        fixtures.student_id,
        fixtures.menu_item_ids[0],
        MealType::Lunch,
    );
    let token_id = token_id_for_order(&pool, order_id);

    let token_ops = TokenOperations::new(pool);
    let before = Utc::now();
    let token = token_ops
        .mark_used(token_id, fixtures.staff_id)
        .expect("mark used");

    assert_eq!(token.status, TokenStatus::Used);
    assert_eq!(token.served_by, Some(fixtures.staff_id));
    let served_at = token.served_at.expect("served_at stamped");
    assert!(served_at >= before && served_at <= Utc::now());
}

#[actix_rt::test]
async fn second_mark_fails_and_preserves_the_original_stamps() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();

    let order_id = place_order(
        &pool,
        fixtures.student_id,
        fixtures.menu_item_ids[0],
        MealType::Lunch,
    );
    let token_id = token_id_for_order(&pool, order_id);

    let token_ops = TokenOperations::new(pool);
    let first = token_ops
        .mark_used(token_id, fixtures.staff_id)
        .expect("first mark");

    let err = token_ops
        .mark_used(token_id, fixtures.admin_id)
        .expect_err("second mark must fail");
    assert!(matches!(err, RepositoryError::AlreadyUsed(_)));

    let tokens = token_ops
        .tokens_for_user(fixtures.student_id)
        .expect("tokens for user");
    let token = tokens.iter().find(|t| t.token_id == token_id).expect("token");
    assert_eq!(token.served_at, first.served_at);
    assert_eq!(token.served_by, Some(fixtures.staff_id));
}

#[actix_rt::test]
async fn mark_used_unknown_token_is_not_found() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();

    let token_ops = TokenOperations::new(pool);
    let err = token_ops
        .mark_used(424242, fixtures.staff_id)
        .expect_err("unknown token");
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[actix_rt::test]
async fn todays_queue_follows_order_placement_order() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();

    let first_order = place_order(
        &pool,
        fixtures.student_id,
        fixtures.menu_item_ids[0],
        MealType::Breakfast,
    );
    let second_order = place_order(
        &pool,
        fixtures.student_id,
        fixtures.menu_item_ids[1],
        MealType::Lunch,
    );

    let token_ops = TokenOperations::new(pool);
    let queue = token_ops.tokens_today().expect("today's queue");
    assert_eq!(queue.len(), 2);
    assert_eq!(queue[0].order_id, first_order);
    assert_eq!(queue[1].order_id, second_order);

    assert_eq!(token_ops.count_today().expect("count"), 2);
}

#[actix_rt::test]
async fn report_buckets_by_day_meal_and_status() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();

    let lunch_one = place_order(
        &pool,
        fixtures.student_id,
        fixtures.menu_item_ids[0],
        MealType::Lunch,
    );
    let _lunch_two = place_order(
        &pool,
        fixtures.student_id,
        fixtures.menu_item_ids[0],
        MealType::Lunch,
    );
    let _dinner = place_order(
        &pool,
        fixtures.student_id,
        fixtures.menu_item_ids[1],
        MealType::Dinner,
    );

    let token_ops = TokenOperations::new(pool.clone());
    token_ops
        .mark_used(token_id_for_order(&pool, lunch_one), fixtures.staff_id)
        .expect("redeem one lunch token");

    let report = token_ops.token_report().expect("report");
    let today = Utc::now().date_naive();

    let lunch_pending = report
        .iter()
        .find(|r| r.meal_type == Some(MealType::Lunch) && r.status == TokenStatus::Pending)
        .expect("pending lunch bucket");
    assert_eq!(lunch_pending.day, today);
    assert_eq!(lunch_pending.count, 1);

    let lunch_used = report
        .iter()
        .find(|r| r.meal_type == Some(MealType::Lunch) && r.status == TokenStatus::Used)
        .expect("used lunch bucket");
    assert_eq!(lunch_used.count, 1);

    let dinner_pending = report
        .iter()
        .find(|r| r.meal_type == Some(MealType::Dinner) && r.status == TokenStatus::Pending)
        .expect("pending dinner bucket");
    assert_eq!(dinner_pending.count, 1);
}

#[actix_rt::test]
async fn deleting_an_order_cascades_to_its_token() {
    let (pool, fixtures) = common::setup_pool_with_fixtures();
    let mut conn = DbConnection::new(&pool).expect("db connection");

    let placed_order = place_order(
        &pool,
        fixtures.student_id,
        fixtures.menu_item_ids[0],
        MealType::Lunch,
    );

    use canteen_backend::db::schema::orders::dsl as orders_dsl;
    diesel::delete(orders_dsl::orders.filter(orders_dsl::order_id.eq(placed_order)))
        .execute(conn.connection())
        .expect("delete order");

    use canteen_backend::db::schema::meal_tokens::dsl as tokens_dsl;
    let remaining: i64 = tokens_dsl::meal_tokens
        .count()
        .get_result(conn.connection())
        .expect("count tokens");
    assert_eq!(remaining, 0);
}
