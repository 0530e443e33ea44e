use crate::db::{establish_connection_pool, run_db_migrations, DbConnection, RepositoryError};
use crate::models::enums::{Category, Role};
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use std::str::FromStr;
use std::sync::Once;

// Fixture strategy:
// - One user per role plus two priced menu items, seeded via helpers below.
// - Token codes are generated, never seeded; fetch them through TokenOperations.
const TEST_SESSION_JWT_SECRET: &str = "test-session-secret";
const TEST_SESSION_JWT_ISSUER: &str = "canteen-backend-test";
static TEST_THREADS_GUARD: Once = Once::new();

fn ensure_single_threaded_tests() {
    TEST_THREADS_GUARD.call_once(|| {
        let threads = test_threads_from_args().or_else(|| std::env::var("RUST_TEST_THREADS").ok());
        if threads.as_deref() != Some("1") {
            panic!(
                "Tests must run with --test-threads=1 or RUST_TEST_THREADS=1 because init_test_env mutates environment variables."
            );
        }
    });
}

fn test_threads_from_args() -> Option<String> {
    let mut args = std::env::args();
    while let Some(arg) = args.next() {
        if arg == "--test-threads" {
            return args.next();
        }
        if let Some(value) = arg.strip_prefix("--test-threads=") {
            return Some(value.to_string());
        }
    }
    None
}

fn set_env_if_unset(key: &str, value: &str) {
    if std::env::var_os(key).is_none() {
        std::env::set_var(key, value);
    }
}

pub fn init_test_env() {
    ensure_single_threaded_tests();
    set_env_if_unset("SESSION_JWT_SECRET", TEST_SESSION_JWT_SECRET);
    set_env_if_unset("SESSION_JWT_ISSUER", TEST_SESSION_JWT_ISSUER);
}

pub fn build_test_pool(database_url: &str) -> Pool<ConnectionManager<PgConnection>> {
    let pool = establish_connection_pool(database_url);
    run_db_migrations(pool.clone()).expect("Unable to run migrations");
    pool
}

pub fn reset_db(pool: &Pool<ConnectionManager<PgConnection>>) -> Result<(), RepositoryError> {
    let mut conn = DbConnection::new(pool)?;
    diesel::sql_query(
        "TRUNCATE TABLE meal_tokens, order_items, orders, reviews, menu_items, users \
         RESTART IDENTITY CASCADE",
    )
    .execute(conn.connection())
    .map_err(RepositoryError::DatabaseError)?;
    Ok(())
}

pub struct TestFixtures {
    pub student_id: i32,
    pub staff_id: i32,
    pub admin_id: i32,
    pub menu_item_ids: Vec<i32>,
}

/// Seeds one user per role and two available lunch items priced 50.00 and
/// 30.00, the amounts most assertions are written against.
pub fn seed_basic_fixtures(
    pool: &Pool<ConnectionManager<PgConnection>>,
) -> Result<TestFixtures, RepositoryError> {
    let mut conn = DbConnection::new(pool)?;

    let student_id = insert_user(conn.connection(), "test-student", Role::Student)?;
    let staff_id = insert_user(conn.connection(), "test-staff", Role::Staff)?;
    let admin_id = insert_user(conn.connection(), "test-admin", Role::Admin)?;

    let thali_id = seed_menu_item(
        conn.connection(),
        "Veg Thali",
        "Rice, dal, two sabzis and roti",
        "50.00",
        Category::Lunch,
        true,
    )?;
    let lassi_id = seed_menu_item(
        conn.connection(),
        "Sweet Lassi",
        "Chilled, in a steel tumbler",
        "30.00",
        Category::Drinks,
        true,
    )?;

    Ok(TestFixtures {
        student_id,
        staff_id,
        admin_id,
        menu_item_ids: vec![thali_id, lassi_id],
    })
}

pub fn insert_user(
    conn: &mut PgConnection,
    username_val: &str,
    role_val: Role,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::users::dsl::*;

    diesel::insert_into(users)
        .values((
            username.eq(username_val),
            phone.eq("9999999999"),
            role.eq(role_val),
        ))
        .returning(user_id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}

pub fn seed_menu_item(
    conn: &mut PgConnection,
    name_val: &str,
    description_val: &str,
    price_val: &str,
    category_val: Category,
    available_val: bool,
) -> Result<i32, RepositoryError> {
    use crate::db::schema::menu_items::dsl::*;

    let price_decimal = BigDecimal::from_str(price_val)
        .map_err(|e| RepositoryError::ValidationError(format!("bad fixture price: {e}")))?;

    diesel::insert_into(menu_items)
        .values((
            name.eq(name_val),
            description.eq(description_val),
            price.eq(price_decimal),
            category.eq(category_val),
            available.eq(available_val),
        ))
        .returning(item_id)
        .get_result(conn)
        .map_err(RepositoryError::DatabaseError)
}
