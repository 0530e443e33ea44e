//! One-shot backfill for orders created before meal types were recorded.
//! Rows with a NULL meal_type get the fallback passed on the command line.
//!
//! Usage: `backfill_meal_types [meal_type]` (defaults to lunch).

use canteen_backend::db::{establish_connection_pool, OrderOperations};
use canteen_backend::models::enums::MealType;
use dotenvy::dotenv;

fn main() {
    if let Err(e) = dotenv() {
        eprintln!("Failed to load .env file: {}", e);
    }
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let fallback = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<MealType>() {
            Ok(meal) => meal,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(2);
            }
        },
        None => MealType::Lunch,
    };

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = establish_connection_pool(&database_url);
    let order_ops = OrderOperations::new(pool);

    match order_ops.backfill_meal_types(fallback) {
        Ok(touched) => println!("Backfilled {} orders with meal_type={}", touched, fallback),
        Err(e) => {
            eprintln!("Backfill failed: {}", e);
            std::process::exit(1);
        }
    }
}
