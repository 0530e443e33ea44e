//! Prints today's token queue and issuance count, for checking what the staff
//! screen should be showing when the numbers look off.
//!
//! Usage: `token_diagnostics` (reads DATABASE_URL from the environment).

use canteen_backend::db::{establish_connection_pool, TokenOperations};
use dotenvy::dotenv;

fn main() {
    if let Err(e) = dotenv() {
        eprintln!("Failed to load .env file: {}", e);
    }
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = establish_connection_pool(&database_url);
    let token_ops = TokenOperations::new(pool);

    let count = match token_ops.count_today() {
        Ok(count) => count,
        Err(e) => {
            eprintln!("Failed to count today's tokens: {}", e);
            std::process::exit(1);
        }
    };
    println!("Tokens issued today: {}", count);

    match token_ops.tokens_today() {
        Ok(tokens) => {
            for token in tokens {
                println!(
                    "  #{:<5} order {:<5} {} {} (generated {})",
                    token.token_id, token.order_id, token.code, token.status, token.generated_at
                );
            }
        }
        Err(e) => {
            eprintln!("Failed to fetch today's token queue: {}", e);
            std::process::exit(1);
        }
    }
}
