use sqlx::postgres::PgPoolOptions;
use dotenv::dotenv;
use env_logger::Env;
use std::env;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let database_url = env::var("DATABASE_URL")?;

    let pool = PgPoolOptions::new()
        .connect(&database_url)
        .await?;

    log::info!("Resetting database...");

    // Truncate tables but keep schema
    sqlx::query("TRUNCATE TABLE questions, categories RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await?;

    log::info!("Database reset successfully");
    Ok(())
}
