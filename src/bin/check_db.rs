use sqlx::postgres::PgPoolOptions;
use dotenv::dotenv;
use std::env;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    let database_url = env::var("DATABASE_URL")?;

    let pool = PgPoolOptions::new()
        .connect(&database_url)
        .await?;

    let categories: Vec<(i32, String)> = sqlx::query_as("SELECT id, type FROM categories ORDER BY id")
        .fetch_all(&pool)
        .await?;
    println!("Categories count: {}", categories.len());
    for (id, kind) in &categories {
        println!("Category {}: {}", id, kind);
    }

    let per_category: Vec<(String, i64)> = sqlx::query_as(
        "SELECT category, COUNT(*) FROM questions GROUP BY category ORDER BY category",
    )
    .fetch_all(&pool)
    .await?;
    let total: i64 = per_category.iter().map(|(_, n)| n).sum();
    println!("Questions count: {}", total);
    for (category, count) in per_category {
        let known = categories.iter().any(|(id, _)| id.to_string() == category);
        println!(
            "Category {}: {} questions{}",
            category,
            count,
            if known { "" } else { " (unknown category)" }
        );
    }

    Ok(())
}
