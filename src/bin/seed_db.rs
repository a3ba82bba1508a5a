use sqlx::postgres::PgPoolOptions;
use env_logger::Env;
use trivia_api::config::Settings;
use trivia_api::seed::load_seed_dir;
use trivia_api::store::PgStore;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let settings = Settings::from_env()?;
    let database_url = settings
        .database_url
        .as_deref()
        .ok_or("DATABASE_URL must be set")?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(database_url)
        .await?;

    let seed = load_seed_dir(&settings.seed_dir)?;
    let (categories, questions) = (seed.categories.len(), seed.questions.len());
    PgStore::new(pool).load_seed(seed).await?;

    log::info!("Seeded {} categories and {} questions", categories, questions);
    Ok(())
}
