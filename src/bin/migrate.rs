use std::collections::HashSet;

use env_logger::Env;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use trivia_api::config::Settings;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn applied_versions(pool: &PgPool) -> Result<HashSet<i64>, sqlx::Error> {
    let tracked: bool = sqlx::query_scalar("SELECT to_regclass('_sqlx_migrations') IS NOT NULL")
        .fetch_one(pool)
        .await?;
    if !tracked {
        return Ok(HashSet::new());
    }

    let versions: Vec<i64> = sqlx::query_scalar("SELECT version FROM _sqlx_migrations WHERE success")
        .fetch_all(pool)
        .await?;
    Ok(versions.into_iter().collect())
}

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

    let applied = applied_versions(&pool).await?;
    let pending: Vec<_> = MIGRATOR
        .iter()
        .filter(|m| !m.migration_type.is_down_migration() && !applied.contains(&m.version))
        .collect();

    if pending.is_empty() {
        log::info!("Schema is up to date ({} migrations applied)", applied.len());
        return Ok(());
    }
    for migration in &pending {
        log::info!("Applying {} {}", migration.version, migration.description);
    }

    MIGRATOR.run(&pool).await?;
    log::info!("Applied {} pending migrations", pending.len());
    Ok(())
}
