use env_logger::Env;
use sqlx::postgres::PgPoolOptions;
use std::net::TcpListener;
use trivia_api::config::Settings;
use trivia_api::quiz::QuestionPicker;
use trivia_api::run;
use trivia_api::seed::load_seed_dir;
use trivia_api::state::AppState;
use trivia_api::store::{MemoryStore, PgStore, Store};

async fn build_store(settings: &Settings) -> std::io::Result<Store> {
    match &settings.database_url {
        Some(url) => {
            log::info!("Connecting to PostgreSQL");
            let pool = PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(url)
                .await
                .map_err(std::io::Error::other)?;
            Ok(Store::Postgres(PgStore::new(pool)))
        }
        None => {
            log::info!("DATABASE_URL not set, using the in-memory store");
            let seed = load_seed_dir(&settings.seed_dir).map_err(std::io::Error::other)?;
            Ok(Store::Memory(MemoryStore::from_seed(seed)))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(std::io::Error::other)?;
    let store = build_store(&settings).await?;
    if settings.quiz_seed.is_some() {
        log::info!("Quiz selection uses a fixed seed");
    }
    let state = AppState::new(store, QuestionPicker::from_seed(settings.quiz_seed));

    let address = settings.address();
    log::info!("Starting server at http://{}", address);
    log::info!("Swagger UI available at http://{}/swagger-ui/", address);

    let listener = TcpListener::bind(&address)?;
    run(listener, state)?.await
}
