use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::{header, Method};
use actix_web::{middleware, web, App, HttpServer, Route};
use std::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::error::ApiError;
use crate::models::{
    CategoriesResponse, Category, CreateQuestionRequest, ErrorResponse, HealthResponse,
    PlayQuizRequest, Question, QuestionListResponse, QuizCategory, QuizResponse, SearchRequest,
    SuccessResponse,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod quiz;
pub mod seed;
pub mod state;
pub mod store;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health_check,
        handlers::list_categories,
        handlers::list_questions,
        handlers::delete_question,
        handlers::create_question,
        handlers::search_questions,
        handlers::category_questions,
        handlers::play_quiz,
    ),
    components(
        schemas(
            Question, Category,
            CreateQuestionRequest, SearchRequest, PlayQuizRequest, QuizCategory,
            HealthResponse, CategoriesResponse, QuestionListResponse,
            SuccessResponse, QuizResponse, ErrorResponse
        )
    ),
    tags(
        (name = "System", description = "System endpoints"),
        (name = "Categories", description = "Category listing and browsing"),
        (name = "Questions", description = "Question browsing, search and management"),
        (name = "Quiz", description = "Quiz play")
    )
)]
pub struct ApiDoc;

const ALLOWED_METHODS: [&str; 5] = ["GET", "POST", "PATCH", "DELETE", "OPTIONS"];

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(ALLOWED_METHODS)
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(3600)
}

/// Routes every extractor failure into the JSON error envelope.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| ApiError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::PathConfig::default()
            .error_handler(|err, _req| ApiError::NotFound(err.to_string()).into()),
    );
}

/// Plain `OPTIONS` (no CORS preflight headers) on a known path.
fn options(allow: &'static str) -> Route {
    web::method(Method::OPTIONS).to(move || handlers::options(allow))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(handlers::health_check))
            .route(options("GET, OPTIONS"))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/categories")
            .route(web::get().to(handlers::list_categories))
            .route(options("GET, OPTIONS"))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/categories/{id}/questions")
            .route(web::get().to(handlers::category_questions))
            .route(options("GET, OPTIONS"))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/questions")
            .route(web::get().to(handlers::list_questions))
            .route(web::post().to(handlers::create_question))
            .route(options("GET, POST, OPTIONS"))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/questions/search")
            .route(web::post().to(handlers::search_questions))
            .route(options("POST, OPTIONS"))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/questions/{id}")
            .route(web::delete().to(handlers::delete_question))
            .route(options("DELETE, OPTIONS"))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/quizzes")
            .route(web::post().to(handlers::play_quiz))
            .route(options("POST, OPTIONS"))
            .default_service(web::to(handlers::method_not_allowed)),
    );
}

pub fn run(listener: TcpListener, state: AppState) -> Result<Server, std::io::Error> {
    let data = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(configure_extractors)
            .wrap(cors())
            .wrap(
                middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "Content-Type, Authorization"))
                    .add(("Access-Control-Allow-Methods", ALLOWED_METHODS.join(", "))),
            )
            .wrap(middleware::Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .configure(configure_routes)
            .default_service(web::to(handlers::not_found))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
