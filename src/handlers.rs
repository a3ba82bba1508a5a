use actix_web::{http::header, web, HttpResponse};

use crate::error::ApiError;
use crate::models::{
    category_filter, category_map, CategoriesResponse, CategoryRef, CreateQuestionRequest,
    ErrorResponse, HealthResponse, ListQuestionsParams, PlayQuizRequest, QuestionListResponse, QuizResponse,
    SearchRequest, SearchTermParams, SuccessResponse,
};
use crate::pagination::{Page, Window};
use crate::state::AppState;
use crate::store::QuestionFilter;

#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses(
        (status = 200, description = "Health marker", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        health: "Running!!".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "Category id to type mapping", body = CategoriesResponse),
        (status = 500, description = "No categories configured", body = ErrorResponse)
    )
)]
pub async fn list_categories(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let categories = data.store.categories().await?;
    if categories.is_empty() {
        log::error!("Category table is empty; the store is not seeded");
        return Err(ApiError::Internal("no categories configured".into()));
    }

    Ok(HttpResponse::Ok().json(CategoriesResponse {
        categories: category_map(categories),
    }))
}

#[utoipa::path(
    get,
    path = "/questions",
    tag = "Questions",
    params(ListQuestionsParams),
    responses(
        (status = 200, description = "One page of questions", body = QuestionListResponse),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 404, description = "Page out of range", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn list_questions(
    data: web::Data<AppState>,
    params: web::Query<ListQuestionsParams>,
) -> Result<HttpResponse, ApiError> {
    let params = params.into_inner();
    let page = Page::new(params.page.unwrap_or(1)).ok_or_else(ApiError::not_found)?;
    let search_term = params.search_term.unwrap_or_default();
    let current_category = category_filter(params.current_category.map(CategoryRef::Text));
    let filter = QuestionFilter::new(search_term.clone(), current_category.clone());

    let found = data.store.find_questions(&filter, page.window()).await?;
    if found.questions.is_empty() {
        log::debug!("Page {} is past the {} matching questions", page.number(), found.total);
        return Err(ApiError::not_found());
    }
    let categories = data.store.categories().await?;

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        questions: found.questions,
        total_questions: found.total,
        categories: category_map(categories),
        current_category,
        search_term,
    }))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "Questions",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = SuccessResponse),
        (status = 404, description = "Question not found", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn delete_question(
    data: web::Data<AppState>,
    path: web::Path<i32>,
) -> Result<HttpResponse, ApiError> {
    let question_id = path.into_inner();

    if !data.store.delete_question(question_id).await? {
        return Err(ApiError::NotFound(format!("question {} not found", question_id)));
    }
    log::info!("Deleted question {}", question_id);

    Ok(HttpResponse::Ok().json(SuccessResponse {
        success: true,
        created: None,
    }))
}

#[utoipa::path(
    post,
    path = "/questions",
    tag = "Questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 201, description = "Question created", body = SuccessResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Empty question or answer", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn create_question(
    data: web::Data<AppState>,
    req: web::Json<CreateQuestionRequest>,
) -> Result<HttpResponse, ApiError> {
    let new = req.into_inner().validate()?;
    let question = data.store.insert_question(new).await?;
    log::info!("Created question {} in category {}", question.id, question.category);

    Ok(HttpResponse::Created().json(SuccessResponse {
        success: true,
        created: Some(question.id),
    }))
}

#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "Questions",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Up to 10 matching questions", body = QuestionListResponse),
        (status = 400, description = "searchTerm or currentCategory missing", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn search_questions(
    data: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let current_category = category_filter(req.current_category);
    let filter = QuestionFilter::new(req.search_term.clone(), current_category.clone());

    let found = data.store.find_questions(&filter, Window::first_page()).await?;
    let categories = data.store.categories().await?;

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        questions: found.questions,
        total_questions: found.total,
        categories: category_map(categories),
        current_category,
        search_term: req.search_term,
    }))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "Categories",
    params(
        ("id" = String, Path, description = "Category ID"),
        SearchTermParams
    ),
    responses(
        (status = 200, description = "Up to 10 questions in the category", body = QuestionListResponse),
        (status = 404, description = "No matching questions", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn category_questions(
    data: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<SearchTermParams>,
) -> Result<HttpResponse, ApiError> {
    let category_id = path.into_inner();
    let search_term = params.into_inner().search_term.unwrap_or_default();
    let filter = QuestionFilter::new(search_term.clone(), Some(category_id.clone()));

    let found = data.store.find_questions(&filter, Window::first_page()).await?;
    if found.total == 0 {
        return Err(ApiError::NotFound(format!(
            "no questions in category {}",
            category_id
        )));
    }
    let categories = data.store.categories().await?;

    Ok(HttpResponse::Ok().json(QuestionListResponse {
        questions: found.questions,
        total_questions: found.total,
        categories: category_map(categories),
        current_category: Some(category_id),
        search_term,
    }))
}

#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "Quiz",
    request_body = PlayQuizRequest,
    responses(
        (status = 200, description = "Next unseen question, or null once exhausted", body = QuizResponse),
        (status = 400, description = "previous_questions or quiz_category.id missing", body = ErrorResponse),
        (status = 500, description = "Internal Server Error", body = ErrorResponse)
    )
)]
pub async fn play_quiz(
    data: web::Data<AppState>,
    req: web::Json<PlayQuizRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = req.into_inner();
    let category = req.quiz_category.id.into_filter();

    let eligible = data
        .store
        .eligible_question_ids(&req.previous_questions, category.as_deref())
        .await?;

    let question = data.draw_question(eligible).await?;
    if question.is_none() {
        log::debug!(
            "Quiz exhausted after {} questions (category {:?})",
            req.previous_questions.len(),
            category
        );
    }

    Ok(HttpResponse::Ok().json(QuizResponse { question }))
}

pub async fn options(allow: &'static str) -> HttpResponse {
    HttpResponse::Ok().insert_header((header::ALLOW, allow)).finish()
}

pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::not_found())
}

pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}
