use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow, ToSchema)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub kind: String,
}

/// Validated insert payload. Shared by the create endpoint and the seed loader.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

/// A category id as clients send it: `1` and `"1"` are both accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Number(i64),
    Text(String),
}

impl CategoryRef {
    pub fn as_text(&self) -> String {
        match self {
            CategoryRef::Number(n) => n.to_string(),
            CategoryRef::Text(s) => s.trim().to_string(),
        }
    }

    /// `0`, `"0"` and `""` select every category.
    pub fn into_filter(self) -> Option<String> {
        let raw = self.as_text();
        if raw.is_empty() || raw == "0" {
            None
        } else {
            Some(raw)
        }
    }
}

pub fn category_filter(raw: Option<CategoryRef>) -> Option<String> {
    raw.and_then(CategoryRef::into_filter)
}

// Missing key is an error, explicit `null` is `None`.
fn required_nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    #[schema(value_type = String)]
    pub category: CategoryRef,
    pub difficulty: i32,
}

impl CreateQuestionRequest {
    pub fn validate(self) -> Result<NewQuestion, ApiError> {
        let question = non_empty(self.question)
            .ok_or_else(|| ApiError::Unprocessable("question text must not be empty".into()))?;
        let answer = non_empty(self.answer)
            .ok_or_else(|| ApiError::Unprocessable("answer text must not be empty".into()))?;

        Ok(NewQuestion {
            question,
            answer,
            category: self.category.as_text(),
            difficulty: self.difficulty,
        })
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    #[serde(rename = "currentCategory", deserialize_with = "required_nullable")]
    #[schema(value_type = Option<String>)]
    pub current_category: Option<CategoryRef>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    #[schema(value_type = String)]
    pub id: CategoryRef,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PlayQuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuestionsParams {
    /// Case-insensitive substring of the question text.
    pub search_term: Option<String>,
    /// Category id; empty means every category.
    pub current_category: Option<String>,
    /// 1-based page number, 10 questions per page.
    pub page: Option<u32>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchTermParams {
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub health: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<i32, String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: BTreeMap<i32, String>,
    pub current_category: Option<String>,
    pub search_term: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizResponse {
    pub question: Option<Question>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

pub fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
