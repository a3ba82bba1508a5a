//! Relational store behind the handlers.
//!
//! Production runs against PostgreSQL; without a `DATABASE_URL` the service
//! (and the test suite) use the in-memory tables instead. Both backends share
//! the filtering and ordering rules defined here.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use crate::error::StoreError;
use crate::models::{Category, NewQuestion, Question};
use crate::pagination::Window;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    pub search_term: String,
    pub category: Option<String>,
}

impl QuestionFilter {
    pub fn new(search_term: impl Into<String>, category: Option<String>) -> Self {
        QuestionFilter {
            search_term: search_term.into(),
            category,
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        let term = self.search_term.to_lowercase();
        let text_matches = question.question.to_lowercase().contains(&term);
        let category_matches = self
            .category
            .as_deref()
            .map_or(true, |c| question.category == c);
        text_matches && category_matches
    }

    /// `ILIKE` pattern matching the term literally as a substring.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.search_term.len() + 2);
        pattern.push('%');
        for ch in self.search_term.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Matches before the window was applied.
    pub total: i64,
}

pub enum Store {
    Postgres(PgStore),
    Memory(MemoryStore),
}

impl Store {
    pub async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        match self {
            Store::Postgres(s) => s.categories().await,
            Store::Memory(s) => s.categories(),
        }
    }

    pub async fn find_questions(
        &self,
        filter: &QuestionFilter,
        window: Window,
    ) -> Result<QuestionPage, StoreError> {
        match self {
            Store::Postgres(s) => s.find_questions(filter, window).await,
            Store::Memory(s) => s.find_questions(filter, window),
        }
    }

    pub async fn get_question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        match self {
            Store::Postgres(s) => s.get_question(id).await,
            Store::Memory(s) => s.get_question(id),
        }
    }

    pub async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        match self {
            Store::Postgres(s) => s.insert_question(new).await,
            Store::Memory(s) => s.insert_question(new),
        }
    }

    pub async fn delete_question(&self, id: i32) -> Result<bool, StoreError> {
        match self {
            Store::Postgres(s) => s.delete_question(id).await,
            Store::Memory(s) => s.delete_question(id),
        }
    }

    pub async fn eligible_question_ids(
        &self,
        previous: &[i32],
        category: Option<&str>,
    ) -> Result<Vec<i32>, StoreError> {
        match self {
            Store::Postgres(s) => s.eligible_question_ids(previous, category).await,
            Store::Memory(s) => s.eligible_question_ids(previous, category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, category: &str) -> Question {
        Question {
            id: 1,
            question: text.into(),
            answer: "a".into(),
            category: category.into(),
            difficulty: 1,
        }
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let filter = QuestionFilter::new("TITLE", None);
        assert!(filter.matches(&question("Whose autobiography is entitled 'I Know'?", "4")));
        assert!(!filter.matches(&question("What boxer's original name is Cassius Clay?", "4")));
    }

    #[test]
    fn filter_restricts_category() {
        let filter = QuestionFilter::new("", Some("1".into()));
        assert!(filter.matches(&question("anything", "1")));
        assert!(!filter.matches(&question("anything", "2")));
    }

    #[test]
    fn like_pattern_escapes_metacharacters() {
        let filter = QuestionFilter::new("100%_sure", None);
        assert_eq!(filter.like_pattern(), "%100\\%\\_sure%");
        assert_eq!(QuestionFilter::default().like_pattern(), "%%");
    }
}
