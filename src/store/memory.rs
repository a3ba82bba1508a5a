use std::sync::RwLock;

use super::{QuestionFilter, QuestionPage};
use crate::error::StoreError;
use crate::models::{Category, NewQuestion, Question};
use crate::pagination::Window;
use crate::seed::SeedData;

struct Tables {
    categories: Vec<Category>,
    // Kept sorted by id; ids only ever grow.
    questions: Vec<Question>,
    next_id: i32,
}

pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new(mut categories: Vec<Category>, questions: Vec<NewQuestion>) -> Self {
        categories.sort_by_key(|c| c.id);
        let questions: Vec<Question> = questions
            .into_iter()
            .zip(1..)
            .map(|(q, id)| Question {
                id,
                question: q.question,
                answer: q.answer,
                category: q.category,
                difficulty: q.difficulty,
            })
            .collect();
        let next_id = questions.len() as i32 + 1;

        MemoryStore {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_id,
            }),
        }
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let categories = seed
            .categories
            .into_iter()
            .map(|c| Category { id: c.id, kind: c.kind })
            .collect();
        Self::new(categories, seed.questions)
    }

    pub fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.categories.clone())
    }

    pub fn find_questions(
        &self,
        filter: &QuestionFilter,
        window: Window,
    ) -> Result<QuestionPage, StoreError> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        let matching: Vec<&Question> = tables.questions.iter().filter(|q| filter.matches(q)).collect();
        let total = matching.len() as i64;
        let questions = matching
            .into_iter()
            .skip(window.offset)
            .take(window.limit)
            .cloned()
            .collect();
        Ok(QuestionPage { questions, total })
    }

    pub fn get_question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    pub fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        let question = Question {
            id: tables.next_id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        tables.next_id += 1;
        tables.questions.push(question.clone());
        Ok(question)
    }

    pub fn delete_question(&self, id: i32) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().map_err(|_| StoreError::Poisoned)?;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() != before)
    }

    pub fn eligible_question_ids(
        &self,
        previous: &[i32],
        category: Option<&str>,
    ) -> Result<Vec<i32>, StoreError> {
        let tables = self.tables.read().map_err(|_| StoreError::Poisoned)?;
        Ok(tables
            .questions
            .iter()
            .filter(|q| !previous.contains(&q.id))
            .filter(|q| category.map_or(true, |c| q.category == c))
            .map(|q| q.id)
            .collect())
    }
}
