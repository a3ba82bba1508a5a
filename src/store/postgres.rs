use sqlx::{PgPool, Postgres, QueryBuilder};

use super::{QuestionFilter, QuestionPage};
use crate::error::StoreError;
use crate::models::{Category, NewQuestion, Question};
use crate::pagination::Window;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

fn push_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &QuestionFilter) {
    qb.push(" WHERE question ILIKE ").push_bind(filter.like_pattern());
    if let Some(category) = &filter.category {
        qb.push(" AND category = ").push_bind(category.clone());
    }
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }

    pub async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(categories)
    }

    pub async fn find_questions(
        &self,
        filter: &QuestionFilter,
        window: Window,
    ) -> Result<QuestionPage, StoreError> {
        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM questions");
        push_filter(&mut count, filter);
        let total = count.build_query_scalar::<i64>().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Postgres>::new(format!("SELECT {} FROM questions", QUESTION_COLUMNS));
        push_filter(&mut select, filter);
        select
            .push(" ORDER BY id LIMIT ")
            .push_bind(window.limit as i64)
            .push(" OFFSET ")
            .push_bind(window.offset as i64);
        let questions = select
            .build_query_as::<Question>()
            .fetch_all(&self.pool)
            .await?;

        Ok(QuestionPage { questions, total })
    }

    pub async fn get_question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "SELECT {} FROM questions WHERE id = $1",
            QUESTION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(question)
    }

    pub async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let question = sqlx::query_as::<_, Question>(&format!(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4) RETURNING {}",
            QUESTION_COLUMNS
        ))
        .bind(new.question)
        .bind(new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(&self.pool)
        .await?;
        Ok(question)
    }

    pub async fn delete_question(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn eligible_question_ids(
        &self,
        previous: &[i32],
        category: Option<&str>,
    ) -> Result<Vec<i32>, StoreError> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT id FROM questions WHERE NOT (id = ANY(");
        qb.push_bind(previous.to_vec()).push("))");
        if let Some(category) = category {
            qb.push(" AND category = ").push_bind(category.to_string());
        }
        qb.push(" ORDER BY id");

        let ids = qb.build_query_scalar::<i32>().fetch_all(&self.pool).await?;
        Ok(ids)
    }

    /// Inserts seed categories (keeping their ids) and questions, then
    /// moves the category sequence past the highest seeded id.
    pub async fn load_seed(&self, seed: crate::seed::SeedData) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;

        for category in &seed.categories {
            sqlx::query("INSERT INTO categories (id, type) VALUES ($1, $2) ON CONFLICT (id) DO NOTHING")
                .bind(category.id)
                .bind(&category.kind)
                .execute(&mut *tx)
                .await?;
        }
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('categories', 'id'), COALESCE(MAX(id), 1)) FROM categories",
        )
        .execute(&mut *tx)
        .await?;

        for q in &seed.questions {
            sqlx::query("INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4)")
                .bind(&q.question)
                .bind(&q.answer)
                .bind(&q.category)
                .bind(q.difficulty)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }
}
