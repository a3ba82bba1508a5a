use crate::error::StoreError;
use crate::models::Question;
use crate::quiz::QuestionPicker;
use crate::store::Store;

pub struct AppState {
    pub store: Store,
    pub picker: QuestionPicker,
}

impl AppState {
    pub fn new(store: Store, picker: QuestionPicker) -> Self {
        AppState { store, picker }
    }

    /// Draws one of `eligible` and loads it. A drawn id whose row is gone
    /// (deleted after the eligible set was read) is dropped and the draw
    /// repeats over what is left.
    pub async fn draw_question(&self, mut eligible: Vec<i32>) -> Result<Option<Question>, StoreError> {
        while let Some(id) = self.picker.pick(&eligible) {
            if let Some(question) = self.store.get_question(id).await? {
                return Ok(Some(question));
            }
            log::warn!("Question {} vanished before it could be served, drawing again", id);
            eligible.retain(|&other| other != id);
        }
        Ok(None)
    }
}
