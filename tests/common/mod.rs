use std::net::TcpListener;
use trivia_api::models::NewQuestion;
use trivia_api::quiz::QuestionPicker;
use trivia_api::run;
use trivia_api::seed::{SeedCategory, SeedData};
use trivia_api::state::AppState;
use trivia_api::store::{MemoryStore, Store};

#[allow(dead_code)]
pub const QUIZ_SEED: u64 = 2024;

#[allow(dead_code)]
/// 6 categories; questions 1-6 are Science ("1"), 7-10 Art ("2"), 11-14 Geography ("3").
pub const TOTAL_QUESTIONS: usize = 14;

#[allow(dead_code)]
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

#[allow(dead_code)]
impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn get_json(&self, path: &str) -> (u16, serde_json::Value) {
        let response = self
            .api_client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.");
        let status = response.status().as_u16();
        let json = response.json().await.expect("Failed to parse JSON");
        (status, json)
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> (u16, serde_json::Value) {
        let response = self
            .api_client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.");
        let status = response.status().as_u16();
        let json = response.json().await.expect("Failed to parse JSON");
        (status, json)
    }

    pub async fn delete_json(&self, path: &str) -> (u16, serde_json::Value) {
        let response = self
            .api_client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.");
        let status = response.status().as_u16();
        let json = response.json().await.expect("Failed to parse JSON");
        (status, json)
    }
}

#[allow(dead_code)]
pub fn fixture() -> SeedData {
    let categories = ["Science", "Art", "Geography", "History", "Entertainment", "Sports"]
        .iter()
        .zip(1..)
        .map(|(kind, id)| SeedCategory { id, kind: kind.to_string() })
        .collect();

    let mut questions = Vec::new();
    for n in 1..=6 {
        questions.push(new_question(format!("What is science fact number {}?", n), "1"));
    }
    for n in 1..=4 {
        questions.push(new_question(format!("Which painter made artwork {}?", n), "2"));
    }
    for n in 1..=4 {
        questions.push(new_question(format!("Where is landmark {}?", n), "3"));
    }

    SeedData { categories, questions }
}

fn new_question(question: String, category: &str) -> NewQuestion {
    NewQuestion {
        question,
        answer: "answer".to_string(),
        category: category.to_string(),
        difficulty: 2,
    }
}

#[allow(dead_code)]
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Store::Memory(MemoryStore::from_seed(fixture()))).await
}

#[allow(dead_code)]
pub async fn spawn_app_with(store: Store) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let state = AppState::new(store, QuestionPicker::seeded(QUIZ_SEED));
    let server = run(listener, state).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        api_client: reqwest::Client::new(),
    }
}
