use crate::common::{fixture, spawn_app, spawn_app_with};
use trivia_api::seed::SeedData;
use trivia_api::store::{MemoryStore, Store};

mod common;

#[tokio::test]
async fn list_categories_maps_every_id_to_its_type() {
    let app = spawn_app().await;

    let (status, json) = app.get_json("/categories").await;

    assert_eq!(200, status);
    let categories = json["categories"].as_object().expect("categories object");
    let mut ids: Vec<&str> = categories.keys().map(String::as_str).collect();
    ids.sort();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(categories["1"], "Science");
    assert_eq!(categories["6"], "Sports");
}

#[tokio::test]
async fn empty_category_table_is_a_server_error() {
    let seed = SeedData {
        categories: vec![],
        questions: fixture().questions,
    };
    let app = spawn_app_with(Store::Memory(MemoryStore::from_seed(seed))).await;

    let (status, json) = app.get_json("/categories").await;

    assert_eq!(500, status);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 500);
}

#[tokio::test]
async fn category_questions_echo_the_category() {
    let app = spawn_app().await;

    let (status, json) = app.get_json("/categories/1/questions").await;

    assert_eq!(200, status);
    assert_eq!(json["current_category"], "1");
    assert_eq!(json["total_questions"], 6);
    assert_eq!(json["search_term"], "");
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 6);
    assert!(questions.iter().all(|q| q["category"] == "1"));
    assert!(json["categories"].as_object().unwrap().contains_key("1"));
}

#[tokio::test]
async fn category_questions_apply_the_search_term() {
    let app = spawn_app().await;

    let (status, json) = app.get_json("/categories/1/questions?search_term=NUMBER%203").await;

    assert_eq!(200, status);
    assert_eq!(json["total_questions"], 1);
    assert_eq!(json["questions"][0]["id"], 3);
    assert_eq!(json["search_term"], "NUMBER 3");
}

#[tokio::test]
async fn category_questions_without_matches_is_not_found() {
    let app = spawn_app().await;

    let (status, json) = app.get_json("/categories/1/questions?search_term=zzzzunlikely").await;
    assert_eq!(404, status);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);

    let (status, _) = app.get_json("/categories/23/questions").await;
    assert_eq!(404, status);
}
