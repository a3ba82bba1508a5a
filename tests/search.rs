use crate::common::{spawn_app, TOTAL_QUESTIONS};

mod common;

#[tokio::test]
async fn search_within_a_category_echoes_inputs() {
    let app = spawn_app().await;
    let body = serde_json::json!({ "searchTerm": "w", "currentCategory": "1" });

    let (status, json) = app.post_json("/questions/search", &body).await;

    assert_eq!(200, status);
    assert_eq!(json["current_category"], "1");
    assert_eq!(json["search_term"], "w");
    assert_eq!(json["total_questions"], 6);
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 6);
    assert!(questions.iter().all(|q| q["category"] == "1"));
}

#[tokio::test]
async fn null_category_searches_everything_capped_at_one_page() {
    let app = spawn_app().await;
    let body = serde_json::json!({ "searchTerm": "", "currentCategory": null });

    let (status, json) = app.post_json("/questions/search", &body).await;

    assert_eq!(200, status);
    assert!(json["current_category"].is_null());
    assert_eq!(json["total_questions"], TOTAL_QUESTIONS);
    let ids: Vec<i64> = json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn zero_or_empty_category_searches_everything() {
    let app = spawn_app().await;

    for category in [serde_json::json!(0), serde_json::json!(""), serde_json::json!("0")] {
        let body = serde_json::json!({ "searchTerm": "", "currentCategory": category });

        let (status, json) = app.post_json("/questions/search", &body).await;

        assert_eq!(200, status);
        assert!(json["current_category"].is_null());
        assert_eq!(json["total_questions"], TOTAL_QUESTIONS);
    }
}

#[tokio::test]
async fn numeric_category_is_echoed_as_text() {
    let app = spawn_app().await;
    let body = serde_json::json!({ "searchTerm": "landmark", "currentCategory": 3 });

    let (status, json) = app.post_json("/questions/search", &body).await;

    assert_eq!(200, status);
    assert_eq!(json["current_category"], "3");
    assert_eq!(json["total_questions"], 4);
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let app = spawn_app().await;
    let body = serde_json::json!({ "searchTerm": "PAINTER", "currentCategory": null });

    let (status, json) = app.post_json("/questions/search", &body).await;

    assert_eq!(200, status);
    assert_eq!(json["total_questions"], 4);
}

#[tokio::test]
async fn search_without_matches_is_empty_not_an_error() {
    let app = spawn_app().await;
    let body = serde_json::json!({ "searchTerm": "zzzzunlikely", "currentCategory": null });

    let (status, json) = app.post_json("/questions/search", &body).await;

    assert_eq!(200, status);
    assert_eq!(json["total_questions"], 0);
    assert!(json["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_with_missing_keys_is_bad_request() {
    let app = spawn_app().await;

    for body in [
        serde_json::json!({ "search_term": "what" }),
        serde_json::json!({ "searchTerm": "what" }),
        serde_json::json!({ "currentCategory": "1" }),
    ] {
        let (status, json) = app.post_json("/questions/search", &body).await;
        assert_eq!(400, status);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 400);
    }
}
