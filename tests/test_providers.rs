mod common;

use common::spawn_app;
use kondate::config::VideoConfig;
use kondate::providers::OpenAIProvider;
use kondate::video::YouTubeSearch;
use kondate::AppState;
use mockito::{Matcher, Server};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;

async fn post(address: &str, path: &str, body: Value) -> (StatusCode, Value) {
    let response = Client::new()
        .post(format!("{address}{path}"))
        .json(&body)
        .send()
        .await
        .expect("request failed");
    let status = response.status();
    (status, response.json().await.expect("body is not JSON"))
}

fn chat_reply(content: &str) -> String {
    json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
    .to_string()
}

fn app_state(llm_url: String, video_url: String) -> AppState {
    AppState {
        llm: Some(Arc::new(OpenAIProvider::with_base_url(
            "test-key".to_string(),
            llm_url,
            "gpt-4".to_string(),
        ))),
        video_search: Some(Arc::new(YouTubeSearch::with_base_url(
            "yt-key".to_string(),
            video_url,
        ))),
        video_config: Arc::new(VideoConfig::default()),
    }
}

#[tokio::test]
async fn test_generate_tops_up_short_reply() {
    let mut llm = Server::new_async().await;
    let content = json!({
        "recipes": [
            {"name": "にんじんしりしり", "ingredients": ["にんじん 1本", "卵 1個"], "instructions": ["細切りにする", "炒める"], "calories": 180},
            {"name": "名前だけ"}
        ]
    })
    .to_string();
    let mock = llm
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4",
            "response_format": {"type": "json_object"}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_reply(&content))
        .create_async()
        .await;
    let video = Server::new_async().await;

    let address = spawn_app(app_state(llm.url(), video.url())).await;
    let (status, body) = post(
        &address,
        "/api/generate-recipe",
        json!({"ingredients": ["にんじん", "卵"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 4);
    assert_eq!(recipes[0]["name"], "にんじんしりしり");
    assert_eq!(recipes[0]["calories"], 180);
    assert!(recipes.iter().all(|r| r["name"] != "名前だけ"));
    assert!(body["message"].is_string());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_detail_survives_provider_failure() {
    let mut llm = Server::new_async().await;
    let _mock = llm
        .mock("POST", "/v1/chat/completions")
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;
    let video = Server::new_async().await;

    let address = spawn_app(app_state(llm.url(), video.url())).await;
    let (status, body) = post(
        &address,
        "/api/generate-recipe/detail",
        json!({"recipeName": "鮭のムニエル", "ingredients": ["サーモン", "バター"]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "鮭のムニエル");
    assert!(!body["detailedInstructions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_detail_name_overrides_reply() {
    let mut llm = Server::new_async().await;
    let content = json!({
        "name": "サーモンのバター焼き",
        "detailedInstructions": ["塩をふる", "小麦粉をまぶす", "バターで焼く"],
        "tips": ["皮目から焼く"]
    })
    .to_string();
    let _mock = llm
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(chat_reply(&content))
        .create_async()
        .await;
    let video = Server::new_async().await;

    let address = spawn_app(app_state(llm.url(), video.url())).await;
    let (_, body) = post(
        &address,
        "/api/generate-recipe/detail",
        json!({"recipeName": "鮭のムニエル", "ingredients": ["サーモン"]}),
    )
    .await;

    assert_eq!(body["name"], "鮭のムニエル");
    assert_eq!(body["detailedInstructions"].as_array().unwrap().len(), 3);
    assert_eq!(body["tips"], json!(["皮目から焼く"]));
}

#[tokio::test]
async fn test_search_youtube_uses_provider() {
    let llm = Server::new_async().await;
    let mut video = Server::new_async().await;
    let mock = video
        .mock("GET", "/youtube/v3/search")
        .match_query(Matcher::UrlEncoded(
            "q".into(),
            "親子丼 レシピ 作り方".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "items": [{
                    "id": {"videoId": "xyz789"},
                    "snippet": {
                        "title": "ふわとろ親子丼",
                        "channelTitle": "家庭料理",
                        "publishedAt": "2024-05-01T00:00:00Z",
                        "thumbnails": {"medium": {"url": "https://i.ytimg.com/vi/xyz789/mqdefault.jpg"}}
                    }
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let address = spawn_app(app_state(llm.url(), video.url())).await;
    let (status, body) = post(&address, "/api/search-youtube", json!({"recipeName": "親子丼"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["videos"][0]["id"], "xyz789");
    assert_eq!(body["videos"][0]["channelTitle"], "家庭料理");
    assert!(body.get("message").is_none());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_youtube_error_serves_demo_videos() {
    let llm = Server::new_async().await;
    let mut video = Server::new_async().await;
    let _mock = video
        .mock("GET", "/youtube/v3/search")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body(r#"{"error": {"code": 403}}"#)
        .create_async()
        .await;

    let address = spawn_app(app_state(llm.url(), video.url())).await;
    let (status, body) = post(
        &address,
        "/api/search-youtube",
        json!({"recipeName": "鶏肉の照り焼き"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["videos"].as_array().unwrap().len(), 3);
    assert!(body["message"].is_string());
}
