//! End-to-end tests driving the HTTP surface over a real socket.

use std::net::SocketAddr;

use serde_json::{json, Value};
use stringlab::server::Server;

async fn start() -> (Server, String) {
    let server = Server::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("start server");
    let base = format!("http://{}", server.addr());
    (server, base)
}

async fn create(client: &reqwest::Client, base: &str, value: &str) -> reqwest::Response {
    client
        .post(format!("{base}/strings"))
        .json(&json!({ "value": value }))
        .send()
        .await
        .expect("post string")
}

#[tokio::test]
async fn health_endpoint() {
    let (_server, base) = start().await;
    let body = reqwest::get(format!("{base}/health"))
        .await
        .expect("get health")
        .text()
        .await
        .expect("health body");
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn create_returns_analyzed_record() {
    let (_server, base) = start().await;
    let client = reqwest::Client::new();

    let response = create(&client, &base, "racecar").await;
    assert_eq!(response.status(), 201);

    let record: Value = response.json().await.expect("record json");
    assert_eq!(record["value"], "racecar");
    assert_eq!(record["id"], record["properties"]["sha256_hash"]);
    assert_eq!(record["properties"]["length"], 7);
    assert_eq!(record["properties"]["is_palindrome"], true);
    assert_eq!(record["properties"]["word_count"], 1);
    assert_eq!(record["properties"]["unique_characters"], 4);
    assert_eq!(record["properties"]["character_frequency_map"]["r"], 2);
}

#[tokio::test]
async fn create_validates_the_body() {
    let (_server, base) = start().await;
    let client = reqwest::Client::new();

    let missing = client
        .post(format!("{base}/strings"))
        .json(&json!({}))
        .send()
        .await
        .expect("post");
    assert_eq!(missing.status(), 400);
    let body: Value = missing.json().await.expect("error json");
    assert_eq!(body["error"], "Missing \"value\" field");

    let wrong_type = client
        .post(format!("{base}/strings"))
        .json(&json!({ "value": 42 }))
        .send()
        .await
        .expect("post");
    assert_eq!(wrong_type.status(), 422);
    let body: Value = wrong_type.json().await.expect("error json");
    assert_eq!(body["error"], "\"value\" must be a string");
}

#[tokio::test]
async fn duplicate_create_conflicts() {
    let (_server, base) = start().await;
    let client = reqwest::Client::new();

    assert_eq!(create(&client, &base, "once").await.status(), 201);
    let second = create(&client, &base, "once").await;
    assert_eq!(second.status(), 409);
    let body: Value = second.json().await.expect("error json");
    assert_eq!(body["error"], "String already exists");
}

#[tokio::test]
async fn fetch_round_trip_and_missing() {
    let (_server, base) = start().await;
    let client = reqwest::Client::new();

    create(&client, &base, "hello").await;

    let found = client
        .get(format!("{base}/strings/hello"))
        .send()
        .await
        .expect("get string");
    assert_eq!(found.status(), 200);
    let record: Value = found.json().await.expect("record json");
    assert_eq!(record["id"], record["properties"]["sha256_hash"]);

    let missing = client
        .get(format!("{base}/strings/absent"))
        .send()
        .await
        .expect("get missing");
    assert_eq!(missing.status(), 404);
    let body: Value = missing.json().await.expect("error json");
    assert_eq!(body["error"], "String not found");
}

#[tokio::test]
async fn list_applies_filters_in_insertion_order() {
    let (_server, base) = start().await;
    let client = reqwest::Client::new();

    for value in ["racecar", "hi", "level", "something longer"] {
        create(&client, &base, value).await;
    }

    let response = client
        .get(format!("{base}/strings?min_length=3&max_length=10"))
        .send()
        .await
        .expect("list");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("list json");

    assert_eq!(body["count"], 2);
    let values: Vec<&str> = body["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|r| r["value"].as_str().expect("value"))
        .collect();
    assert_eq!(values, vec!["racecar", "level"]);
    assert_eq!(
        body["filters_applied"],
        json!({ "min_length": 3, "max_length": 10 })
    );
}

#[tokio::test]
async fn list_rejects_non_numeric_bounds() {
    let (_server, base) = start().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/strings?min_length=abc"))
        .send()
        .await
        .expect("list");
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("error json");
    assert_eq!(body["error"], "Invalid min_length");
}

#[tokio::test]
async fn list_without_filters_returns_everything() {
    let (_server, base) = start().await;
    let client = reqwest::Client::new();

    create(&client, &base, "one").await;
    create(&client, &base, "two").await;

    let body: Value = client
        .get(format!("{base}/strings"))
        .send()
        .await
        .expect("list")
        .json()
        .await
        .expect("list json");
    assert_eq!(body["count"], 2);
    assert_eq!(body["filters_applied"], json!({}));
}

#[tokio::test]
async fn natural_language_filtering() {
    let (_server, base) = start().await;
    let client = reqwest::Client::new();

    for value in ["racecar", "hello world", "abba"] {
        create(&client, &base, value).await;
    }

    let response = client
        .get(format!("{base}/strings/filter-by-natural-language"))
        .query(&[("query", "single word palindromes")])
        .send()
        .await
        .expect("nl query");
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("nl json");

    assert_eq!(body["count"], 2);
    assert_eq!(body["interpreted_query"]["original"], "single word palindromes");
    assert_eq!(
        body["interpreted_query"]["parsed_filters"],
        json!({ "is_palindrome": true, "word_count": 1 })
    );
}

#[tokio::test]
async fn natural_language_rejects_unparseable() {
    let (_server, base) = start().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/strings/filter-by-natural-language"))
        .query(&[("query", "asdf qwerty")])
        .send()
        .await
        .expect("nl query");
    assert_eq!(response.status(), 400);

    let missing = client
        .get(format!("{base}/strings/filter-by-natural-language"))
        .send()
        .await
        .expect("nl query");
    assert_eq!(missing.status(), 400);
    let body: Value = missing.json().await.expect("error json");
    assert_eq!(body["error"], "Missing or invalid \"query\" parameter");
}

#[tokio::test]
async fn delete_then_lookup_fails() {
    let (_server, base) = start().await;
    let client = reqwest::Client::new();

    create(&client, &base, "ephemeral").await;

    let deleted = client
        .delete(format!("{base}/strings/ephemeral"))
        .send()
        .await
        .expect("delete");
    assert_eq!(deleted.status(), 204);
    assert!(deleted.text().await.expect("empty body").is_empty());

    let missing = client
        .get(format!("{base}/strings/ephemeral"))
        .send()
        .await
        .expect("get deleted");
    assert_eq!(missing.status(), 404);

    let again = client
        .delete(format!("{base}/strings/ephemeral"))
        .send()
        .await
        .expect("delete again");
    assert_eq!(again.status(), 404);
}
