// ABOUTME: Integration tests for the recipe store HTTP client against a running server
// ABOUTME: Saves catalog recipes over the network and reads them back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Smart Recipes Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::create_test_resources;
use serde_json::Value;
use smart_recipes::external::RecipeStoreClient;
use smart_recipes::recipes_core::RecipeData;
use smart_recipes::server::build_router;
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let app = build_router(create_test_resources().await);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

#[tokio::test]
async fn test_save_and_list_over_http() {
    let client = RecipeStoreClient::new(spawn_server().await);
    let data = RecipeData::builtin().unwrap();
    let chili = data.catalog().find("Vegan Chili").unwrap();

    let response = client.save(chili).await.unwrap();
    assert_eq!(response.message, "Recipe saved successfully");
    client.save(chili).await.unwrap();

    let saved = client.list().await.unwrap();
    assert_eq!(saved.len(), 2);
    let expected = serde_json::to_value(chili).unwrap();
    assert!(saved.iter().all(|r| *r == expected));
    assert_eq!(saved[0].get("name").and_then(Value::as_str), Some("Vegan Chili"));
}

#[tokio::test]
async fn test_unreachable_server_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = RecipeStoreClient::new(format!("http://{addr}"))
        .list()
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), 502);
}
