//! The `AllPosts` benchmark scenario.

use crate::checks;
use anyhow::Result;
use balter::prelude::*;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::sync::OnceLock;

/// wunderbase instance under test.
pub const TARGET_URL: &str = "http://localhost:4466";

/// Body sent on every iteration, byte-identical across calls.
///
/// `verify body` only passes once a post titled "myPost" exists in the target
/// store; the mutation below seeds one, and stays disabled as in the original
/// benchmark.
pub const QUERY_PAYLOAD: &str = r#"{"query":"query AllPosts {findManyPost(take: 2500){id title createdAt}}","operationName":"CreatePost"}"#;
//pub const QUERY_PAYLOAD: &str = r#"{"query":"mutation CreatePost {createOnePost(data: {title: \"myPost\" author: {connect: {email: \"jens@wundergraph.com\"}}}){id title}}","operationName":"CreatePost"}"#;

static CLIENT: OnceLock<Client> = OnceLock::new();

#[scenario]
pub async fn all_posts() {
    let _ = query_all_posts().await;
}

#[transaction]
pub async fn query_all_posts() -> Result<()> {
    let client = CLIENT.get_or_init(Client::new);
    let res = client
        .post(TARGET_URL)
        .header(CONTENT_TYPE, "application/json")
        .body(QUERY_PAYLOAD)
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    checks::check("is status 200", status == StatusCode::OK);
    checks::check("verify body", body.contains("myPost"));

    Ok(())
}
