mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_provider() {
    let app = TestApp::spawn().await;
    let token = app.access_token("a@x.com").await;

    let response = app
        .post_authenticated("/v1/auth/provider", &token)
        .json(&json!({ "name": "Frutas Tropicais", "country_code": "BRA" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Frutas Tropicais");
    assert_eq!(body["data"]["country_code"], "BRA");
    assert!(body["data"]["id"].is_string());
    assert!(body["data"]["createdAt"].is_string());
}

#[tokio::test]
async fn test_create_provider_short_name() {
    let app = TestApp::spawn().await;
    let token = app.access_token("a@x.com").await;

    let response = app
        .post_authenticated("/v1/auth/provider", &token)
        .json(&json!({ "name": "Ana", "country_code": "BRA" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"][0]["message"], "Nome muito curto.");
    assert_eq!(body["error"][0]["path"][0], "name");
}

#[tokio::test]
async fn test_create_provider_rejected_country_code() {
    let app = TestApp::spawn_with_countries(false).await;
    let token = app.access_token("a@x.com").await;

    let response = app
        .post_authenticated("/v1/auth/provider", &token)
        .json(&json!({ "name": "Frutas Tropicais", "country_code": "ZZZ" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["error"],
        json!([{ "message": "Código invalido", "path": ["country_code"] }])
    );
}

#[tokio::test]
async fn test_list_providers_with_filters() {
    let app = TestApp::spawn().await;
    let token = app.access_token("a@x.com").await;

    for (name, code) in [
        ("Frutas Tropicais", "BRA"),
        ("Frutas do Norte", "BRA"),
        ("Quesos del Sur", "ARG"),
    ] {
        let response = app
            .post_authenticated("/v1/auth/provider", &token)
            .json(&json!({ "name": name, "country_code": code }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .get_authenticated("/v1/auth/provider?name=Frutas&country_code=BRA", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let listed = body["data"].as_array().unwrap();
    assert_eq!(listed.len(), 2);
    for entry in listed {
        assert_eq!(entry["country_code"], "BRA");
        assert!(entry["name"].as_str().unwrap().contains("Frutas"));
    }
}

#[tokio::test]
async fn test_list_providers_field_selection() {
    let app = TestApp::spawn().await;
    let token = app.access_token("a@x.com").await;

    app.post_authenticated("/v1/auth/provider", &token)
        .json(&json!({ "name": "Frutas Tropicais", "country_code": "BRA" }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .get_authenticated("/v1/auth/provider?fields=name,country_code", &token)
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["data"][0],
        json!({ "name": "Frutas Tropicais", "country_code": "BRA" })
    );
}

#[tokio::test]
async fn test_get_provider_by_id() {
    let app = TestApp::spawn().await;
    let token = app.access_token("a@x.com").await;

    let created: serde_json::Value = app
        .post_authenticated("/v1/auth/provider", &token)
        .json(&json!({ "name": "Frutas Tropicais", "country_code": "BRA" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["data"]["id"].as_str().unwrap();

    let response = app
        .get_authenticated(&format!("/v1/auth/provider/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], id);
    assert_eq!(body["data"]["name"], "Frutas Tropicais");
}

#[tokio::test]
async fn test_get_provider_not_found() {
    let app = TestApp::spawn().await;
    let token = app.access_token("a@x.com").await;

    let response = app
        .get_authenticated(
            &format!("/v1/auth/provider/{}", uuid::Uuid::new_v4()),
            &token,
        )
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Registro não encontrado.");
}

#[tokio::test]
async fn test_update_provider() {
    let app = TestApp::spawn().await;
    let token = app.access_token("a@x.com").await;

    let created: serde_json::Value = app
        .post_authenticated("/v1/auth/provider", &token)
        .json(&json!({ "name": "Frutas Tropicais", "country_code": "BRA" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["data"]["id"].as_str().unwrap();

    let response = app
        .patch_authenticated(&format!("/v1/auth/provider/{}", id), &token)
        .json(&json!({ "name": "Frutas do Norte" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Frutas do Norte");
    assert_eq!(body["data"]["country_code"], "BRA");
}

#[tokio::test]
async fn test_delete_provider() {
    let app = TestApp::spawn().await;
    let token = app.access_token("a@x.com").await;

    let created: serde_json::Value = app
        .post_authenticated("/v1/auth/provider", &token)
        .json(&json!({ "name": "Frutas Tropicais", "country_code": "BRA" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");
    let id = created["data"]["id"].as_str().unwrap();

    let delete_response = app
        .delete_authenticated(&format!("/v1/auth/provider/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(delete_response.status(), StatusCode::OK);

    let get_response = app
        .get_authenticated(&format!("/v1/auth/provider/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get_response.status(), StatusCode::NOT_FOUND);
}
