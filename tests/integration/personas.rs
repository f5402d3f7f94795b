//! User persona endpoint tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{bearer, constants, empty_test_app, random_test_app, test_app};

#[tokio::test]
async fn test_get_personas_data_branch() {
    let app = test_app();

    let response = app.server.get("/api/get_userpersonas").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "User personas retrieved successfully");

    let personas = json["personas"].as_array().unwrap();
    assert_eq!(personas.len(), 4);
    assert_eq!(personas[0]["id"], "persona-1");
    assert_eq!(personas[0]["name"], "System Administrator");
    for persona in personas {
        for field in ["id", "name", "description", "goals", "painPoints", "keyFeatures"] {
            assert!(persona.get(field).is_some(), "persona missing {field}");
        }
    }
}

#[tokio::test]
async fn test_get_personas_empty_branch() {
    let app = empty_test_app();

    let response = app.server.get("/api/get_userpersonas").await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(
        json,
        json!({"success": true, "personas": [], "message": "No user personas found"})
    );
}

#[tokio::test]
async fn test_get_personas_reaches_both_branches() {
    let app = random_test_app();
    let mut seen_full = false;
    let mut seen_empty = false;

    for _ in 0..100 {
        let json: Value = app.server.get("/api/get_userpersonas").await.json();
        match json["personas"].as_array().map(Vec::len) {
            Some(4) => seen_full = true,
            Some(0) => seen_empty = true,
            other => panic!("unexpected persona count {other:?}"),
        }
        if seen_full && seen_empty {
            break;
        }
    }

    assert!(seen_full && seen_empty);
}

#[tokio::test]
async fn test_get_personas_logs_scope() {
    let app = test_app();
    let (name, value) = bearer();

    app.server
        .get("/api/get_userpersonas")
        .add_header(name, value)
        .add_query_param("user_id", constants::TEST_USER_ID)
        .add_query_param("project_id", constants::TEST_PROJECT_ID)
        .await
        .assert_status_ok();

    let logs = app.observer.logs();
    assert_eq!(logs[0].endpoint, "get_userpersonas");
    assert_eq!(logs[0].user_id.as_deref(), Some(constants::TEST_USER_ID));
    assert_eq!(logs[0].project_id.as_deref(), Some(constants::TEST_PROJECT_ID));
    assert_eq!(logs[0].token_prefix.as_deref(), Some(constants::TEST_TOKEN_PREFIX));
}

#[tokio::test]
async fn test_upload_personas_echoes_selection() {
    let app = test_app();
    let selected = json!([
        {"id": "persona-2", "name": "Business Analyst"},
        {"id": "persona-4", "name": "Developer/Technical User"}
    ]);

    let response = app
        .server
        .post("/api/upload_userpersonas")
        .json(&json!({
            "selected_personas": selected,
            "user_id": constants::TEST_USER_ID,
            "project_id": null
        }))
        .await;

    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Successfully saved 2 user persona(s)");

    let data = &json["data"];
    assert_eq!(data["personas_saved"], selected);
    assert_eq!(data["count"], 2);
    assert_eq!(data["user_id"], constants::TEST_USER_ID);
    assert!(data["project_id"].is_null());
    assert_eq!(data["next_step"], "brand_design");
    assert!(data["saved_at"].is_string());

    let logs = app.observer.logs();
    assert_eq!(
        logs[0].get("personas"),
        Some("Business Analyst, Developer/Technical User")
    );
}

#[tokio::test]
async fn test_upload_personas_empty_list_is_bad_request() {
    let app = test_app();

    let response = app
        .server
        .post("/api/upload_userpersonas")
        .json(&json!({"selected_personas": []}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert_eq!(json["detail"], "At least one persona must be selected");
}

#[tokio::test]
async fn test_upload_personas_requires_list() {
    let app = test_app();

    let response = app
        .server
        .post("/api/upload_userpersonas")
        .json(&json!({"selected_personas": "persona-1"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
