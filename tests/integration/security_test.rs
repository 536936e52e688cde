mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use common::{spawn_app, spawn_app_with};
use petclinic_api::auth::{JwtService, Role};
use petclinic_api::constants::api::{OPENAPI_PATH, REQUEST_ID_HEADER};

#[tokio::test]
async fn test_missing_token_is_unauthorized() -> Result<()> {
    let app = spawn_app();

    let response = app
        .send_with_token(Method::GET, "/api/pets/1", None, None)
        .await?;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"]["code"], "AUTH_1004");
    Ok(())
}

#[tokio::test]
async fn test_invalid_tokens_are_unauthorized() -> Result<()> {
    let app = spawn_app();

    let garbage = app
        .send_with_token(Method::GET, "/api/pets/1", None, Some("not-a-jwt"))
        .await?;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);

    let foreign = JwtService::new("some-other-secret-0123456789abcdefgh", 3600)
        .generate_token("mallory", &[Role::OwnerAdmin])?;
    let forged = app
        .send_with_token(Method::GET, "/api/pets/1", None, Some(&foreign))
        .await?;
    assert_eq!(forged.status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn test_wrong_role_is_forbidden() -> Result<()> {
    let app = spawn_app();

    for role in [Role::VetAdmin, Role::Admin] {
        let token = app.token(&[role]);
        let response = app
            .send_with_token(Method::GET, "/api/pets/1", None, Some(&token))
            .await?;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "role {}", role);
    }
    Ok(())
}

#[tokio::test]
async fn test_forbidden_precedes_body_validation() -> Result<()> {
    let app = spawn_app();
    let before = app.pet_count().await;
    let token = app.token(&[Role::VetAdmin]);

    let body = json!({"name": "Luna", "birthDate": "2022-08-20", "type": {"id": 2, "name": "dog"}, "weight": -1.0});
    let response = app
        .send_with_token(Method::POST, "/api/owners/1/pets", Some(body), Some(&token))
        .await?;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(app.pet_count().await, before);
    Ok(())
}

#[tokio::test]
async fn test_pet_types_readable_by_both_admin_roles() -> Result<()> {
    let app = spawn_app();

    for role in [Role::OwnerAdmin, Role::VetAdmin] {
        let token = app.token(&[role]);
        let response = app
            .send_with_token(Method::GET, "/api/pettypes", None, Some(&token))
            .await?;
        assert_eq!(response.status, StatusCode::OK, "role {}", role);
    }
    Ok(())
}

#[tokio::test]
async fn test_security_disabled_admits_anonymous_requests() -> Result<()> {
    let app = spawn_app_with(false);

    let response = app
        .send_with_token(Method::GET, "/api/pets/1", None, None)
        .await?;

    assert_eq!(response.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_public_routes() -> Result<()> {
    let app = spawn_app();

    let health = app
        .send_with_token(Method::GET, "/health", None, None)
        .await?;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body["status"], "healthy");

    let docs = app
        .send_with_token(Method::GET, OPENAPI_PATH, None, None)
        .await?;
    assert_eq!(docs.status, StatusCode::OK);
    assert!(docs.body["paths"]["/api/pets/{petId}"].is_object());
    Ok(())
}

#[tokio::test]
async fn test_every_response_carries_request_id() -> Result<()> {
    let app = spawn_app();

    let response = app
        .send_with_token(Method::GET, "/api/pets/1", None, None)
        .await?;

    let header = response
        .headers
        .get(REQUEST_ID_HEADER)
        .unwrap()
        .to_str()?
        .to_string();
    assert!(Uuid::parse_str(&header).is_ok());
    assert_eq!(response.body["requestId"], header);
    Ok(())
}
