mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

use common::spawn_app;

#[tokio::test]
async fn test_get_owner_lists_pets_by_name() -> Result<()> {
    let app = spawn_app();

    let response = app.send(Method::GET, "/api/owners/1", None).await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["firstName"], "George");
    let names: Vec<&str> = response.body["pets"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|pet| pet["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Buddy", "Whiskers"]);
    Ok(())
}

#[tokio::test]
async fn test_unknown_owner_is_not_found() -> Result<()> {
    let app = spawn_app();
    let before = app.pet_count().await;

    let get = app.send(Method::GET, "/api/owners/42", None).await?;
    assert_eq!(get.status, StatusCode::NOT_FOUND);
    assert_eq!(get.body["error"]["code"], "RES_4001");

    let body = json!({"name": "Luna", "birthDate": "2022-08-20", "type": {"id": 2, "name": "dog"}});
    let post = app
        .send(Method::POST, "/api/owners/42/pets", Some(body))
        .await?;
    assert_eq!(post.status, StatusCode::NOT_FOUND);
    assert_eq!(app.pet_count().await, before);
    Ok(())
}

#[tokio::test]
async fn test_pet_of_another_owner_is_not_found() -> Result<()> {
    let app = spawn_app();

    let get = app.send(Method::GET, "/api/owners/2/pets/1", None).await?;
    assert_eq!(get.status, StatusCode::NOT_FOUND);

    let body = json!({"name": "Stolen", "birthDate": "2020-01-01", "type": {"id": 2, "name": "dog"}});
    let put = app
        .send(Method::PUT, "/api/owners/2/pets/1", Some(body))
        .await?;
    assert_eq!(put.status, StatusCode::NOT_FOUND);

    let unchanged = app.send(Method::GET, "/api/pets/1", None).await?;
    assert_eq!(unchanged.body["name"], "Buddy");
    Ok(())
}

#[tokio::test]
async fn test_unknown_pet_type_is_bad_request() -> Result<()> {
    let app = spawn_app();

    let body = json!({"name": "Nemo", "birthDate": "2021-02-02", "type": {"id": 99, "name": "fish"}});
    let response = app
        .send(Method::POST, "/api/owners/1/pets", Some(body))
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VAL_3010");
    Ok(())
}

#[tokio::test]
async fn test_invalid_name_is_bad_request() -> Result<()> {
    let app = spawn_app();

    let body = json!({"name": "", "birthDate": "2021-02-02", "type": {"id": 1, "name": "cat"}});
    let response = app
        .send(Method::POST, "/api/owners/1/pets", Some(body))
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["violations"][0]["field"], "name");
    Ok(())
}

#[tokio::test]
async fn test_malformed_requests_are_bad_request() -> Result<()> {
    let app = spawn_app();

    let missing_date = json!({"name": "Nemo", "type": {"id": 1, "name": "cat"}});
    let response = app
        .send(Method::POST, "/api/owners/1/pets", Some(missing_date))
        .await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app.send(Method::GET, "/api/pets/abc", None).await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["code"], "VAL_3003");
    Ok(())
}

#[tokio::test]
async fn test_list_and_delete_pets() -> Result<()> {
    let app = spawn_app();

    let list = app.send(Method::GET, "/api/pets", None).await?;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body.as_array().unwrap().len(), 2);

    let deleted = app.send(Method::DELETE, "/api/pets/2", None).await?;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);

    let gone = app.send(Method::GET, "/api/pets/2", None).await?;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);

    let again = app.send(Method::DELETE, "/api/pets/2", None).await?;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn test_list_pet_types() -> Result<()> {
    let app = spawn_app();

    let response = app.send(Method::GET, "/api/pettypes", None).await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!([{"id": 1, "name": "cat"}, {"id": 2, "name": "dog"}])
    );
    Ok(())
}

#[tokio::test]
async fn test_unknown_route_is_structured_not_found() -> Result<()> {
    let app = spawn_app();

    let response = app.send(Method::GET, "/api/visits", None).await?;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"]["codeNumber"], 4001);
    Ok(())
}
