mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode, header::LOCATION};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use common::spawn_app;

fn new_pet(weight: Option<Value>) -> Value {
    let mut body = json!({
        "name": "Luna",
        "birthDate": "2022-08-20",
        "type": {"id": 2, "name": "dog"}
    });
    if let Some(weight) = weight {
        body["weight"] = weight;
    }
    body
}

fn full_pet(weight: Value) -> Value {
    json!({
        "id": 1,
        "name": "Buddy",
        "birthDate": "2020-01-01",
        "type": {"id": 2, "name": "dog"},
        "weight": weight
    })
}

#[tokio::test]
async fn test_get_pet_returns_stored_weight() -> Result<()> {
    let app = spawn_app();

    let response = app.send(Method::GET, "/api/pets/1", None).await?;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Buddy");
    assert_eq!(response.body["weight"], json!(15.75));
    assert_eq!(response.body["ownerId"], 1);
    Ok(())
}

#[tokio::test]
async fn test_get_pet_without_weight_omits_key() -> Result<()> {
    let app = spawn_app();

    let response = app.send(Method::GET, "/api/pets/2", None).await?;

    assert_eq!(response.status, StatusCode::OK);
    let pet = response.body.as_object().unwrap();
    assert!(!pet.contains_key("weight"));
    Ok(())
}

#[tokio::test]
async fn test_create_with_negative_weight_is_rejected_without_persisting() -> Result<()> {
    let app = spawn_app();
    let before = app.pet_count().await;

    let response = app
        .send(Method::POST, "/api/owners/1/pets", Some(new_pet(Some(json!(-1.0)))))
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"]["field"], "weight");
    assert_eq!(
        response.body["error"]["violations"][0]["constraint"]["name"],
        "decimalMin"
    );
    assert_eq!(app.pet_count().await, before);
    Ok(())
}

#[tokio::test]
async fn test_create_with_weight_above_ceiling_is_rejected() -> Result<()> {
    let app = spawn_app();
    let before = app.pet_count().await;

    let response = app
        .send(Method::POST, "/api/owners/1/pets", Some(new_pet(Some(json!(1000.0)))))
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.pet_count().await, before);
    Ok(())
}

#[tokio::test]
async fn test_create_with_valid_weight() -> Result<()> {
    let app = spawn_app();

    let response = app
        .send(Method::POST, "/api/owners/1/pets", Some(new_pet(Some(json!(50.25)))))
        .await?;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["weight"], json!(50.25));
    assert_eq!(response.body["ownerId"], 1);

    let location = response.headers.get(LOCATION).unwrap().to_str()?.to_string();
    assert_eq!(location, format!("/api/pets/{}", response.body["id"]));

    let stored = app.send(Method::GET, &location, None).await?;
    assert_eq!(stored.status, StatusCode::OK);
    assert_eq!(stored.body["weight"], json!(50.25));
    Ok(())
}

#[tokio::test]
async fn test_weight_scale_survives_round_trip() -> Result<()> {
    let app = spawn_app();
    let body: Value = serde_json::from_str(
        r#"{"name": "Charlie", "birthDate": "2019-03-10", "type": {"id": 2, "name": "dog"}, "weight": 22.50}"#,
    )?;

    let created = app
        .send(Method::POST, "/api/owners/1/pets", Some(body))
        .await?;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["weight"].to_string(), "22.50");

    let location = created.headers.get(LOCATION).unwrap().to_str()?.to_string();
    let stored = app.send(Method::GET, &location, None).await?;
    assert_eq!(stored.body["weight"].to_string(), "22.50");
    Ok(())
}

#[tokio::test]
async fn test_create_without_weight() -> Result<()> {
    let app = spawn_app();

    let response = app
        .send(Method::POST, "/api/owners/2/pets", Some(new_pet(None)))
        .await?;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(!response.body.as_object().unwrap().contains_key("weight"));
    Ok(())
}

#[tokio::test]
async fn test_weight_bounds_are_inclusive() -> Result<()> {
    let app = spawn_app();

    for weight in [json!(0.00), json!(999.99)] {
        let response = app
            .send(Method::POST, "/api/owners/1/pets", Some(new_pet(Some(weight.clone()))))
            .await?;
        assert_eq!(response.status, StatusCode::CREATED, "weight {}", weight);
    }

    let before = app.pet_count().await;
    let response = app
        .send(Method::POST, "/api/owners/1/pets", Some(new_pet(Some(json!(999.999)))))
        .await?;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.pet_count().await, before);
    Ok(())
}

#[tokio::test]
async fn test_weight_with_three_fraction_digits_is_rejected() -> Result<()> {
    let app = spawn_app();

    let response = app
        .send(Method::POST, "/api/owners/1/pets", Some(new_pet(Some(json!(12.345)))))
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"]["violations"][0]["constraint"]["name"],
        "digits"
    );
    Ok(())
}

#[tokio::test]
async fn test_update_owners_pet_weight_is_idempotent() -> Result<()> {
    let app = spawn_app();
    let body = new_pet(Some(json!(18.25)));

    let first = app
        .send(Method::PUT, "/api/owners/1/pets/1", Some(body.clone()))
        .await?;
    assert_eq!(first.status, StatusCode::NO_CONTENT);
    assert_eq!(first.body, Value::Null);

    let second = app.send(Method::PUT, "/api/owners/1/pets/1", Some(body)).await?;
    assert_eq!(second.status, StatusCode::NO_CONTENT);

    assert_eq!(app.stored_weight(1).await, Some(Decimal::new(1825, 2)));
    let pet = app.send(Method::GET, "/api/owners/1/pets/1", None).await?;
    assert_eq!(pet.body["weight"], json!(18.25));
    assert_eq!(pet.body["name"], "Luna");
    Ok(())
}

#[tokio::test]
async fn test_update_owners_pet_with_invalid_weight_keeps_stored_value() -> Result<()> {
    let app = spawn_app();

    let response = app
        .send(
            Method::PUT,
            "/api/owners/1/pets/1",
            Some(new_pet(Some(json!(-1.0)))),
        )
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.stored_weight(1).await, Some(Decimal::new(1575, 2)));
    Ok(())
}

#[tokio::test]
async fn test_update_pet_sets_weight() -> Result<()> {
    let app = spawn_app();

    let response = app
        .send(Method::PUT, "/api/pets/2", Some(full_pet(json!(4.5))))
        .await?;

    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(app.stored_weight(2).await, Some(Decimal::new(45, 1)));
    Ok(())
}

#[tokio::test]
async fn test_update_pet_null_weight_clears_it_repeatedly() -> Result<()> {
    let app = spawn_app();

    for _ in 0..2 {
        let response = app
            .send(Method::PUT, "/api/pets/1", Some(full_pet(Value::Null)))
            .await?;
        assert_eq!(response.status, StatusCode::NO_CONTENT);
    }

    assert_eq!(app.stored_weight(1).await, None);
    let pet = app.send(Method::GET, "/api/pets/1", None).await?;
    assert!(!pet.body.as_object().unwrap().contains_key("weight"));
    Ok(())
}

#[tokio::test]
async fn test_update_pet_with_invalid_weight_is_rejected() -> Result<()> {
    let app = spawn_app();

    let response = app
        .send(Method::PUT, "/api/pets/1", Some(full_pet(json!(1000.0))))
        .await?;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.stored_weight(1).await, Some(Decimal::new(1575, 2)));
    Ok(())
}
