#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde_json::Value;
use tower::ServiceExt;

use petclinic_api::auth::{JwtService, Role};
use petclinic_api::models::{Owner, Pet, PetType};
use petclinic_api::services::{ClinicService, InMemoryClinicService};
use petclinic_api::{AppState, Config, router};

pub const SECRET: &str = "integration-test-secret-0123456789abcdef";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// `Value::Null` when the body is empty
    pub body: Value,
}

pub struct TestApp {
    pub router: Router,
    pub clinic: Arc<InMemoryClinicService>,
    pub jwt: JwtService,
}

fn owner(id: i32, first_name: &str, last_name: &str) -> Owner {
    Owner {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        address: "110 W. Liberty St.".to_string(),
        city: "Madison".to_string(),
        telephone: "6085551023".to_string(),
    }
}

fn pet(id: i32, name: &str, pet_type: PetType, owner_id: i32, weight: Option<Decimal>) -> Pet {
    let mut pet = Pet::new(name, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), pet_type)
        .with_owner(owner_id)
        .with_weight(weight);
    pet.id = Some(id);
    pet
}

/// Clinic with two owners, two pet types and two pets of owner 1:
/// pet 1 "Buddy" (dog, 15.75) and pet 2 "Whiskers" (cat, no weight).
pub fn fixture_clinic() -> InMemoryClinicService {
    let cat = PetType::new(1, "cat");
    let dog = PetType::new(2, "dog");
    InMemoryClinicService::from_records(
        vec![owner(1, "George", "Franklin"), owner(2, "Betty", "Davis")],
        vec![cat.clone(), dog.clone()],
        vec![
            pet(1, "Buddy", dog, 1, Some(Decimal::new(1575, 2))),
            pet(2, "Whiskers", cat, 1, None),
        ],
    )
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(true)
}

pub fn spawn_app_with(security_enabled: bool) -> TestApp {
    let config = Config {
        jwt_secret: SECRET.to_string(),
        security_enabled,
        seed_sample_data: false,
        ..Config::default()
    };
    let clinic = Arc::new(fixture_clinic());
    let state = AppState::new(config.clone(), clinic.clone());

    TestApp {
        router: router::build_router(state),
        clinic,
        jwt: JwtService::new(SECRET, config.jwt_expiration),
    }
}

impl TestApp {
    pub fn token(&self, roles: &[Role]) -> String {
        self.jwt
            .generate_token("integration-test", roles)
            .expect("token signing")
    }

    /// Send a request as an OWNER_ADMIN
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> Result<TestResponse> {
        let token = self.token(&[Role::OwnerAdmin]);
        self.send_with_token(method, uri, body, Some(&token)).await
    }

    pub async fn send_with_token(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> Result<TestResponse> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(request).await?;
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await?.to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(TestResponse {
            status,
            headers,
            body,
        })
    }

    pub async fn pet_count(&self) -> usize {
        self.clinic
            .find_all_pets()
            .await
            .map(|pets| pets.len())
            .unwrap_or_default()
    }

    pub async fn stored_weight(&self, pet_id: i32) -> Option<Decimal> {
        self.clinic
            .find_pet_by_id(pet_id)
            .await
            .ok()
            .flatten()
            .and_then(|pet| pet.weight)
    }
}
