// src/tests.rs
//
// Testes de ponta a ponta do router, com os repositórios em memória.

use std::{sync::Arc, time::Duration};

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::{
    config::{AppState, Config},
    db::memory::{InMemoryPartnerRepository, InMemoryReservationRepository},
    routes,
};

fn test_config() -> Config {
    Config {
        database_url: String::new(),
        jwt_secret: "router-test-secret-0123456789abcdef".into(),
        port: 0,
        token_ttl_hours: 72,
        bcrypt_cost: 4,
        store_timeout: Duration::from_secs(5),
        db_max_connections: 1,
        cors_allowed_origin: "http://localhost:3000".into(),
    }
}

fn app() -> Router {
    let state = AppState::with_repositories(
        &test_config(),
        Arc::new(InMemoryPartnerRepository::default()),
        Arc::new(InMemoryReservationRepository::default()),
    );
    routes::router(state)
}

struct Call<'a> {
    method: Method,
    uri: &'a str,
    token: Option<&'a str>,
    language: Option<&'a str>,
    body: Option<Body>,
}

impl<'a> Call<'a> {
    fn new(method: Method, uri: &'a str) -> Self {
        Self { method, uri, token: None, language: None, body: None }
    }

    fn token(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }

    fn language(mut self, language: &'a str) -> Self {
        self.language = Some(language);
        self
    }

    fn json(mut self, value: Value) -> Self {
        self.body = Some(Body::from(value.to_string()));
        self
    }

    fn raw(mut self, body: &'static str) -> Self {
        self.body = Some(Body::from(body));
        self
    }

    async fn send(self, app: &Router) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(self.method).uri(self.uri);
        if let Some(token) = self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        if let Some(language) = self.language {
            builder = builder.header(header::ACCEPT_LANGUAGE, language);
        }
        let request = match self.body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(body)
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }
}

fn partner_body(email: &str, tax_number: &str) -> Value {
    json!({
        "companyName": "Acme Turizm",
        "email": email,
        "password": "secret1",
        "phoneNumber": "+90 555 000 00 00",
        "address": "Kordon 1",
        "city": "Izmir",
        "businessType": "restaurant",
        "taxNumber": tax_number,
        "contactPerson": "Deniz"
    })
}

fn reservation_body(name: &str, start: &str) -> Value {
    json!({
        "name": name,
        "startDate": start,
        "capacity": 12,
        "recurrence": {
            "enabled": true,
            "type": "weekly",
            "daysOfWeek": [1, 5],
            "endType": "never"
        }
    })
}

async fn register_and_login(app: &Router, email: &str, tax_number: &str) -> String {
    let (status, _) = Call::new(Method::POST, "/api/partners/register")
        .json(partner_body(email, tax_number))
        .send(app)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = Call::new(Method::POST, "/api/partners/login")
        .json(json!({ "email": email, "password": "secret1" }))
        .send(app)
        .await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public() {
    let response = app()
        .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn register_hides_password_and_rejects_duplicates() {
    let app = app();

    let (status, body) = Call::new(Method::POST, "/api/partners/register")
        .json(partner_body("a@acme.com", "TX-1"))
        .send(&app)
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Business registered successfully.");
    assert_eq!(body["partner"]["email"], "a@acme.com");
    assert_eq!(body["partner"]["taxNumber"], "TX-1");
    let partner = body["partner"].as_object().unwrap();
    assert!(!partner.contains_key("password"));
    assert!(!partner.contains_key("passwordHash"));

    let (status, body) = Call::new(Method::POST, "/api/partners/register")
        .json(partner_body("a@acme.com", "TX-2"))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "This email address is already in use.");

    let (status, body) = Call::new(Method::POST, "/api/partners/register")
        .json(partner_body("b@acme.com", "TX-1"))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "This tax number is already in use.");
}

#[tokio::test]
async fn register_reports_every_invalid_field() {
    let (status, body) = Call::new(Method::POST, "/api/partners/register")
        .json(json!({ "email": "not-an-email", "password": "123" }))
        .send(&app())
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "One or more fields are invalid.");
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(
        fields,
        vec![
            "address",
            "businessType",
            "city",
            "companyName",
            "contactPerson",
            "email",
            "password",
            "phoneNumber",
            "taxNumber",
        ]
    );
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = app();
    register_and_login(&app, "a@acme.com", "TX-1").await;

    let unknown = Call::new(Method::POST, "/api/partners/login")
        .json(json!({ "email": "ghost@acme.com", "password": "secret1" }))
        .send(&app)
        .await;
    let wrong = Call::new(Method::POST, "/api/partners/login")
        .json(json!({ "email": "a@acme.com", "password": "not-it" }))
        .send(&app)
        .await;

    assert_eq!(unknown.0, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown, wrong);
}

#[tokio::test]
async fn login_returns_token_and_partner() {
    let app = app();
    register_and_login(&app, "a@acme.com", "TX-1").await;

    let (status, body) = Call::new(Method::POST, "/api/partners/login")
        .json(json!({ "email": "a@acme.com", "password": "secret1" }))
        .send(&app)
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful.");
    assert!(body["expiresAt"].is_string());
    assert_eq!(body["partner"]["email"], "a@acme.com");
    assert!(body["partner"].get("passwordHash").is_none());
}

#[tokio::test]
async fn reservations_require_bearer_token() {
    let app = app();
    let token = register_and_login(&app, "a@acme.com", "TX-1").await;

    let (status, body) = Call::new(Method::GET, "/api/reservations").send(&app).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid or missing authentication token.");

    // Token válido, mas sem o prefixo "Bearer"
    let request = Request::get("/api/reservations")
        .header(header::AUTHORIZATION, token.as_str())
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let (status, _) = Call::new(Method::GET, "/api/reservations")
        .token("not.a.jwt")
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = Call::new(Method::GET, "/api/reservations")
        .token(&token)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn reservation_crud_flow() {
    let app = app();
    let token = register_and_login(&app, "a@acme.com", "TX-1").await;

    let (status, created) = Call::new(Method::POST, "/api/reservations")
        .token(&token)
        .json(reservation_body("Brunch", "2025-07-05T10:00:00Z"))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "Brunch");
    assert_eq!(created["endDate"], created["startDate"]);
    assert_eq!(created["recurrence"]["daysOfWeek"], json!([1, 5]));
    let id = created["id"].as_str().unwrap().to_string();

    let (status, listed) = Call::new(Method::GET, "/api/reservations")
        .token(&token)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));

    let uri = format!("/api/reservations/{id}");
    let mut changes = reservation_body("Late brunch", "2025-07-05T12:00:00Z");
    changes["capacity"] = json!(30);
    let (status, updated) = Call::new(Method::PUT, &uri)
        .token(&token)
        .json(changes)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Late brunch");
    assert_eq!(updated["capacity"], 30);

    let (status, body) = Call::new(Method::DELETE, &uri).token(&token).send(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Reservation deleted successfully.");

    let (status, body) = Call::new(Method::DELETE, &uri).token(&token).send(&app).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Reservation not found.");
}

#[tokio::test]
async fn partners_cannot_touch_each_others_reservations() {
    let app = app();
    let alice = register_and_login(&app, "alice@acme.com", "TX-1").await;
    let bob = register_and_login(&app, "bob@acme.com", "TX-2").await;

    let (_, created) = Call::new(Method::POST, "/api/reservations")
        .token(&alice)
        .json(reservation_body("Private", "2025-07-05T10:00:00Z"))
        .send(&app)
        .await;
    let uri = format!("/api/reservations/{}", created["id"].as_str().unwrap());

    let (status, listed) = Call::new(Method::GET, "/api/reservations")
        .token(&bob)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));

    let (status, _) = Call::new(Method::PUT, &uri)
        .token(&bob)
        .json(reservation_body("Hijacked", "2025-07-05T10:00:00Z"))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = Call::new(Method::DELETE, &uri).token(&bob).send(&app).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = Call::new(Method::GET, "/api/reservations")
        .token(&alice)
        .send(&app)
        .await;
    assert_eq!(listed[0]["name"], "Private");
}

#[tokio::test]
async fn list_filters_by_window_and_rejects_bad_dates() {
    let app = app();
    let token = register_and_login(&app, "a@acme.com", "TX-1").await;
    for (name, start) in [("early", "2025-07-01T10:00:00Z"), ("late", "2025-07-20T10:00:00Z")] {
        Call::new(Method::POST, "/api/reservations")
            .token(&token)
            .json(reservation_body(name, start))
            .send(&app)
            .await;
    }

    let (status, listed) = Call::new(
        Method::GET,
        "/api/reservations?start=2025-07-15T00:00:00Z&end=2025-07-31T00:00:00Z",
    )
    .token(&token)
    .send(&app)
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["name"], "late");

    let (status, body) = Call::new(
        Method::GET,
        "/api/reservations?start=tomorrow&end=2025-07-31T00:00:00Z",
    )
    .token(&token)
    .send(&app)
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid start date format.");

    let (status, body) = Call::new(Method::GET, "/api/reservations?end=31-07-2025")
        .token(&token)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid end date format.");
}

#[tokio::test]
async fn invalid_input_is_a_bad_request() {
    let app = app();
    let token = register_and_login(&app, "a@acme.com", "TX-1").await;

    let (status, body) = Call::new(Method::POST, "/api/reservations")
        .token(&token)
        .raw("{ not json")
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request format.");

    let mut zero = reservation_body("Empty", "2025-07-05T10:00:00Z");
    zero["capacity"] = json!(0);
    let (status, body) = Call::new(Method::POST, "/api/reservations")
        .token(&token)
        .json(zero)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], "capacity");

    let (status, body) = Call::new(Method::DELETE, "/api/reservations/not-a-uuid")
        .token(&token)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid reservation ID.");
}

#[tokio::test]
async fn messages_follow_accept_language() {
    let app = app();

    let (status, body) = Call::new(Method::GET, "/api/reservations")
        .language("tr-TR,tr;q=0.9,en;q=0.8")
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Geçersiz veya eksik token");

    let (_, body) = Call::new(Method::POST, "/api/partners/login")
        .language("pt-BR")
        .raw("{ \"email\": ")
        .send(&app)
        .await;
    assert_eq!(body["error"], "Formato de requisição inválido.");
}

#[tokio::test]
async fn recurrence_accepts_minimal_and_full_descriptors() {
    let app = app();
    let token = register_and_login(&app, "a@acme.com", "TX-1").await;

    let (status, created) = Call::new(Method::POST, "/api/reservations")
        .token(&token)
        .json(json!({
            "name": "Once",
            "startDate": "2025-07-05T10:00:00Z",
            "capacity": 2,
            "recurrence": { "enabled": false }
        }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["recurrence"]["enabled"], false);
    assert_eq!(created["recurrence"]["endType"], "never");

    let (status, created) = Call::new(Method::POST, "/api/reservations")
        .token(&token)
        .json(json!({
            "name": "Weekly",
            "startDate": "2025-07-07T10:00:00Z",
            "capacity": 2,
            "recurrence": {
                "enabled": true,
                "type": "weekly",
                "daysOfWeek": [1],
                "endType": "after",
                "endAfter": 3,
                "endDate": null
            }
        }))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created["recurrence"],
        json!({
            "enabled": true,
            "type": "weekly",
            "daysOfWeek": [1],
            "endType": "after",
            "endAfter": 3
        })
    );
}

#[tokio::test]
async fn trailing_slash_lists_and_creates() {
    let app = app();
    let token = register_and_login(&app, "a@acme.com", "TX-1").await;

    let (status, _) = Call::new(Method::POST, "/api/reservations/")
        .token(&token)
        .json(reservation_body("Slash", "2025-07-05T10:00:00Z"))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, listed) = Call::new(Method::GET, "/api/reservations/")
        .token(&token)
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed[0]["name"], "Slash");

    let (status, _) = Call::new(Method::GET, "/api/reservations/").send(&app).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unsupported_method_is_405_without_token() {
    let app = app();

    let (status, _) = Call::new(Method::DELETE, "/api/reservations").send(&app).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = Call::new(Method::GET, &format!("/api/reservations/{}", uuid::Uuid::new_v4()))
        .send(&app)
        .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
