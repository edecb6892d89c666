// ABOUTME: Integration tests for the HTTP adapters against an in-process mock backend
// ABOUTME: Covers remote auth, the remote exercise log, workout plans and catalog status mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use liftlog::auth::{AuthProvider, RemoteAuthProvider};
use liftlog::catalog::{
    ExerciseCatalog, HttpExerciseCatalog, HttpMuscleGroupCatalog, MuscleGroupCatalog,
};
use liftlog::config::HttpClientConfig;
use liftlog::errors::ErrorCode;
use liftlog::exercise_log::{ApiExerciseLog, ExerciseLogApi};
use liftlog::http_client::ApiClient;
use liftlog::models::{
    CatalogExerciseRequest, DurationUnit, LoginCredentials, RegisterCredentials, WorkoutPlan,
};
use liftlog::storage::memory::InMemoryStorage;
use liftlog::workout_plan::{ApiWorkoutPlans, WorkoutPlanApi};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

const USER_TOKEN: &str = "remote-token";
const ADMIN_TOKEN: &str = "admin-token";

// ============================================================================
// Mock backend
// ============================================================================

#[derive(Default)]
struct Backend {
    logs: Mutex<Vec<Value>>,
    plans: Mutex<Vec<Value>>,
}

type Shared = Arc<Backend>;

fn session_body(id: &str, email: &str, role: &str, token: &str) -> Value {
    json!({
        "user": { "id": id, "username": "lifter", "email": email, "role": role },
        "token": token,
    })
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// 401 without a token, 403 for a non-admin token
fn admin_gate(headers: &HeaderMap) -> Option<Response> {
    match bearer(headers) {
        Some(ADMIN_TOKEN) => None,
        Some(_) => Some(StatusCode::FORBIDDEN.into_response()),
        None => Some(StatusCode::UNAUTHORIZED.into_response()),
    }
}

async fn login(Json(body): Json<Value>) -> Response {
    let email = body["email"].as_str().unwrap_or_default().to_owned();
    match email.as_str() {
        "lifter@example.com" if body["password"] == "Password1" => {
            Json(session_body("user_1", &email, "USER", USER_TOKEN)).into_response()
        }
        "admin@example.com" => {
            Json(session_body("admin_1", &email, "ADMIN", ADMIN_TOKEN)).into_response()
        }
        "down@example.com" => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "message": "Maintenance window" })),
        )
            .into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Bad credentials" })),
        )
            .into_response(),
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    match body["email"].as_str().unwrap_or_default() {
        "taken@example.com" => StatusCode::CONFLICT.into_response(),
        "rejected@example.com" => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "Username contains a reserved word" })),
        )
            .into_response(),
        "teapot@example.com" => StatusCode::IM_A_TEAPOT.into_response(),
        email => (
            StatusCode::CREATED,
            Json(session_body("user_2", email, "USER", USER_TOKEN)),
        )
            .into_response(),
    }
}

async fn save_logs(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Json(batch): Json<Vec<Value>>,
) -> Response {
    if bearer(&headers) != Some(USER_TOKEN) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Token expired" })))
            .into_response();
    }
    backend.logs.lock().await.extend(batch);
    StatusCode::CREATED.into_response()
}

async fn load_logs(State(backend): State<Shared>, Path(user_id): Path<String>) -> Response {
    if user_id == "broken" {
        return StatusCode::BAD_GATEWAY.into_response();
    }
    Json(backend.logs.lock().await.clone()).into_response()
}

async fn latest_log(
    State(backend): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    match query.get("exerciseId").map(String::as_str) {
        Some("1") => match backend.logs.lock().await.last() {
            Some(entry) => Json(entry.clone()).into_response(),
            None => StatusCode::NO_CONTENT.into_response(),
        },
        Some("500") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn list_groups(headers: HeaderMap) -> Response {
    if let Some(denied) = admin_gate(&headers) {
        return denied;
    }
    Json(json!([
        { "id": 1, "name": "CHEST", "description": "Chest exercises" },
        { "id": 2, "name": "BACK" },
    ]))
    .into_response()
}

async fn delete_group(headers: HeaderMap, Path(id): Path<i64>) -> Response {
    if let Some(denied) = admin_gate(&headers) {
        return denied;
    }
    match id {
        1 => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "Muscle group is referenced by exercises" })),
        )
            .into_response(),
        2 => StatusCode::CONFLICT.into_response(),
        3 => StatusCode::NO_CONTENT.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn group_by_name(Path(name): Path<String>) -> Response {
    if name.eq_ignore_ascii_case("chest") {
        Json(json!({ "id": 1, "name": "CHEST" })).into_response()
    } else if name == "UPPER/BACK #2?" {
        Json(json!({ "id": 9, "name": name })).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn create_exercise(headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if let Some(denied) = admin_gate(&headers) {
        return denied;
    }
    if body["name"] == "Crash" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({ "id": 10, "name": body["name"], "group": body["group"] })),
    )
        .into_response()
}

async fn public_exercises() -> Json<Value> {
    Json(json!([{ "id": 1, "name": "Bench Press", "group": "CHEST" }]))
}

/// Plans of `user_1` only; any other user id is forbidden
fn plan_gate(headers: &HeaderMap, user_id: &str) -> Option<Response> {
    if bearer(headers) != Some(USER_TOKEN) {
        return Some(StatusCode::UNAUTHORIZED.into_response());
    }
    (user_id != "user_1").then(|| StatusCode::FORBIDDEN.into_response())
}

async fn list_plans(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
) -> Response {
    if let Some(denied) = plan_gate(&headers, &user_id) {
        return denied;
    }
    Json(backend.plans.lock().await.clone()).into_response()
}

async fn create_plan(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Json(mut plan): Json<Value>,
) -> Response {
    if let Some(denied) = plan_gate(&headers, &user_id) {
        return denied;
    }
    let mut plans = backend.plans.lock().await;
    plan["id"] = json!(format!("plan_{}", plans.len() + 1));
    plans.push(plan.clone());
    (StatusCode::CREATED, Json(plan)).into_response()
}

async fn get_plan(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Path((user_id, plan_id)): Path<(String, String)>,
) -> Response {
    if let Some(denied) = plan_gate(&headers, &user_id) {
        return denied;
    }
    if plan_id == "boom" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let plans = backend.plans.lock().await;
    match plans.iter().find(|p| p["id"] == plan_id.as_str()) {
        Some(plan) => Json(plan.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn update_plan(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Path((user_id, plan_id)): Path<(String, String)>,
    Json(mut plan): Json<Value>,
) -> Response {
    if let Some(denied) = plan_gate(&headers, &user_id) {
        return denied;
    }
    let mut plans = backend.plans.lock().await;
    match plans.iter_mut().find(|p| p["id"] == plan_id.as_str()) {
        Some(slot) => {
            plan["id"] = json!(plan_id);
            *slot = plan.clone();
            Json(plan).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn delete_plan(
    State(backend): State<Shared>,
    headers: HeaderMap,
    Path((user_id, plan_id)): Path<(String, String)>,
) -> Response {
    if let Some(denied) = plan_gate(&headers, &user_id) {
        return denied;
    }
    let mut plans = backend.plans.lock().await;
    let before = plans.len();
    plans.retain(|p| p["id"] != plan_id.as_str());
    if plans.len() == before {
        StatusCode::NOT_FOUND.into_response()
    } else {
        StatusCode::NO_CONTENT.into_response()
    }
}

async fn public_exercise(Path(id): Path<i64>) -> Response {
    if id == 1 {
        Json(json!({ "id": 1, "name": "Bench Press", "group": "CHEST" })).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}

async fn spawn_backend() -> (ApiClient, Shared) {
    common::init_test_logging();
    let backend: Shared = Arc::new(Backend::default());
    let app = Router::new()
        .route("/api/v1/users/login", post(login))
        .route("/api/v1/users/register", post(register))
        .route("/api/v1/users/:id/logs", post(save_logs).get(load_logs))
        .route("/api/v1/users/:id/logs/latest", get(latest_log))
        .route("/api/v1/admin/muscle-groups", get(list_groups))
        .route("/api/v1/admin/muscle-groups/:id", delete(delete_group))
        .route("/api/v1/muscle-groups/by-name/:name", get(group_by_name))
        .route("/api/v1/admin/exercises", post(create_exercise))
        .route("/api/v1/exercises", get(public_exercises))
        .route("/api/v1/exercises/:id", get(public_exercise))
        .route(
            "/api/v1/users/:id/workout-plans",
            get(list_plans).post(create_plan),
        )
        .route(
            "/api/v1/users/:id/workout-plans/:plan_id",
            get(get_plan).put(update_plan).delete(delete_plan),
        )
        .with_state(Arc::clone(&backend));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ApiClient::new(format!("http://{address}/"), &HttpClientConfig::default());
    (client, backend)
}

fn remote_auth(client: &ApiClient) -> Arc<RemoteAuthProvider> {
    Arc::new(RemoteAuthProvider::new(
        client.clone(),
        Arc::new(InMemoryStorage::new()),
    ))
}

// ============================================================================
// Remote auth
// ============================================================================

#[tokio::test]
async fn test_remote_login_persists_session() {
    let (client, _backend) = spawn_backend().await;
    let auth = remote_auth(&client);

    let session = auth
        .login(&LoginCredentials::new("lifter@example.com", "Password1"))
        .await
        .unwrap();
    assert_eq!(session.token, USER_TOKEN);
    assert_eq!(auth.get_token().await.unwrap().as_deref(), Some(USER_TOKEN));
    assert_eq!(auth.check_auth().await.unwrap().user.id, "user_1");

    auth.logout().await.unwrap();
    assert_eq!(auth.get_token().await.unwrap(), None);
}

#[tokio::test]
async fn test_remote_login_error_mapping() {
    let (client, _backend) = spawn_backend().await;
    let auth = remote_auth(&client);

    let rejected = auth
        .login(&LoginCredentials::new("lifter@example.com", "Wrong1234"))
        .await
        .unwrap_err();
    assert_eq!(rejected.code, ErrorCode::AuthInvalid);
    assert_eq!(rejected.message, "Bad credentials");

    let down = auth
        .login(&LoginCredentials::new("down@example.com", "Password1"))
        .await
        .unwrap_err();
    assert_eq!(down.code, ErrorCode::ExternalServiceError);
    assert_eq!(down.message, "Maintenance window");
    assert_eq!(down.context.http_status, Some(503));
}

#[tokio::test]
async fn test_remote_register_error_mapping() {
    let (client, _backend) = spawn_backend().await;
    let auth = remote_auth(&client);

    let taken = auth
        .register(&common::valid_registration("taken@example.com"))
        .await
        .unwrap_err();
    assert_eq!(taken.code, ErrorCode::ResourceAlreadyExists);
    assert_eq!(taken.message, "User with this email already exists");

    let rejected = auth
        .register(&common::valid_registration("rejected@example.com"))
        .await
        .unwrap_err();
    assert_eq!(rejected.code, ErrorCode::InvalidInput);
    assert_eq!(rejected.message, "Username contains a reserved word");

    let odd = auth
        .register(&RegisterCredentials::new("lifter", "teapot@example.com", "Password1"))
        .await
        .unwrap_err();
    assert_eq!(odd.code, ErrorCode::ExternalServiceError);
    assert_eq!(odd.message, "418");

    let created = auth
        .register(&common::valid_registration("new@example.com"))
        .await
        .unwrap();
    assert_eq!(created.user.email, "new@example.com");
}

#[tokio::test]
async fn test_unreachable_backend_is_unavailable() {
    let client = ApiClient::new("http://127.0.0.1:9", &HttpClientConfig::default());
    let auth = remote_auth(&client);
    let error = auth
        .login(&LoginCredentials::new("lifter@example.com", "Password1"))
        .await
        .unwrap_err();
    assert!(error.is_port_failure());
}

// ============================================================================
// Remote exercise log
// ============================================================================

#[tokio::test]
async fn test_log_requires_token() {
    let (client, _backend) = spawn_backend().await;
    let log = ApiExerciseLog::new(client.clone(), remote_auth(&client));

    let error = log
        .save("user_1", &common::bench_press(&[(100.0, 10)]))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::AuthRequired);
    assert_eq!(error.message, "No authentication token");
}

#[tokio::test]
async fn test_log_save_load_and_latest() {
    let (client, backend) = spawn_backend().await;
    let auth = remote_auth(&client);
    auth.login(&LoginCredentials::new("lifter@example.com", "Password1"))
        .await
        .unwrap();
    let log = ApiExerciseLog::new(client, Arc::clone(&auth) as _);

    log.save("user_1", &common::bench_press(&[(100.0, 10), (95.0, 8)]))
        .await
        .unwrap();

    let stored = backend.logs.lock().await.clone();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["timestamp"], "2025-01-15T10:30:00.000Z");
    assert_eq!(stored[0]["exercise"]["name"], "Bench Press");

    let history = log.load("user_1").await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].sets.len(), 2);

    let latest = log.latest("user_1", 1).await.unwrap().unwrap();
    assert_eq!(latest.exercise.group, "CHEST");
    assert_eq!(log.latest("user_1", 2).await.unwrap(), None);

    let failure = log.latest("user_1", 500).await.unwrap_err();
    assert_eq!(failure.code, ErrorCode::ExternalServiceError);
    assert_eq!(failure.message, "500");
}

#[tokio::test]
async fn test_log_latest_without_history_is_none() {
    let (client, _backend) = spawn_backend().await;
    let auth = remote_auth(&client);
    auth.login(&LoginCredentials::new("lifter@example.com", "Password1"))
        .await
        .unwrap();
    let log = ApiExerciseLog::new(client, Arc::clone(&auth) as _);

    // 204 No Content
    assert_eq!(log.latest("user_1", 1).await.unwrap(), None);
}

#[tokio::test]
async fn test_log_failures_carry_status() {
    let (client, _backend) = spawn_backend().await;
    let auth = remote_auth(&client);
    auth.login(&LoginCredentials::new("admin@example.com", "Password1"))
        .await
        .unwrap();
    let log = ApiExerciseLog::new(client, Arc::clone(&auth) as _);

    // The admin token is not accepted by the log endpoint
    let error = log
        .save("admin_1", &common::bench_press(&[(100.0, 10)]))
        .await
        .unwrap_err();
    assert_eq!(error.message, "Token expired");
    assert_eq!(error.context.http_status, Some(401));

    let error = log.load("broken").await.unwrap_err();
    assert_eq!(error.message, "HTTP 502");
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_catalog_status_mapping() {
    let (client, _backend) = spawn_backend().await;
    let auth = remote_auth(&client);
    let groups = HttpMuscleGroupCatalog::new(client.clone(), Arc::clone(&auth) as _);

    // No session
    assert_eq!(
        groups.get_all().await.unwrap_err().code,
        ErrorCode::AuthRequired
    );

    // Regular user
    auth.login(&LoginCredentials::new("lifter@example.com", "Password1"))
        .await
        .unwrap();
    let denied = groups.get_all().await.unwrap_err();
    assert!(denied.is_permission_denied());
    assert_eq!(denied.context.http_status, Some(403));

    // Administrator
    auth.login(&LoginCredentials::new("admin@example.com", "Password1"))
        .await
        .unwrap();
    let all = groups.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].description, None);

    let referenced = groups.delete(1).await.unwrap_err();
    assert_eq!(referenced.code, ErrorCode::ResourceConflict);
    assert_eq!(referenced.message, "Muscle group is referenced by exercises");

    let bare_conflict = groups.delete(2).await.unwrap_err();
    assert_eq!(
        bare_conflict.message,
        "Conflict: muscle group already exists or is still referenced"
    );

    groups.delete(3).await.unwrap();
    assert!(groups.delete(99).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_public_catalog_reads_need_no_token() {
    let (client, _backend) = spawn_backend().await;
    let auth = remote_auth(&client);
    let groups = HttpMuscleGroupCatalog::new(client.clone(), Arc::clone(&auth) as _);
    let exercises = HttpExerciseCatalog::new(client, auth);

    assert_eq!(groups.get_by_name(" chest ").await.unwrap().id, 1);
    assert!(groups.get_by_name("wings").await.unwrap_err().is_not_found());
    // Reserved characters stay inside the one path segment
    assert_eq!(groups.get_by_name("UPPER/BACK #2?").await.unwrap().id, 9);
    assert_eq!(exercises.list_public().await.unwrap()[0].name, "Bench Press");
}

#[tokio::test]
async fn test_catalog_create_and_server_error() {
    let (client, _backend) = spawn_backend().await;
    let auth = remote_auth(&client);
    auth.login(&LoginCredentials::new("admin@example.com", "Password1"))
        .await
        .unwrap();
    let exercises = HttpExerciseCatalog::new(client, Arc::clone(&auth) as _);

    let created = exercises
        .create(&CatalogExerciseRequest::new("Hip Thrust", "GLUTES"))
        .await
        .unwrap();
    assert_eq!(created.id, 10);
    assert_eq!(created.group, "GLUTES");

    let error = exercises
        .create(&CatalogExerciseRequest::new("Crash", "CHEST"))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, "Server error: 500");
}

// ============================================================================
// Remote workout plans
// ============================================================================

async fn signed_in_plans(client: ApiClient) -> ApiWorkoutPlans {
    let auth = remote_auth(&client);
    auth.login(&LoginCredentials::new("lifter@example.com", "Password1"))
        .await
        .unwrap();
    ApiWorkoutPlans::new(client, auth)
}

#[tokio::test]
async fn test_workout_plan_round_trip() {
    let (client, backend) = spawn_backend().await;
    let plans = signed_in_plans(client).await;

    let created = plans
        .create("user_1", &WorkoutPlan::new("Strength", 8, DurationUnit::Weeks))
        .await
        .unwrap();
    assert_eq!(created.id.as_deref(), Some("plan_1"));
    assert_eq!(
        backend.plans.lock().await[0]["durationUnit"],
        json!("WEEKS")
    );

    let mut renamed = created.clone();
    renamed.name = "Peaking".to_owned();
    renamed.is_active = true;
    let updated = plans.update("user_1", "plan_1", &renamed).await.unwrap();
    assert!(updated.is_active);

    let listed = plans.list("user_1").await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Peaking");
    assert_eq!(plans.get("user_1", "plan_1").await.unwrap(), updated);

    plans.delete("user_1", "plan_1").await.unwrap();
    assert!(plans.list("user_1").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_workout_plan_status_mapping() {
    let (client, _backend) = spawn_backend().await;

    let anonymous = ApiWorkoutPlans::new(client.clone(), remote_auth(&client));
    assert_eq!(
        anonymous.list("user_1").await.unwrap_err().message,
        "No authentication token"
    );

    let plans = signed_in_plans(client).await;
    let denied = plans.list("user_2").await.unwrap_err();
    assert!(denied.is_permission_denied());
    assert_eq!(denied.message, "Access denied");

    let missing = plans.get("user_1", "missing").await.unwrap_err();
    assert!(missing.is_not_found());
    assert_eq!(missing.message, "Workout plan not found");
    assert!(plans.delete("user_1", "missing").await.unwrap_err().is_not_found());

    let server = plans.get("user_1", "boom").await.unwrap_err();
    assert_eq!(server.message, "Server error: 500");
    assert_eq!(server.context.http_status, Some(500));
}

#[tokio::test]
async fn test_public_exercise_by_id() {
    let (client, _backend) = spawn_backend().await;
    let exercises = HttpExerciseCatalog::new(client.clone(), remote_auth(&client));

    assert_eq!(exercises.get_public_by_id(1).await.unwrap().name, "Bench Press");
    assert!(exercises.get_public_by_id(99).await.unwrap_err().is_not_found());
}
