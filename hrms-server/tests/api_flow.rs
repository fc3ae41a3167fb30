//! End-to-end API flow against an in-memory server state.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use hrms_server::auth::JwtConfig;
use hrms_server::{Config, ServerState, build_app};

fn test_config() -> Config {
    Config {
        work_dir: "/tmp/hrms-test".to_string(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-key-0123456789abcdef".to_string(),
            access_minutes: 60,
            refresh_days: 7,
            issuer: "hrms-server".to_string(),
            audience: "hrms-clients".to_string(),
        },
        environment: "development".to_string(),
        admin_username: "admin".to_string(),
        admin_password: "integration-admin-pass".to_string(),
    }
}

async fn test_app() -> Router {
    let config = test_config();
    let state = ServerState::initialize_in_memory(&config)
        .await
        .expect("state");
    build_app(state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, body)
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).expect("request")
}

fn send_json(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_vec(body).expect("encode")))
        .expect("request")
}

async fn login(app: &Router) -> String {
    let (status, body) = send(
        app,
        send_json(
            "POST",
            "/api/auth/login/",
            None,
            &json!({"username": "admin", "password": "integration-admin-pass"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["is_superuser"], true);
    body["access"].as_str().expect("access token").to_string()
}

#[tokio::test]
async fn test_health_is_public() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "Backend is running"}));
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/employees/", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["detail"].is_string());

    let (status, _) = send(&app, get("/api/employees/", Some("not-a-jwt"))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_validation_and_bad_credentials() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        send_json("POST", "/api/auth/login/", None, &json!({"username": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Username and password are required.");

    let (status, body) = send(
        &app,
        send_json(
            "POST",
            "/api/auth/login/",
            None,
            &json!({"username": "admin", "password": "wrong"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Invalid credentials.");
}

#[tokio::test]
async fn test_refresh_and_logout() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        send_json(
            "POST",
            "/api/auth/login/",
            None,
            &json!({"username": "admin", "password": "integration-admin-pass"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let refresh = body["refresh"].as_str().expect("refresh").to_string();

    let (status, body) = send(
        &app,
        send_json("POST", "/api/auth/refresh/", None, &json!({"refresh": refresh})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["access"].is_string());

    // The access token must not be accepted as a refresh token
    let access = body["access"].as_str().expect("access").to_string();
    let (status, _) = send(
        &app,
        send_json("POST", "/api/auth/refresh/", None, &json!({"refresh": access})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        send_json("POST", "/api/auth/logout/", None, &json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["detail"], "Logged out.");
}

#[tokio::test]
async fn test_department_crud_round_trip() {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, created) = send(
        &app,
        send_json(
            "POST",
            "/api/departments/",
            Some(&token),
            &json!({"name": "Engineering", "description": "Builds things", "manager": "Ada", "location": "HQ"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().expect("id").to_string();

    let (status, fetched) = send(&app, get(&format!("/api/departments/{}/", id), Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Engineering");

    // Update with identical fields is idempotent
    let (status, updated) = send(
        &app,
        send_json(
            "PUT",
            &format!("/api/departments/update/{}/", id),
            Some(&token),
            &json!({"name": "Engineering", "description": "Builds things", "manager": "Ada", "location": "HQ"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], fetched["name"]);
    assert_eq!(updated["id"], fetched["id"]);

    let delete_req = Request::builder()
        .method("DELETE")
        .uri(format!("/api/departments/delete/{}/", id))
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .expect("request");
    let (status, body) = send(&app, delete_req).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, get(&format!("/api/departments/{}/", id), Some(&token))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Department not found.");
}

#[tokio::test]
async fn test_branch_scenario() {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, location) = send(
        &app,
        send_json(
            "POST",
            "/api/locations/",
            Some(&token),
            &json!({"location_name": "HQ"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let l1 = location["id"].as_str().expect("id").to_string();

    let (status, branch) = send(
        &app,
        send_json(
            "POST",
            "/api/branches/",
            Some(&token),
            &json!({"branch_name": "Main", "location_name": l1}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(branch["location_data"]["id"], l1.as_str());
    assert_eq!(branch["location_data"]["name"], "HQ");

    let (status, body) = send(
        &app,
        send_json(
            "POST",
            "/api/branches/",
            Some(&token),
            &json!({"branch_name": "Annex", "location_name": "not-an-id"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Invalid location ID format.");
}

#[tokio::test]
async fn test_attendance_flow() {
    let app = test_app().await;
    let token = login(&app).await;

    let (status, day) = send(
        &app,
        send_json(
            "POST",
            "/api/employee_attendance-check_in/",
            Some(&token),
            &json!({"employee_id": "E100", "date": "2024-01-05", "check_in": "09:00"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let attendance_id = day["id"].as_str().expect("id").to_string();
    assert_eq!(day["status"], "Present");
    assert_eq!(day["records"]["check_in"], "09:00");
    assert_eq!(day["records"]["check_out"], "");

    let (status, days) = send(
        &app,
        get(
            "/api/get_employee_attendance/?emp_id=E100&date=2024-01-05",
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(days.as_array().expect("array").len(), 1);

    let (status, closed) = send(
        &app,
        send_json(
            "POST",
            &format!("/api/employee_attendance-check_out/{}", attendance_id),
            Some(&token),
            &json!({"check_out": "17:30"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(closed["records"]["check_out"], "17:30");

    // No data -> 404 with the message body shape
    let (status, body) = send(
        &app,
        get(
            "/api/get_employee_attendance/?emp_id=E999&date=2099-01-01",
            Some(&token),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "No attendance records found for employee E999 on 2099-01-01"
    );
}

#[tokio::test]
async fn test_employee_create_against_references() {
    let app = test_app().await;
    let token = login(&app).await;

    let (_, department) = send(
        &app,
        send_json(
            "POST",
            "/api/departments/",
            Some(&token),
            &json!({"name": "Engineering"}),
        ),
    )
    .await;
    let department_id = department["id"].as_str().expect("id").to_string();

    let (_, designation) = send(
        &app,
        send_json(
            "POST",
            "/api/designations/",
            Some(&token),
            &json!({"designation_name": "Engineer", "department_name": department_id}),
        ),
    )
    .await;
    let designation_id = designation["id"].as_str().expect("id").to_string();

    let (_, location) = send(
        &app,
        send_json(
            "POST",
            "/api/locations/",
            Some(&token),
            &json!({"location_name": "HQ"}),
        ),
    )
    .await;
    let location_id = location["id"].as_str().expect("id").to_string();

    let (_, branch) = send(
        &app,
        send_json(
            "POST",
            "/api/branches/",
            Some(&token),
            &json!({"branch_name": "Main", "location_name": location_id}),
        ),
    )
    .await;
    let branch_id = branch["id"].as_str().expect("id").to_string();

    let employee = json!({
        "name": "Jane Doe",
        "emp_id": "E100",
        "email": "jane@example.com",
        "designation": designation_id,
        "department": department_id,
        "location": location_id,
        "branch": branch_id,
    });

    let (status, created) = send(
        &app,
        send_json("POST", "/api/employees/", Some(&token), &employee),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["email"], "jane@example.com");
    assert_eq!(created["emp_status"], true);

    // Duplicate email is rejected with 400
    let mut duplicate = employee.clone();
    duplicate["emp_id"] = json!("E101");
    let (status, body) = send(
        &app,
        send_json("POST", "/api/employees/", Some(&token), &duplicate),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Employee with this email already exists.");

    // Malformed reference ids are rejected before any write
    let mut malformed = employee.clone();
    malformed["emp_id"] = json!("E102");
    malformed["email"] = json!("other@example.com");
    malformed["designation"] = json!("garbage");
    let (status, body) = send(
        &app,
        send_json("POST", "/api/employees/", Some(&token), &malformed),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "One or more IDs are invalid.");
}
