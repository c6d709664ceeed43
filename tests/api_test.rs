use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use interview_dashboard_backend::{app_router, storage::local_map::LocalMap, AppState};

async fn stub_login(Json(body): Json<JsonValue>) -> axum::response::Response {
    let username = body["username"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default();
    if password == "wrong" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Invalid credentials"})),
        )
            .into_response();
    }
    Json(json!({
        "id": 7,
        "username": username,
        "email": format!("{}@dashboard.test", username),
        "firstName": "Emily",
        "lastName": "Johnson",
        "gender": "female",
        "image": "/avatars/emily.png",
        "token": format!("token-{}", username),
    }))
    .into_response()
}

async fn stub_users() -> Json<JsonValue> {
    Json(json!({
        "users": [
            {
                "id": 1,
                "firstName": "Terry",
                "lastName": "Medhurst",
                "email": "terry@directory.test",
                "phone": "+63 791 675 8914",
                "image": "/avatars/terry.png",
                "company": {"department": "Marketing", "name": "Blanda-O'Keefe", "title": "Help Desk Operator"}
            },
            {
                "id": 2,
                "firstName": "Sheldon",
                "lastName": "Quigley",
                "email": "sheldon@directory.test",
                "phone": "+7 813 117 7139",
                "image": "/avatars/sheldon.png",
                "company": {"department": "Services", "name": "Aufderhar-Cronin", "title": "Senior Cost Accountant"}
            }
        ],
        "total": 2,
        "skip": 0,
        "limit": 30
    }))
}

async fn spawn_identity_stub() -> String {
    let stub = Router::new()
        .route("/auth/login", post(stub_login))
        .route("/users", get(stub_users));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, stub).await.expect("serve stub");
    });
    format!("http://{}", addr)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("encode body")))
            .expect("build request"),
        None => builder.body(Body::empty()).expect("build request"),
    };
    let response = app.clone().oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let value = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).expect("decode body")
    };
    (status, value)
}

#[tokio::test]
async fn dashboard_flow_end_to_end() {
    let stub_url = spawn_identity_stub().await;

    let data_dir = tempfile::tempdir().expect("data dir");
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("DATA_DIR", data_dir.path().to_str().unwrap());
    env::set_var("AUTH_API_URL", &stub_url);
    interview_dashboard_backend::config::init_config().expect("init config");

    let map = LocalMap::open(data_dir.path()).expect("open map");
    let app = app_router(AppState::new(map));

    // health is open
    let (status, _) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);

    // everything else wants a session
    let (status, body) = send(&app, "GET", "/api/candidates", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "missing_authorization");

    // sign in as a TA member; the role comes from the form, not the provider
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"username": "emily", "password": "emilyspass", "role": "ta_member"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], "ta_member");
    assert_eq!(body["firstName"], "Emily");
    let staff_token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, "GET", "/api/auth/session", Some(&staff_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "emily");

    // create a candidate, default status scheduled
    let (status, body) = send(
        &app,
        "POST",
        "/api/candidates",
        Some(&staff_token),
        Some(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@x.com",
            "phone": "+44 20 7946 0958",
            "company": {"department": "Engineering", "name": "Analytical Engines", "title": "Staff Engineer"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1001);
    assert_eq!(body["status"], "scheduled");
    assert_eq!(body["image"], "/placeholder.svg");

    // partial update leaves everything unsupplied alone
    let (status, body) = send(
        &app,
        "PATCH",
        "/api/candidates/1001",
        Some(&staff_token),
        Some(json!({"phone": "+44 20 7000 0000"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phone"], "+44 20 7000 0000");
    assert_eq!(body["email"], "ada@x.com");

    // first listing bootstraps the default interview
    let (status, body) = send(
        &app,
        "GET",
        "/api/candidates/1001/interviews",
        Some(&staff_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 1);
    assert_eq!(body["items"][0]["description"], "Scheduled Interview");
    let first_interview = body["items"][0]["id"].as_i64().unwrap();
    assert_eq!(first_interview, 3001);

    let (status, body) = send(
        &app,
        "POST",
        "/api/candidates/1001/interviews",
        Some(&staff_token),
        Some(json!({"description": "Panel interview"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let second_interview = body["id"].as_i64().unwrap();
    assert_eq!(second_interview, 3002);

    // one of two completed keeps the candidate scheduled
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/candidates/1001/interviews/{}", first_interview),
        Some(&staff_token),
        Some(json!({"completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/api/candidates/1001", Some(&staff_token), None).await;
    assert_eq!(body["status"], "scheduled");

    // both completed flips the candidate over
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/candidates/1001/interviews/{}", second_interview),
        Some(&staff_token),
        Some(json!({"completed": true})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, body) = send(&app, "GET", "/api/candidates/1001", Some(&staff_token), None).await;
    assert_eq!(body["status"], "completed");

    // an interview id under the wrong candidate is not-found
    let (status, _) = send(
        &app,
        "PATCH",
        &format!("/api/candidates/42/interviews/{}", second_interview),
        Some(&staff_token),
        Some(json!({"completed": false})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // feedback is panelist-only
    let (status, body) = send(
        &app,
        "POST",
        "/api/candidates/1001/feedback",
        Some(&staff_token),
        Some(json!({
            "overallScore": 5,
            "strengths": "Excellent grasp of distributed systems",
            "improvements": "Could delegate more during pairing"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "forbidden");

    // bad credentials fail uniformly and leave the session alone
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"username": "emily", "password": "wrong", "role": "admin"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
    let (status, _) = send(&app, "GET", "/api/auth/session", Some(&staff_token), None).await;
    assert_eq!(status, StatusCode::OK);

    // a panelist signs in; the superseded token stops working
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"username": "jordan", "password": "jordanspass", "role": "panelist"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let panelist_token = body["token"].as_str().unwrap().to_string();
    let (status, body) = send(&app, "GET", "/api/candidates", Some(&staff_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "invalid_token");

    // narrative fields need substance
    let (status, _) = send(
        &app,
        "POST",
        "/api/candidates/1001/feedback",
        Some(&panelist_token),
        Some(json!({"overallScore": 5, "strengths": "ok", "improvements": "fine"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/api/candidates/1001/feedback",
        Some(&panelist_token),
        Some(json!({
            "overallScore": 5,
            "strengths": "Excellent grasp of distributed systems",
            "improvements": "Could delegate more during <b>pairing</b>",
            "comments": "Would hire again"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "Score 5 / 5");
    assert_eq!(body["views"], 0);
    assert_eq!(body["submittedBy"], 7);
    let feedback_body = body["body"].as_str().unwrap();
    assert!(feedback_body.contains("Strengths: Excellent grasp of distributed systems"));
    assert!(feedback_body.contains("Improvements: Could delegate more during bpairing/b"));
    assert!(feedback_body.contains("Comments: Would hire again"));

    // opening the tab bumps every record for the candidate
    let (status, _) = send(
        &app,
        "POST",
        "/api/candidates/1001/feedback/views",
        Some(&panelist_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = send(
        &app,
        "GET",
        "/api/candidates/1001/feedback",
        Some(&panelist_token),
        None,
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["views"], 1);

    let (status, body) = send(
        &app,
        "GET",
        "/api/dashboard/stats",
        Some(&panelist_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalCandidates"], 1);
    assert_eq!(body["completed"], 1);
    assert_eq!(body["interviewsTotal"], 2);
    assert_eq!(body["interviewsCompleted"], 2);
    assert_eq!(body["feedbackTotal"], 1);
    assert_eq!(body["averageFeedbackScore"], 5.0);

    // seeding the demo data is an admin affair
    let (status, _) = send(
        &app,
        "POST",
        "/api/candidates/seed-demo",
        Some(&panelist_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({"username": "nathan", "password": "nathanspass", "role": "admin"})),
    )
    .await;
    let admin_token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        "/api/candidates/seed-demo",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seeded"], 2);

    let (_, body) = send(&app, "GET", "/api/candidates", Some(&admin_token), None).await;
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["firstName"], "Terry");
    assert_eq!(listed[0]["status"], "scheduled");

    // the id counter never rewinds below what it has handed out
    let (status, body) = send(
        &app,
        "POST",
        "/api/candidates",
        Some(&admin_token),
        Some(json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@x.com",
            "phone": "+1 555 0199",
            "company": {"department": "Engineering", "name": "Eckert-Mauchly", "title": "Principal Engineer"}
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1002);

    let (status, body) = send(&app, "GET", "/api/roles", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["role"], "admin");

    let (status, _) = send(
        &app,
        "DELETE",
        "/api/candidates/1002",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(
        &app,
        "DELETE",
        "/api/candidates/1002",
        Some(&admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // logout clears the persisted session
    let (status, _) = send(&app, "POST", "/api/auth/logout", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, "GET", "/api/auth/session", Some(&admin_token), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
