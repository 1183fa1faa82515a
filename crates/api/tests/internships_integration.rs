//! Integration tests for company and internship endpoints.
//!
//! Requires PostgreSQL. Set TEST_DATABASE_URL or use the local default.
//!
//! Run with: cargo test --test internships_integration

mod common;

use axum::http::{Method, StatusCode};
use common::{
    company_body, create_company, create_internship, create_student, delete_request,
    get_request, json_request, send, setup, unique_tax_id,
};
use serde_json::json;

// ============================================================================
// Companies
// ============================================================================

#[tokio::test]
async fn test_company_stores_digits_and_renders_masks() {
    let (pool, app) = setup().await;
    let tax_id = unique_tax_id();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/companies",
            json!({
                "name": "Acme Engenharia",
                "tax_id": tax_id,
                "phone": "(11) 98765-4321"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(body["phone"], "(11) 98765-4321");
    assert_eq!(
        body["tax_id"],
        format!(
            "{}.{}.{}/{}-{}",
            &tax_id[0..2],
            &tax_id[2..5],
            &tax_id[5..8],
            &tax_id[8..12],
            &tax_id[12..14]
        )
    );

    let (stored_tax_id, stored_phone): (Option<String>, Option<String>) =
        sqlx::query_as("SELECT tax_id, phone FROM companies WHERE id = $1")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored_tax_id.as_deref(), Some(tax_id.as_str()));
    assert_eq!(stored_phone.as_deref(), Some("11987654321"));
}

#[tokio::test]
async fn test_duplicate_tax_id_conflicts() {
    let (_pool, app) = setup().await;
    let body = company_body();

    let (status, _) = send(&app, json_request(Method::POST, "/api/v1/companies", body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, json_request(Method::POST, "/api/v1/companies", body)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_company_invalid_phone() {
    let (_pool, app) = setup().await;
    let mut body = company_body();
    body["phone"] = json!("1234");

    let (status, body) = send(&app, json_request(Method::POST, "/api/v1/companies", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "phone: Phone must contain 10 or 11 digits");
}

#[tokio::test]
async fn test_update_and_delete_company() {
    let (_pool, app) = setup().await;
    let id = create_company(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/v1/companies/{id}"),
            json!({ "name": "Renamed Ltda", "address": "Rua A, 100" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Renamed Ltda");
    assert_eq!(body["address"], "Rua A, 100");
    assert!(body["tax_id"].is_null());

    let (status, _) = send(&app, delete_request(&format!("/api/v1/companies/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, get_request(&format!("/api/v1/companies/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_company_with_internships_conflicts() {
    let (_pool, app) = setup().await;
    let student_id = create_student(&app).await;
    let company_id = create_company(&app).await;
    create_internship(&app, student_id, company_id).await;

    let (status, body) = send(&app, delete_request(&format!("/api/v1/companies/{company_id}"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Company has 1 internship(s) and cannot be deleted");
}

// ============================================================================
// Internships
// ============================================================================

#[tokio::test]
async fn test_create_internship_defaults() {
    let (_pool, app) = setup().await;
    let student_id = create_student(&app).await;
    let company_id = create_company(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/internships",
            json!({
                "student_id": student_id,
                "company_id": company_id,
                "start_date": "2025-03-01",
                "required_hours": 200
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "in_progress");
    assert_eq!(body["completed_hours"], 0);
    assert_eq!(body["progress_percent"], 0);
    assert_eq!(body["stipend"].as_f64().unwrap(), 0.0);
    assert_eq!(body["notes"], "");
    assert!(body["end_date"].is_null());
}

#[tokio::test]
async fn test_internship_detail_embeds_company() {
    let (_pool, app) = setup().await;
    let student_id = create_student(&app).await;
    let company_id = create_company(&app).await;
    let id = create_internship(&app, student_id, company_id).await;

    let (_, company) = send(&app, get_request(&format!("/api/v1/companies/{company_id}"))).await;
    let (_, student) = send(&app, get_request(&format!("/api/v1/students/{student_id}"))).await;

    let (status, body) = send(&app, get_request(&format!("/api/v1/internships/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["student_name"], student["name"]);
    assert_eq!(body["company"]["name"], company["name"]);
    assert_eq!(body["company"]["tax_id"], company["tax_id"]);
    assert_eq!(body["company"]["phone"], "(11) 3456-7890");
    assert_eq!(body["company"]["email"], "estagios@example.com");
    assert!(body["company"].get("address").is_none());
}

#[tokio::test]
async fn test_create_internship_hours_exceed_required() {
    let (_pool, app) = setup().await;
    let student_id = create_student(&app).await;
    let company_id = create_company(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/internships",
            json!({
                "student_id": student_id,
                "company_id": company_id,
                "start_date": "2025-03-01",
                "required_hours": 100,
                "completed_hours": 120
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Completed hours cannot exceed required hours");
}

#[tokio::test]
async fn test_update_hours_reports_progress() {
    let (_pool, app) = setup().await;
    let student_id = create_student(&app).await;
    let company_id = create_company(&app).await;
    let id = create_internship(&app, student_id, company_id).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/api/v1/internships/{id}/hours"),
            json!({ "hours": 150 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["completed_hours"], 150);
    assert_eq!(body["progress_percent"], 50);
    assert_eq!(body["status"], "in_progress");
}

#[tokio::test]
async fn test_update_hours_beyond_required() {
    let (_pool, app) = setup().await;
    let student_id = create_student(&app).await;
    let company_id = create_company(&app).await;
    let id = create_internship(&app, student_id, company_id).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            &format!("/api/v1/internships/{id}/hours"),
            json!({ "hours": 301 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Completed hours cannot exceed required hours");
}

#[tokio::test]
async fn test_update_hours_missing_internship() {
    let (_pool, app) = setup().await;

    let (status, _) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/v1/internships/999999999/hours",
            json!({ "hours": 1 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_finish_internship() {
    let (_pool, app) = setup().await;
    let student_id = create_student(&app).await;
    let company_id = create_company(&app).await;
    let id = create_internship(&app, student_id, company_id).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            &format!("/api/v1/internships/{id}/finish"),
            json!({}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "completed");
    let end_date = body["end_date"].as_str().unwrap();
    assert!(end_date > "2025-03-01");
}

#[tokio::test]
async fn test_finish_internship_not_started() {
    let (_pool, app) = setup().await;
    let student_id = create_student(&app).await;
    let company_id = create_company(&app).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/internships",
            json!({
                "student_id": student_id,
                "company_id": company_id,
                "start_date": "2099-01-01",
                "required_hours": 120
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            &format!("/api/v1/internships/{id}/finish"),
            json!({}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Internship has not started yet");

    let (_, body) = send(&app, get_request(&format!("/api/v1/internships/{id}"))).await;
    assert_eq!(body["status"], "in_progress");
    assert!(body["end_date"].is_null());
}

#[tokio::test]
async fn test_finish_missing_internship() {
    let (_pool, app) = setup().await;

    let (status, _) = send(
        &app,
        json_request(Method::POST, "/api/v1/internships/999999999/finish", json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_internships_filters_by_status() {
    let (_pool, app) = setup().await;
    let student_id = create_student(&app).await;
    let company_id = create_company(&app).await;
    let finished = create_internship(&app, student_id, company_id).await;
    let ongoing = create_internship(&app, student_id, company_id).await;

    send(
        &app,
        json_request(
            Method::POST,
            &format!("/api/v1/internships/{finished}/finish"),
            json!({}),
        ),
    )
    .await;

    let (status, body) = send(&app, get_request("/api/v1/internships?status=completed")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body["internships"].as_array().unwrap();
    assert!(listed.iter().all(|i| i["status"] == "completed"));
    assert!(listed.iter().any(|i| i["id"] == finished));
    assert!(!listed.iter().any(|i| i["id"] == ongoing));

    let (status, body) = send(&app, get_request("/api/v1/internships")).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body["internships"].as_array().unwrap();
    assert!(listed.iter().any(|i| i["id"] == finished));
    assert!(listed.iter().any(|i| i["id"] == ongoing));
}

#[tokio::test]
async fn test_list_internships_unknown_status() {
    let (_pool, app) = setup().await;

    let (status, _) = send(&app, get_request("/api/v1/internships?status=paused")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_delete_internship() {
    let (_pool, app) = setup().await;
    let student_id = create_student(&app).await;
    let company_id = create_company(&app).await;
    let id = create_internship(&app, student_id, company_id).await;

    let (status, body) = send(
        &app,
        json_request(
            Method::PUT,
            &format!("/api/v1/internships/{id}"),
            json!({
                "company_id": company_id,
                "start_date": "2025-03-01",
                "end_date": "2025-09-30",
                "required_hours": 300,
                "completed_hours": 300,
                "status": "completed",
                "stipend": 1800,
                "notes": "Excellent evaluation"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["progress_percent"], 100);
    assert_eq!(body["end_date"], "2025-09-30");
    assert_eq!(body["notes"], "Excellent evaluation");
    assert_eq!(body["student_id"], student_id);

    let (status, _) = send(&app, delete_request(&format!("/api/v1/internships/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, get_request(&format!("/api/v1/internships/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
