//! API Versioning Tests
//!
//! Version 2.0 shares every endpoint with 1.0; only the course listing
//! differs, by a name suffix applied to the representation.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{app, course_names, get, send};

#[tokio::test]
async fn test_default_version_is_v1() {
    let app = app();
    let response = get(&app, "/courses").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        course_names(&response.body),
        vec!["Computer Science", "Information Technology"]
    );
}

#[tokio::test]
async fn test_explicit_v1_matches_default() {
    let app = app();
    let default = get(&app, "/courses").await;
    let explicit = get(&app, "/courses?api-version=1.0").await;

    assert_eq!(default.body, explicit.body);
}

#[tokio::test]
async fn test_v2_list_appends_suffix_via_query() {
    let app = app();
    let response = get(&app, "/courses?api-version=2.0").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        course_names(&response.body),
        vec![
            "Computer Science (v2.0)",
            "Information Technology (v2.0)"
        ]
    );
}

#[tokio::test]
async fn test_v2_list_appends_suffix_via_header() {
    let app = app();
    let response = send(&app, Method::GET, "/courses", None, &[("x-api-version", "2")]).await;

    assert_eq!(
        course_names(&response.body),
        vec![
            "Computer Science (v2.0)",
            "Information Technology (v2.0)"
        ]
    );
}

/// v2 changes the representation only; same ids and fields otherwise.
#[tokio::test]
async fn test_v2_list_has_no_data_divergence() {
    let app = app();
    let v1 = get(&app, "/courses").await.body;
    let v2 = get(&app, "/courses?api-version=2.0").await.body;

    let v1 = v1.as_array().unwrap();
    let v2 = v2.as_array().unwrap();
    assert_eq!(v1.len(), v2.len());

    for (a, b) in v1.iter().zip(v2) {
        assert_eq!(a["courseId"], b["courseId"]);
        assert_eq!(a["courseDuration"], b["courseDuration"]);
        assert_eq!(a["courseType"], b["courseType"]);
        assert_eq!(
            format!("{} (v2.0)", a["courseName"].as_str().unwrap()),
            b["courseName"].as_str().unwrap()
        );
    }

    // stored names untouched after a v2 listing
    let again = get(&app, "/courses").await;
    assert_eq!(
        course_names(&again.body),
        vec!["Computer Science", "Information Technology"]
    );
}

#[tokio::test]
async fn test_v2_single_course_is_unsuffixed() {
    let app = app();
    let response = get(&app, "/courses/1?api-version=2.0").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["courseName"], "Computer Science");
}

#[tokio::test]
async fn test_v2_create_behaves_like_v1() {
    let app = app();
    let response = send(
        &app,
        Method::POST,
        "/courses?api-version=2.0",
        Some(json!({"courseName": "Physics", "courseDuration": 3, "courseType": "SCIENCE"})),
        &[],
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["courseId"], 3);
    assert_eq!(response.body["courseName"], "Physics");
}

#[tokio::test]
async fn test_unsupported_version_is_rejected() {
    let app = app();
    let response = get(&app, "/courses?api-version=3.0").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body,
        json!({"error": "Unsupported API version: 3.0", "code": 400})
    );
}

#[tokio::test]
async fn test_supported_versions_are_advertised() {
    let app = app();

    let ok = get(&app, "/courses").await;
    assert_eq!(ok.headers["api-supported-versions"], "1.0, 2.0");

    let rejected = get(&app, "/courses?api-version=9").await;
    assert_eq!(rejected.headers["api-supported-versions"], "1.0, 2.0");
}
