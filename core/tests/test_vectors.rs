//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences; form-encoded bodies are
//! compared verbatim since their encoding is part of the contract.

use graph_core::{
    ApiError, Comment, GraphClient, HttpMethod, HttpRequest, HttpResponse, Paging, Reference,
};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> GraphClient {
    GraphClient::new(BASE_URL, "someAccessToken")
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        other => panic!("unknown method: {other}"),
    }
}

fn assert_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(
        req.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let pair = h.as_array().unwrap();
            (
                pair[0].as_str().unwrap().to_string(),
                pair[1].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match expected.get("body").and_then(|b| b.as_str()) {
        Some(body) => assert_eq!(req.body.as_deref(), Some(body), "{name}: body"),
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

fn assert_expected_error(name: &str, expected: &serde_json::Value, err: ApiError) {
    match expected.as_str().unwrap() {
        "NotAuthorized" => assert!(
            matches!(err, ApiError::NotAuthorized),
            "{name}: expected NotAuthorized, got {err:?}"
        ),
        other => panic!("{name}: unknown expected_error: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Comment list
// ---------------------------------------------------------------------------

#[test]
fn comments_test_vectors() {
    let raw = include_str!("../../test-vectors/comments.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let object_id = case["object_id"].as_str().unwrap();

        let req = match case.get("paging") {
            Some(p) => {
                let paging = Paging {
                    offset: p["offset"].as_u64().unwrap() as u32,
                    limit: p["limit"].as_u64().unwrap() as u32,
                };
                c.build_get_comments_with(object_id, paging)
            }
            None => c.build_get_comments(object_id),
        }
        .unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_comments(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, expected_error, result.unwrap_err());
        } else {
            let comments = result.unwrap();
            let expected: Vec<Comment> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(comments, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Single comment
// ---------------------------------------------------------------------------

#[test]
fn comment_test_vectors() {
    let raw = include_str!("../../test-vectors/comment.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let comment_id = case["comment_id"].as_str().unwrap();

        let req = c.build_get_comment(comment_id).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_get_comment(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, expected_error, result.unwrap_err());
        } else {
            let comment = result.unwrap();
            let expected: Comment =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(comment, expected, "{name}: parsed result");
        }
    }
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[test]
fn add_comment_test_vectors() {
    let raw = include_str!("../../test-vectors/add_comment.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let object_id = case["object_id"].as_str().unwrap();
        let message = case["message"].as_str().unwrap();

        let req = c.build_add_comment(object_id, message).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_add_comment(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, expected_error, result.unwrap_err());
        } else {
            let id = result.unwrap();
            assert_eq!(id, case["expected_result"].as_str().unwrap(), "{name}: id");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_comment_test_vectors() {
    let raw = include_str!("../../test-vectors/delete_comment.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let comment_id = case["comment_id"].as_str().unwrap();

        let req = c.build_delete_comment(comment_id).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_delete_comment(simulated_response(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_expected_error(name, expected_error, result.unwrap_err());
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

#[test]
fn likes_test_vectors() {
    let raw = include_str!("../../test-vectors/likes.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let object_id = case["object_id"].as_str().unwrap();

        let req = c.build_get_likes(object_id).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let likes = c.parse_get_likes(simulated_response(case)).unwrap();
        let expected: Vec<Reference> =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(likes, expected, "{name}: parsed result");
    }
}
