//! Verify validators, the combiner and response parsing against JSON test
//! vectors stored in `test-vectors/`.
//!
//! Results are compared as parsed JSON, not raw strings, so field ordering
//! in the vector files does not matter.

use apod_core::http::parse_json;
use apod_core::{combine, is_valid_apod, is_valid_search, ApiError, HttpResponse};
use serde_json::Value;

fn load(raw: &str) -> Vec<Value> {
    let vectors: Value = serde_json::from_str(raw).unwrap();
    vectors["cases"].as_array().unwrap().clone()
}

// ---------------------------------------------------------------------------
// Validators
// ---------------------------------------------------------------------------

#[test]
fn apod_validation_vectors() {
    for case in load(include_str!("../../test-vectors/apod_validation.json")) {
        let name = case["name"].as_str().unwrap();
        let expected = case["expected"].as_bool().unwrap();
        assert_eq!(is_valid_apod(&case["input"]), expected, "{name}");
    }
}

#[test]
fn search_validation_vectors() {
    for case in load(include_str!("../../test-vectors/search_validation.json")) {
        let name = case["name"].as_str().unwrap();
        let expected = case["expected"].as_bool().unwrap();
        assert_eq!(is_valid_search(&case["input"]), expected, "{name}");
    }
}

// ---------------------------------------------------------------------------
// Combine
// ---------------------------------------------------------------------------

#[test]
fn combine_vectors() {
    for case in load(include_str!("../../test-vectors/combine.json")) {
        let name = case["name"].as_str().unwrap();
        let valid = case["search_is_valid"].as_bool().unwrap();
        let record = combine(case["apod"].clone(), &case["search"], valid);
        assert_eq!(serde_json::to_value(&record).unwrap(), case["expected"], "{name}");
    }
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

#[test]
fn http_call_vectors() {
    for case in load(include_str!("../../test-vectors/http_call.json")) {
        let name = case["name"].as_str().unwrap();
        let url = case["url"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            body: sim["body"].as_str().unwrap().to_string(),
        };
        let result = parse_json(&response, url);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "Http" => assert!(matches!(err, ApiError::Http { .. }), "{name}: expected Http"),
                "Deserialization" => assert!(
                    matches!(err, ApiError::Deserialization(_)),
                    "{name}: expected Deserialization"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
            let message = err.to_string();
            for needle in case["expected_message_contains"].as_array().unwrap() {
                let needle = needle.as_str().unwrap();
                assert!(message.contains(needle), "{name}: {message:?} lacks {needle:?}");
            }
        } else {
            assert_eq!(result.unwrap(), case["expected_result"], "{name}: parsed result");
        }
    }
}
