//! Trainer API Tests
//!
//! The list / setup / test operations and their JSON shapes.

use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use weightlab::trainer::{TestRequest, Trainer};
use weightlab::{Language, WeightlabError};

fn trainer() -> Trainer<'static> {
    Trainer::builtin(Language::En).unwrap()
}

// === Listing ===

#[test]
fn test_list_levels_order_and_fields() {
    let levels = trainer().list_levels();
    let ids: Vec<u32> = levels.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let value = serde_json::to_value(&levels[0]).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 1,
            "title": "Level 1: Beginner",
            "description": "Two simple factors",
            "productName": "New video game",
            "inputLabels": ["Enough money?", "Parents allowed it?"]
        })
    );
}

#[test]
fn test_list_levels_is_stable() {
    assert_eq!(trainer().list_levels(), trainer().list_levels());
}

// === Setup ===

#[test]
fn test_setup_weight_length_follows_formula() {
    let t = trainer();
    assert_eq!(t.training_setup(1).unwrap().weights, vec![0.0; 2]);
    assert_eq!(t.training_setup(2).unwrap().weights, vec![0.0; 3]);
    assert_eq!(t.training_setup(3).unwrap().weights, vec![0.0; 2]);
}

#[test]
fn test_setup_json_shape() {
    let setup = trainer().training_setup(3).unwrap();
    let value = serde_json::to_value(&setup).unwrap();

    assert_eq!(value["level"]["threshold"], json!(1.0));
    assert_eq!(value["level"]["formula"], json!("nonlinear_logic"));
    assert!(value["level"].get("canonicalWeights").is_none());
    assert_eq!(value["level"]["weightCount"], 2);
    assert_eq!(value["level"]["hasBias"], json!(false));
    assert_eq!(value["trainingExamples"].as_array().unwrap().len(), 16);
    assert_eq!(
        value["trainingExamples"][1],
        json!({ "inputs": [1, 0, 0, 0], "expectedOutput": 1 })
    );
}

#[test]
fn test_setup_unknown_level() {
    let err = trainer().training_setup(0).unwrap_err();
    assert!(matches!(err, WeightlabError::LevelNotFound { level: 0 }));
}

// === Test submission ===

#[test]
fn test_submit_canonical_weights() {
    let response = trainer().submit_test(1, &[2.0, 1.0]).unwrap();

    assert!(response.is_correct);
    assert_eq!(response.correct_count, 4);
    assert_eq!(response.total_count, 4);
    assert_eq!(
        response.message,
        "Congratulations! You configured the neural network correctly! 🎉"
    );
}

#[test]
fn test_submit_response_json_shape() {
    let response = trainer().submit_test(1, &[0.0, 0.0]).unwrap();
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["isCorrect"], json!(false));
    assert_eq!(value["correctCount"], json!(3));
    assert_eq!(value["totalCount"], json!(4));
    assert_eq!(
        value["message"],
        json!("Correct answers: 3 of 4. Try changing the weights!")
    );
    assert_eq!(
        value["results"][2],
        json!({ "inputs": [0, 1], "expectedOutput": 0, "actualOutput": 1, "sum": 0.0 })
    );
}

#[test]
fn test_submit_request_round_trip() {
    let body = r#"{"level": 3, "weights": [1.0, -0.5]}"#;
    let request: TestRequest = serde_json::from_str(body).unwrap();
    assert_eq!(request.weights, vec![1.0, -0.5]);

    let t = trainer();
    assert_eq!(t.submit_json(body).unwrap(), t.submit_request(&request).unwrap());
}

#[test]
fn test_submit_wrong_weight_count() {
    let t = trainer();
    let err = t.submit_test(2, &[1.0, 1.0]).unwrap_err();

    let response = t.error_response(&err);
    assert_eq!(response.status, 400);
    assert_eq!(response.code, "INVALID_WEIGHT_COUNT");
    assert_eq!(response.message, "incorrect number of weights");
}

#[test]
fn test_submit_unknown_level() {
    let t = trainer();
    let err = t.submit_json(r#"{"level": 4, "weights": [1, 1]}"#).unwrap_err();

    let value: Value = serde_json::to_value(t.error_response(&err)).unwrap();
    assert_eq!(
        value,
        json!({ "code": "LEVEL_NOT_FOUND", "status": 400, "message": "invalid level" })
    );
}

#[test]
fn test_submit_missing_weights_field() {
    let err = trainer().submit_json(r#"{"level": 1}"#).unwrap_err();
    assert!(matches!(
        err,
        WeightlabError::InvalidWeightCount { expected: 2, actual: 0, .. }
    ));
}

#[test]
fn test_russian_messages() {
    let t = Trainer::builtin(Language::Ru).unwrap();
    let response = t.submit_test(2, &[1.0, 1.0, 1.0]).unwrap();
    assert_eq!(
        response.message,
        "Поздравляем! Вы правильно настроили нейросеть! 🎉"
    );
}

#[test]
fn test_catalog_shared_across_threads() {
    let handles: Vec<_> = (1..=3)
        .map(|level| {
            std::thread::spawn(move || {
                let t = Trainer::builtin(Language::En).unwrap();
                let weights = t.catalog().get(level).unwrap().canonical_weights.clone();
                t.submit_test(level, &weights).unwrap().is_correct
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
