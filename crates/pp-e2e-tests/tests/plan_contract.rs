//! E2E tests for the schema contract: validator boundary, wire round trip,
//! and reproducibility of the rule-based path.

mod helpers;

use serde_json::json;

use helpers::today;
use pp_classifier::validate::{admit_value, validate_value};
use pp_classifier::{PlanAssembler, segment};
use pp_protocol::{ActionPlan, Category, VALIDATION_FAILED};

#[test]
fn e2e_injected_unknown_category_yields_empty_plan() {
    let candidate = json!({
        "actions": [
            {"type": "create_record", "category": "task", "title": "buy milk"},
            {"type": "create_record", "category": "wishlist", "title": "a boat"}
        ],
        "confidence": 0.9,
        "rationale": "two"
    });
    let plan = admit_value(candidate);
    assert!(plan.is_empty());
    assert_eq!(plan.confidence, 0.0);
    assert_eq!(plan.rationale.as_deref(), Some(VALIDATION_FAILED));
}

#[test]
fn e2e_injected_unknown_tag_yields_empty_plan() {
    let plan = admit_value(json!({
        "actions": [{"type": "delete_everything"}],
        "confidence": 0.99
    }));
    assert!(plan.is_empty());
    assert_eq!(plan.rationale.as_deref(), Some(VALIDATION_FAILED));
}

#[test]
fn e2e_wire_shape_of_create_record() {
    let plan = validate_value(json!({
        "actions": [{
            "type": "create_record",
            "category": "todo",
            "title": "renew passport",
            "priority": "medium",
            "schedule": {"date": "2025-07-01", "time": "09:05:30", "recurrence": "monthly"}
        }],
        "confidence": 0.7
    }))
    .unwrap();
    assert_eq!(plan.actions[0].category(), Some(Category::Task));

    let encoded = serde_json::to_value(&plan).unwrap();
    assert_eq!(encoded["actions"][0]["category"], "task");
    assert_eq!(encoded["actions"][0]["schedule"]["time"], "09:05");
    assert_eq!(encoded["actions"][0]["schedule"]["date"], "2025-07-01");
    assert!(encoded.get("rationale").is_none());

    let decoded: ActionPlan = serde_json::from_value(encoded).unwrap();
    assert_eq!(decoded, plan);
}

#[tokio::test]
async fn e2e_classified_plan_round_trips() {
    let plan = PlanAssembler::deterministic()
        .classify_on(
            "remind me to pay rent on 7/1 at 9am, important; book a table for friday",
            today(),
        )
        .await;
    assert_eq!(plan.len(), 2);

    let encoded = serde_json::to_string(&plan).unwrap();
    let decoded: ActionPlan = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, plan);

    // The decoded plan passes the same gate as generative candidates.
    let revalidated = validate_value(serde_json::from_str(&encoded).unwrap()).unwrap();
    assert_eq!(revalidated, plan);
}

#[tokio::test]
async fn e2e_rules_are_deterministic() {
    let assembler = PlanAssembler::deterministic();
    let inputs = [
        "buy milk and call the dentist",
        "create a goal to learn piano; show my habits",
        "schedule a haircut next friday at 4:30pm",
        "what now",
    ];
    for input in inputs {
        let first = assembler.classify_on(input, today()).await;
        let second = assembler.classify_on(input, today()).await;
        assert_eq!(first, second, "{input:?} should classify identically");
    }
}

#[test]
fn e2e_segment_without_separators_is_identity() {
    for input in ["buy milk", "remind me to submit the report tomorrow", "x"] {
        assert_eq!(segment(input), vec![input]);
    }
}
