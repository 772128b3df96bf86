//! E2E tests for the rule-based path: segmentation, categories, modifiers,
//! and confidence aggregation through the public `PlanAssembler` API.

mod helpers;

use chrono::NaiveTime;

use helpers::{date, today};
use pp_classifier::PlanAssembler;
use pp_protocol::{Action, Category, EMPTY_INSTRUCTION, Priority, Recurrence, ScheduleHint};

fn fields(action: &Action) -> (Category, &str, Option<Priority>, Option<&ScheduleHint>) {
    match action {
        Action::CreateRecord {
            category,
            title,
            priority,
            schedule,
            ..
        } => (*category, title.as_str(), *priority, schedule.as_ref()),
        other => panic!("expected create_record, got {other:?}"),
    }
}

#[tokio::test]
async fn e2e_empty_and_whitespace_input() {
    let assembler = PlanAssembler::deterministic();
    for input in ["", " ", "\n\n", "\t  \n"] {
        let plan = assembler.classify_on(input, today()).await;
        assert!(plan.is_empty(), "{input:?} should yield no actions");
        assert_eq!(plan.confidence, 0.0);
        assert_eq!(plan.rationale.as_deref(), Some(EMPTY_INSTRUCTION));
    }
}

#[tokio::test]
async fn e2e_milk_and_eggs_stays_one_task() {
    let plan = PlanAssembler::deterministic()
        .classify_on("buy milk and eggs", today())
        .await;
    assert_eq!(plan.len(), 1);
    let (category, title, _, _) = fields(&plan.actions[0]);
    assert_eq!(category, Category::Task);
    assert!(title.contains("milk and eggs"));
}

#[tokio::test]
async fn e2e_verb_led_conjunction_splits() {
    let plan = PlanAssembler::deterministic()
        .classify_on("buy milk and call the dentist", today())
        .await;
    assert_eq!(plan.len(), 2);
    let titles: Vec<_> = plan.actions.iter().filter_map(Action::title).collect();
    assert_eq!(titles, vec!["buy milk", "call the dentist"]);
    assert!(
        plan.actions
            .iter()
            .all(|a| a.category() == Some(Category::Task))
    );
}

#[tokio::test]
async fn e2e_reminder_tomorrow_urgent() {
    let plan = PlanAssembler::deterministic()
        .classify_on("remind me to submit the report tomorrow, urgent", today())
        .await;
    assert_eq!(plan.len(), 1);
    let (category, title, priority, schedule) = fields(&plan.actions[0]);
    assert_eq!(category, Category::Task);
    assert_eq!(priority, Some(Priority::Urgent));
    assert_eq!(schedule.unwrap().date, date(2025, 6, 5));
    assert!(!title.contains("tomorrow"));
    assert!(!title.contains("urgent"));
}

#[tokio::test]
async fn e2e_goal_title() {
    let plan = PlanAssembler::deterministic()
        .classify_on("create a goal to learn piano", today())
        .await;
    let (category, title, _, _) = fields(&plan.actions[0]);
    assert_eq!(category, Category::Goal);
    assert_eq!(title, "learn piano");
}

#[tokio::test]
async fn e2e_each_category_reachable() {
    let cases = [
        ("add a task to renew passport", Category::Task),
        ("set a goal to read 12 books", Category::Goal),
        ("start a habit of flossing", Category::Habit),
        ("log lunch: salad and soup", Category::Meal),
        ("journal about the hike", Category::Journal),
        ("add an event: dinner with Ana on 7/12", Category::Event),
        ("jot down the gate code 4471", Category::Note),
    ];
    let assembler = PlanAssembler::deterministic();
    for (input, expected) in cases {
        let plan = assembler.classify_on(input, today()).await;
        assert_eq!(plan.len(), 1, "{input:?} should yield one action");
        assert_eq!(
            plan.actions[0].category(),
            Some(expected),
            "{input:?} should be {expected}"
        );
    }
}

#[tokio::test]
async fn e2e_event_with_full_schedule() {
    let plan = PlanAssembler::deterministic()
        .classify_on("schedule a haircut next friday at 4:30pm", today())
        .await;
    let (category, title, _, schedule) = fields(&plan.actions[0]);
    let schedule = schedule.unwrap();
    assert_eq!(category, Category::Event);
    assert_eq!(title, "haircut");
    assert_eq!(schedule.date, date(2025, 6, 6));
    assert_eq!(schedule.time, NaiveTime::from_hms_opt(16, 30, 0));
}

#[tokio::test]
async fn e2e_recurring_habit() {
    let plan = PlanAssembler::deterministic()
        .classify_on("track a habit of walking the dog every day", today())
        .await;
    let (category, title, _, schedule) = fields(&plan.actions[0]);
    assert_eq!(category, Category::Habit);
    assert_eq!(title, "walking the dog");
    assert_eq!(schedule.unwrap().recurrence, Some(Recurrence::Daily));
}

#[tokio::test]
async fn e2e_multi_line_input_keeps_order() {
    let input = "create a goal to run a 10k\nbuy running shoes\njournal about why I started";
    let plan = PlanAssembler::deterministic().classify_on(input, today()).await;
    let categories: Vec<_> = plan.actions.iter().filter_map(Action::category).collect();
    assert_eq!(
        categories,
        vec![Category::Goal, Category::Task, Category::Journal]
    );
}

#[tokio::test]
async fn e2e_questions_and_navigation_yield_nothing() {
    let assembler = PlanAssembler::deterministic();
    for input in ["what is due this week", "show my goals", "go to settings", "ok"] {
        let plan = assembler.classify_on(input, today()).await;
        assert!(plan.is_empty(), "{input:?} should yield no actions");
        assert_eq!(plan.confidence, 0.0);
        assert!(plan.rationale.is_some());
    }
}

#[tokio::test]
async fn e2e_confidence_always_in_bounds() {
    let inputs = [
        "",
        "?",
        "buy milk",
        "create a goal to learn piano; show my habits; what now",
        "email Sam, call mom, and book flights",
        "mark the laundry task as done",
        ";;;",
        "!!!! ???? ....",
    ];
    let assembler = PlanAssembler::deterministic();
    for input in inputs {
        let plan = assembler.classify_on(input, today()).await;
        assert!(
            (0.0..=1.0).contains(&plan.confidence),
            "{input:?} produced confidence {}",
            plan.confidence
        );
        if plan.is_empty() {
            assert_eq!(plan.confidence, 0.0);
        }
    }
}

#[tokio::test]
async fn e2e_classify_uses_local_date() {
    let plan = PlanAssembler::deterministic()
        .classify("call the plumber tomorrow")
        .await;
    let (_, _, _, schedule) = fields(&plan.actions[0]);
    let expected = chrono::Local::now()
        .date_naive()
        .succ_opt();
    // A run that straddles midnight may see the next day.
    let date = schedule.unwrap().date;
    assert!(date == expected || date == expected.and_then(|d| d.succ_opt()));
}
