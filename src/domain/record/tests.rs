use serde_json::json;

use super::{derive_day, DayRecord};
use crate::date_key::DateKey;
use crate::domain::goals::{Goal, GoalValue};
use crate::domain::health::{Workout, WorkoutType};
use crate::domain::task::{Quadrant, Task};

fn key(raw: &str) -> DateKey {
    raw.parse().expect("date key should parse")
}

fn done(text: &str) -> Task {
    Task {
        text: text.to_string(),
        completed: true,
    }
}

fn busy_day() -> DayRecord {
    let mut record = DayRecord::blank(key("2026-05-01"));
    for quadrant in Quadrant::ALL {
        let tasks = record.work.eisenhower.tasks_mut(quadrant);
        tasks.push(Task::new(&format!("work {quadrant} open")));
        tasks.push(done(&format!("work {quadrant} done")));
        let tasks = record.personal.eisenhower.tasks_mut(quadrant);
        tasks.push(done(&format!("home {quadrant} done")));
        tasks.push(Task::new(&format!("home {quadrant} open")));
    }
    record.work.big_three[0] = Task::new("ship release");
    record.work.outreach.calls[3] = true;
    record.work.notes = "parking lot".to_string();
    record.health.meals.lunch = true;
    record.health.stretch = Some(true);
    record.health.workouts.push(Workout::new(WorkoutType::Run));
    record.health.medication.taken = Some(true);
    record
        .personal
        .goals
        .set(Goal::KeptPromises, Some(GoalValue::Flag(true)))
        .expect("flag goal");
    record.reflection.rose = "sunrise".to_string();
    record.reflection.gratitude[1] = "family".to_string();
    record
}

#[test]
fn derived_day_carries_only_open_eisenhower_tasks() {
    let previous = busy_day();
    let derived = derive_day(key("2026-05-02"), Some(&previous));

    assert_eq!(derived.date, Some(key("2026-05-02")));
    for quadrant in Quadrant::ALL {
        assert_eq!(
            derived.work.eisenhower.tasks(quadrant),
            &[Task::new(&format!("work {quadrant} open"))]
        );
        assert_eq!(
            derived.personal.eisenhower.tasks(quadrant),
            &[Task::new(&format!("home {quadrant} open"))]
        );
    }

    let mut expected = DayRecord::blank(key("2026-05-02"));
    expected.work.eisenhower = derived.work.eisenhower.clone();
    expected.personal.eisenhower = derived.personal.eisenhower.clone();
    assert_eq!(derived, expected);
}

#[test]
fn derived_day_without_previous_is_blank() {
    let derived = derive_day(key("2026-05-02"), None);
    assert_eq!(derived, DayRecord::blank(key("2026-05-02")));
    assert!(derived.work.eisenhower.do_it.is_empty());
    assert_eq!(derived.work.big_three.len(), 3);
    assert_eq!(derived.reflection.gratitude.len(), 3);
    assert_eq!(derived.work.outreach.calls.len(), 10);
}

#[test]
fn client_call_scenario_drops_finished_invoice() {
    let mut previous = DayRecord::blank(key("2026-05-01"));
    previous.work.eisenhower.do_it = vec![Task::new("Call client"), done("Send invoice")];
    let derived = derive_day(key("2026-05-02"), Some(&previous));
    assert_eq!(derived.work.eisenhower.do_it, vec![Task::new("Call client")]);
}

#[test]
fn serialized_layout_matches_stored_blob_names() {
    let value = serde_json::to_value(busy_day()).expect("record should serialize");
    assert_eq!(value["date"], "2026-05-01");
    assert_eq!(value["work"]["bigThree"][0]["text"], "ship release");
    assert_eq!(value["work"]["parkingLot"], "parking lot");
    assert_eq!(value["work"]["outreach"]["calls"][3], true);
    assert_eq!(value["health"]["mobility"], true);
    assert_eq!(value["health"]["hygiene"], serde_json::Value::Null);
    assert_eq!(value["health"]["movement"][0]["unit"], "miles");
    assert_eq!(value["health"]["meds"]["taken"], true);
    assert_eq!(value["personal"]["goals"]["keptPromises"], true);
    assert_eq!(value["reflection"]["gratitude"][1], "family");
}

#[test]
fn sparse_stored_records_fill_missing_fields_with_defaults() {
    let record: DayRecord = serde_json::from_value(json!({
        "date": "2026-05-03",
        "work": {
            "eisenhower": { "doIt": [{ "text": "only" }] },
            "bigThree": [{ "text": "one", "completed": true }]
        },
        "health": { "meals": { "dinner": true } }
    }))
    .expect("sparse record should load");

    assert_eq!(record.work.eisenhower.do_it, vec![Task::new("only")]);
    assert!(record.work.eisenhower.schedule.is_empty());
    assert_eq!(record.work.big_three[0], done("one"));
    assert_eq!(record.work.big_three[2], Task::default());
    assert!(record.health.meals.dinner);
    assert_eq!(record.health.stretch, None);
    assert_eq!(record.reflection.gratitude, [String::new(), String::new(), String::new()]);
}
