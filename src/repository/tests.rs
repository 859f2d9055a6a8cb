use std::cell::Cell;
use std::rc::Rc;

use serde_json::json;

use super::{parse_blob, DayRepository, RepositoryError};
use crate::date_key::DateKey;
use crate::domain::goals::Goals;
use crate::domain::record::{DayRecord, Outreach, Reflection};
use crate::domain::task::{Quadrant, Task};
use crate::editors::{Edit, EditError, PlannerEdit, ReflectionEdit, WorkEdit};
use crate::store::{KeyValueStore, MemoryStore, StoreError};

const KEY: &str = "tracker-data";

fn key(raw: &str) -> DateKey {
    raw.parse().expect("date key should parse")
}

fn repo_over(store: &MemoryStore) -> DayRepository {
    DayRepository::load(Rc::new(store.clone()), KEY)
}

struct FailingStore {
    fail_reads: bool,
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        if self.fail_reads {
            Err(std::io::Error::other("storage disabled").into())
        } else {
            Ok(None)
        }
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(std::io::Error::other("quota exceeded").into())
    }
}

#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    writes: Cell<usize>,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes.set(self.writes.get() + 1);
        self.inner.set(key, value)
    }
}

fn seed_previous_day(repo: &mut DayRepository) {
    repo.update(
        key("2026-04-09"),
        &json!({
            "work": {
                "eisenhower": {
                    "doIt": [
                        {"text": "Call client", "completed": false},
                        {"text": "Send invoice", "completed": true}
                    ],
                    "schedule": [{"text": "Plan Q3", "completed": false}],
                    "getHelp": [{"text": "Fix printer", "completed": false}],
                    "getRidOf": [{"text": "Old report", "completed": false}]
                },
                "bigThree": [{"text": "Demo", "completed": true}, {}, {}],
                "outreach": {"calls": [true, true]}
            },
            "personal": {
                "eisenhower": {"doIt": [{"text": "Groceries", "completed": false}]},
                "goals": {"read15Min": true}
            },
            "reflection": {"rose": "Good coffee", "gratitude": ["a", "b", "c"]}
        }),
    )
    .expect("seed update should apply");
}

#[test]
fn resolve_carries_open_tasks_from_stored_previous_day() {
    let store = MemoryStore::default();
    let mut repo = repo_over(&store);
    seed_previous_day(&mut repo);

    let next = repo.resolve(key("2026-04-10"));
    assert_eq!(next.date, Some(key("2026-04-10")));
    assert_eq!(next.work.eisenhower.do_it, vec![Task::new("Call client")]);
    assert_eq!(next.work.eisenhower.schedule, vec![Task::new("Plan Q3")]);
    assert_eq!(next.work.eisenhower.get_help, vec![Task::new("Fix printer")]);
    assert_eq!(next.work.eisenhower.get_rid_of, vec![Task::new("Old report")]);
    assert_eq!(next.personal.eisenhower.do_it, vec![Task::new("Groceries")]);
    assert_eq!(next.work.big_three, <[Task; 3]>::default());
    assert_eq!(next.work.outreach, Outreach::default());
    assert_eq!(next.personal.goals, Goals::default());
    assert_eq!(next.reflection, Reflection::default());
    assert!(!repo.is_stored(key("2026-04-10")));
}

#[test]
fn resolve_without_history_is_blank_and_does_not_persist() {
    let store = MemoryStore::default();
    let repo = repo_over(&store);
    let day = repo.resolve(key("2026-04-10"));
    assert_eq!(day, DayRecord::blank(key("2026-04-10")));
    assert_eq!(store.get(KEY).unwrap(), None);
}

#[test]
fn resolve_is_idempotent() {
    let store = MemoryStore::default();
    let mut repo = repo_over(&store);
    seed_previous_day(&mut repo);
    assert_eq!(
        repo.resolve(key("2026-04-10")),
        repo.resolve(key("2026-04-10"))
    );
}

#[test]
fn carry_forward_only_reaches_back_one_stored_day() {
    let store = MemoryStore::default();
    let mut repo = repo_over(&store);
    seed_previous_day(&mut repo);
    // 04-10 is derived but never stored, so 04-11 inherits nothing.
    let later = repo.resolve(key("2026-04-11"));
    assert_eq!(later, DayRecord::blank(key("2026-04-11")));
}

#[test]
fn stored_day_is_not_rederived_after_previous_day_changes() {
    let store = MemoryStore::default();
    let mut repo = repo_over(&store);
    seed_previous_day(&mut repo);
    repo.update(key("2026-04-10"), &json!({"work": {"parkingLot": "notes"}}))
        .expect("materialize next day");

    repo.apply(
        key("2026-04-09"),
        Edit::Work(WorkEdit::Planner(PlannerEdit::AddTask(Quadrant::DoIt))),
    )
    .expect("edit previous day");

    let stored = repo.resolve(key("2026-04-10"));
    assert_eq!(stored.work.eisenhower.do_it, vec![Task::new("Call client")]);
    assert_eq!(stored.work.notes, "notes");
}

#[test]
fn updates_merge_additively_and_survive_reload() {
    let store = MemoryStore::default();
    let mut repo = repo_over(&store);
    let day = key("2026-04-12");

    repo.update(day, &json!({"reflection": {"rose": "Good coffee"}}))
        .expect("first update");
    let outcome = repo
        .update(day, &json!({"reflection": {"bud": "Trip next week"}}))
        .expect("second update");
    assert!(outcome.persisted);
    assert_eq!(outcome.record.reflection.rose, "Good coffee");
    assert_eq!(outcome.record.reflection.bud, "Trip next week");
    assert_eq!(repo.resolve(day), outcome.record);

    let reloaded = repo_over(&store);
    assert_eq!(reloaded.resolve(day), outcome.record);
    assert_eq!(reloaded.days().len(), 1);
}

#[test]
fn patches_that_do_not_type_check_change_nothing() {
    let store = MemoryStore::default();
    let mut repo = repo_over(&store);
    let err = repo
        .update(key("2026-04-12"), &json!({"health": {"meals": {"lunch": "yes"}}}))
        .expect_err("string is not a meal flag");
    assert!(matches!(err, RepositoryError::InvalidPatch(_)));
    assert!(repo.days().is_empty());
    assert_eq!(store.get(KEY).unwrap(), None);
}

#[test]
fn failed_edits_leave_state_untouched() {
    let store = MemoryStore::default();
    let mut repo = repo_over(&store);
    let err = repo
        .apply(
            key("2026-04-12"),
            Edit::Reflection(ReflectionEdit::SetGratitude {
                index: 7,
                text: "x".to_string(),
            }),
        )
        .expect_err("slot 8 does not exist");
    assert!(matches!(
        err,
        RepositoryError::Edit(EditError::IndexOutOfRange { .. })
    ));
    assert!(repo.days().is_empty());
}

#[test]
fn chained_edits_are_written_once() {
    let store = Rc::new(CountingStore::default());
    let mut repo = DayRepository::load(store.clone(), KEY);
    let date = key("2026-04-12");
    let outcome = repo
        .apply_all(
            date,
            [
                Edit::Work(WorkEdit::Planner(PlannerEdit::AddTask(Quadrant::DoIt))),
                Edit::Work(WorkEdit::Planner(PlannerEdit::SetTaskText {
                    quadrant: Quadrant::DoIt,
                    index: 0,
                    text: "Call client".to_string(),
                })),
            ],
        )
        .expect("both edits apply");
    assert!(outcome.persisted);
    assert_eq!(outcome.record.work.eisenhower.do_it, vec![Task::new("Call client")]);
    assert_eq!(store.writes.get(), 1);

    let err = repo
        .apply_all(
            date,
            [
                Edit::Work(WorkEdit::Planner(PlannerEdit::AddTask(Quadrant::DoIt))),
                Edit::Work(WorkEdit::Planner(PlannerEdit::RemoveTask {
                    quadrant: Quadrant::DoIt,
                    index: 5,
                })),
            ],
        )
        .expect_err("position 6 does not exist");
    assert!(matches!(
        err,
        RepositoryError::Edit(EditError::IndexOutOfRange { .. })
    ));
    assert_eq!(store.writes.get(), 1);
    assert_eq!(repo.days()[&date].work.eisenhower.do_it.len(), 1);
}

#[test]
fn whole_mapping_is_written_on_every_update() {
    let store = MemoryStore::default();
    let mut repo = repo_over(&store);
    repo.update(key("2026-04-01"), &json!({"work": {"parkingLot": "one"}}))
        .unwrap();
    repo.update(key("2026-04-02"), &json!({"work": {"parkingLot": "two"}}))
        .unwrap();

    let blob = store.get(KEY).unwrap().expect("blob should be written");
    let days = parse_blob(&blob).expect("blob should parse");
    assert_eq!(days.len(), 2);
    assert_eq!(days[&key("2026-04-01")].work.notes, "one");
    assert_eq!(days[&key("2026-04-02")].work.notes, "two");
}

#[test]
fn malformed_blob_starts_fresh_and_is_backed_up() {
    let store = MemoryStore::with_entry(KEY, "{not json");
    let repo = repo_over(&store);
    assert!(repo.days().is_empty());

    let backups = store
        .keys()
        .into_iter()
        .filter(|name| name.starts_with("tracker-data.corrupt-"))
        .collect::<Vec<_>>();
    assert_eq!(backups.len(), 1);
    assert_eq!(store.get(&backups[0]).unwrap().as_deref(), Some("{not json"));
    assert_eq!(store.get(KEY).unwrap().as_deref(), Some("{not json"));
}

#[test]
fn blob_with_bad_date_key_is_treated_as_first_run() {
    let store = MemoryStore::with_entry(KEY, r#"{"yesterday": {}}"#);
    let repo = repo_over(&store);
    assert!(repo.days().is_empty());
}

#[test]
fn unreadable_store_yields_empty_state_and_writes_fail_softly() {
    let mut repo = DayRepository::load(Rc::new(FailingStore { fail_reads: true }), KEY);
    assert!(repo.days().is_empty());

    let outcome = repo
        .apply(
            key("2026-04-12"),
            Edit::Work(WorkEdit::SetNotes("kept in memory".to_string())),
        )
        .expect("edit should still apply");
    assert!(!outcome.persisted);
    assert_eq!(repo.resolve(key("2026-04-12")).work.notes, "kept in memory");

    let mut quiet = DayRepository::load(Rc::new(FailingStore { fail_reads: false }), KEY);
    assert!(!quiet.replace_all(repo.days().clone()));
    assert_eq!(quiet.days().len(), 1);
}

#[test]
fn browser_export_loads_verbatim() {
    let raw = json!({
        "2026-02-01": {
            "date": "2026-02-01",
            "work": {
                "eisenhower": {"doIt": [], "schedule": [], "getHelp": [], "getRidOf": []},
                "bigThree": [
                    {"text": "", "completed": false},
                    {"text": "", "completed": false},
                    {"text": "", "completed": false}
                ],
                "outreach": {
                    "calls": [false, false, false, false, false, false, false, false, false, true],
                    "emails": [false, false, false, false, false, false, false, false, false, false]
                },
                "parkingLot": ""
            },
            "health": {
                "meals": {"breakfast": true, "lunch": false, "dinner": false},
                "mobility": null,
                "movement": [{"type": "Walk", "duration": "2", "unit": "miles"}],
                "hygiene": false,
                "meds": {"taken": null, "what": ""}
            },
            "personal": {
                "eisenhower": {"doIt": [], "schedule": [], "getHelp": [], "getRidOf": []},
                "bigThree": [
                    {"text": "", "completed": false},
                    {"text": "", "completed": false},
                    {"text": "", "completed": false}
                ],
                "goals": {
                    "expressWife": "neutral", "expressSon": null, "keptPromises": null,
                    "read15Min": null, "actHealthy": null, "dailyDevotional": null,
                    "meditate5Min": null
                },
                "parkingLot": ""
            },
            "reflection": {"rose": "", "bud": "", "thorn": "", "laugh": "", "gratitude": ["", "", ""]}
        }
    });
    let store = MemoryStore::with_entry(KEY, &raw.to_string());
    let repo = repo_over(&store);
    let day = repo.resolve(key("2026-02-01"));
    assert!(day.work.outreach.calls[9]);
    assert!(day.health.meals.breakfast);
    assert_eq!(day.health.shower, Some(false));
    assert_eq!(day.health.workouts[0].duration(), "2");

    let round_trip: serde_json::Value =
        serde_json::from_str(&repo.to_blob().unwrap()).expect("blob is json");
    assert_eq!(round_trip, raw);
}
