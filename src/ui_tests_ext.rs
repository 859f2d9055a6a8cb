use super::{format_day, format_outreach, format_summary_row, Palette};
use crate::app::{DaySummary, DayView};
use crate::date_key::DateKey;
use crate::domain::goals::Rating;
use crate::domain::health::{Workout, WorkoutType};
use crate::domain::record::{DayRecord, Outreach, OutreachKind};
use crate::domain::task::Task;

fn key(raw: &str) -> DateKey {
    raw.parse().expect("date key should parse")
}

fn sample_view(stored: bool) -> DayView {
    let date = key("2026-10-18");
    let mut record = DayRecord::blank(date);
    record.work.eisenhower.do_it = vec![
        Task::new("Call client"),
        Task {
            text: "Send invoice".to_string(),
            completed: true,
        },
    ];
    record.work.outreach.calls[0] = true;
    record.work.outreach.calls[4] = true;
    record.health.meals.lunch = true;
    record.health.stretch = Some(false);
    let mut run = Workout::new(WorkoutType::Run);
    run.set_duration("3");
    record.health.workouts.push(run);
    record.personal.goals.express_wife = Some(Rating::Positive);
    record.personal.goals.read_15_min = Some(true);
    record.reflection.rose = "Good coffee".to_string();
    DayView {
        date,
        display: date.display_long(),
        stored,
        persisted: None,
        record,
    }
}

#[test]
fn day_renders_every_section_with_labels() {
    let lines = format_day(&sample_view(true), &Palette::plain());
    let text = lines.join("\n");

    assert_eq!(lines[0], "Sunday, October 18, 2026 (2026-10-18)");
    for heading in ["== Work ==", "== Health ==", "== Personal ==", "== Reflection =="] {
        assert!(text.contains(heading), "missing {heading}");
    }
    assert!(text.contains("Do It Today (Urgent & Important)"));
    assert!(text.contains("Get Rid Of (Neither)"));
    assert!(text.contains("    1. [ ] Call client"));
    assert!(text.contains("    2. [x] Send invoice"));
    assert!(text.contains("Meals: [ ] breakfast  [x] lunch  [ ] dinner"));
    assert!(text.contains("Mobility: no"));
    assert!(text.contains("Hygiene: -"));
    assert!(text.contains("    1. Run 3 miles"));
    assert!(text.contains("Express Affection with Wife: positive"));
    assert!(text.contains("Read for 15 Minutes: yes"));
    assert!(text.contains("Rose: Good coffee"));
    assert!(text.contains("Thorn: What was challenging or difficult today?"));
}

#[test]
fn derived_day_is_flagged_unsaved() {
    let lines = format_day(&sample_view(false), &Palette::plain());
    assert!(lines[0].ends_with("[unsaved]"));

    let mut view = sample_view(true);
    view.persisted = Some(false);
    let lines = format_day(&view, &Palette::plain());
    assert!(lines[0].contains("not saved"));
}

#[test]
fn outreach_shows_progress_counter() {
    let mut outreach = Outreach::default();
    outreach.emails[1] = true;
    outreach.emails[9] = true;
    let line = format_outreach(&outreach, OutreachKind::Emails, &Palette::plain());
    assert_eq!(line, "  Prospecting Emails [.x.......x] 2/10 completed");
    let line = format_outreach(&outreach, OutreachKind::Calls, &Palette::plain());
    assert!(line.ends_with("0/10 completed"));
}

#[test]
fn completed_tasks_are_struck_through_when_colored() {
    let palette = Palette::new(crate::config::ColorMode::Always);
    let lines = format_day(&sample_view(true), &palette);
    let invoice = lines
        .iter()
        .find(|line| line.contains("Send invoice"))
        .expect("completed task should render");
    assert!(invoice.contains("\x1b[9;90mSend invoice\x1b[0m"));
    let never = Palette::new(crate::config::ColorMode::Never);
    assert!(!format_day(&sample_view(true), &never)
        .join("\n")
        .contains('\x1b'));
}

#[test]
fn summary_row_counts_open_tasks_and_big_three() {
    let row = format_summary_row(
        &DaySummary {
            date: key("2026-10-18"),
            open_tasks: 4,
            big_three_done: 2,
            reflected: true,
        },
        &Palette::plain(),
    );
    assert_eq!(row, "2026-10-18 4 open, 2/6 big three (reflected)");
}
