use std::io::{self, IsTerminal};

use crate::app::{DaySummary, DayView, ImportSummary};
use crate::config::ColorMode;
use crate::domain::goals::{Goal, GoalValue};
use crate::domain::health::Meal;
use crate::domain::record::{Outreach, OutreachKind, Prompt};
use crate::domain::task::{Eisenhower, Quadrant, Task};

pub fn print_day(view: &DayView, palette: &Palette) {
    for line in format_day(view, palette) {
        println!("{line}");
    }
}

pub fn print_day_list(days: &[DaySummary], palette: &Palette) {
    println!("{}", palette.heading("Days"));
    if days.is_empty() {
        println!("{}", palette.dim("no days recorded yet"));
        return;
    }
    for day in days {
        println!("{}", format_summary_row(day, palette));
    }
    println!("{}", palette.dim(&format!("{} day(s)", days.len())));
}

pub fn print_import(summary: &ImportSummary, palette: &Palette) {
    let mut line = format!("imported {} day(s)", summary.days);
    if !summary.persisted {
        line.push(' ');
        line.push_str(&palette.warn("(not saved)"));
    }
    println!("{line}");
}

fn format_summary_row(day: &DaySummary, palette: &Palette) -> String {
    let mut line = format!(
        "{} {} open, {}/6 big three",
        palette.date(&day.date.to_string()),
        day.open_tasks,
        day.big_three_done
    );
    if day.reflected {
        line.push(' ');
        line.push_str(&palette.dim("(reflected)"));
    }
    line
}

pub(crate) fn format_day(view: &DayView, palette: &Palette) -> Vec<String> {
    let record = &view.record;
    let mut lines = Vec::new();

    let mut title = format!(
        "{} {}",
        palette.heading(&view.display),
        palette.dim(&format!("({})", view.date))
    );
    if !view.stored {
        title.push(' ');
        title.push_str(&palette.dim("[unsaved]"));
    }
    if view.persisted == Some(false) {
        title.push(' ');
        title.push_str(&palette.warn("[not saved: storage unavailable]"));
    }
    lines.push(title);

    lines.push(palette.section("Work"));
    push_matrix(&mut lines, &record.work.eisenhower, palette);
    push_big_three(&mut lines, &record.work.big_three, palette);
    for kind in [OutreachKind::Calls, OutreachKind::Emails] {
        lines.push(format_outreach(&record.work.outreach, kind, palette));
    }
    push_notes(&mut lines, &record.work.notes, palette);

    let health = &record.health;
    lines.push(palette.section("Health"));
    let meals = Meal::ALL
        .into_iter()
        .map(|meal| format!("{} {}", checkbox(health.meals.get(meal)), meal.as_str()))
        .collect::<Vec<_>>()
        .join("  ");
    lines.push(format!("  {} {meals}", palette.label("Meals:")));
    lines.push(format!(
        "  {} {}",
        palette.label("Mobility:"),
        tri_state(health.stretch)
    ));
    lines.push(format!("  {}", palette.label("Movement:")));
    if health.workouts.is_empty() {
        lines.push(format!("    {}", palette.dim("none")));
    }
    for (index, workout) in health.workouts.iter().enumerate() {
        let duration = if workout.duration().is_empty() {
            "-"
        } else {
            workout.duration()
        };
        lines.push(format!(
            "    {}. {} {} {}",
            index + 1,
            workout.kind(),
            duration,
            workout.unit().as_str()
        ));
    }
    lines.push(format!(
        "  {} {}",
        palette.label("Hygiene:"),
        tri_state(health.shower)
    ));
    let mut meds = format!(
        "  {} {}",
        palette.label("Meds:"),
        checkbox(health.medication.taken == Some(true))
    );
    if !health.medication.what.trim().is_empty() {
        meds.push(' ');
        meds.push_str(&health.medication.what);
    }
    lines.push(meds);

    lines.push(palette.section("Personal"));
    push_matrix(&mut lines, &record.personal.eisenhower, palette);
    push_big_three(&mut lines, &record.personal.big_three, palette);
    lines.push(format!("  {}", palette.label("Goals")));
    for goal in Goal::ALL {
        lines.push(format!(
            "    {}: {}",
            goal.label(),
            goal_value(record.personal.goals.get(goal))
        ));
    }
    push_notes(&mut lines, &record.personal.notes, palette);

    lines.push(palette.section("Reflection"));
    for prompt in Prompt::ALL {
        let answer = record.reflection.answer(prompt);
        let answer = if answer.trim().is_empty() {
            palette.dim(prompt.question())
        } else {
            answer.to_string()
        };
        lines.push(format!("  {} {answer}", palette.label(&format!("{}:", prompt.label()))));
    }
    lines.push(format!("  {}", palette.label("Grateful for")));
    for (index, entry) in record.reflection.gratitude.iter().enumerate() {
        lines.push(format!("    {}. {entry}", index + 1));
    }

    lines
}

fn push_matrix(lines: &mut Vec<String>, matrix: &Eisenhower, palette: &Palette) {
    for quadrant in Quadrant::ALL {
        lines.push(format!(
            "  {} {}",
            palette.label(quadrant.label()),
            palette.dim(&format!("({})", quadrant.sublabel()))
        ));
        let tasks = matrix.tasks(quadrant);
        if tasks.is_empty() {
            lines.push(format!("    {}", palette.dim("no tasks")));
        }
        for (index, task) in tasks.iter().enumerate() {
            lines.push(format_task(index, task, palette));
        }
    }
}

fn push_big_three(lines: &mut Vec<String>, big_three: &[Task], palette: &Palette) {
    lines.push(format!("  {}", palette.label("Big Three")));
    for (index, task) in big_three.iter().enumerate() {
        lines.push(format_task(index, task, palette));
    }
}

fn push_notes(lines: &mut Vec<String>, notes: &str, palette: &Palette) {
    lines.push(format!("  {}", palette.label("Parking Lot")));
    if notes.trim().is_empty() {
        lines.push(format!("    {}", palette.dim("empty")));
        return;
    }
    for line in notes.lines() {
        lines.push(format!("    {line}"));
    }
}

fn format_task(index: usize, task: &Task, palette: &Palette) -> String {
    let text = if task.completed {
        palette.strike(&task.text)
    } else {
        task.text.clone()
    };
    format!("    {}. {} {text}", index + 1, checkbox(task.completed))
}

pub(crate) fn format_outreach(outreach: &Outreach, kind: OutreachKind, palette: &Palette) -> String {
    let marks = outreach
        .slots(kind)
        .iter()
        .map(|done| if *done { 'x' } else { '.' })
        .collect::<String>();
    let slots = outreach.slots(kind).len();
    format!(
        "  {} [{marks}] {}",
        palette.label(kind.label()),
        palette.dim(&format!("{}/{slots} completed", outreach.done_count(kind)))
    )
}

fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

fn tri_state(value: Option<bool>) -> &'static str {
    match value {
        Some(true) => "yes",
        Some(false) => "no",
        None => "-",
    }
}

fn goal_value(value: Option<GoalValue>) -> &'static str {
    match value {
        Some(GoalValue::Flag(true)) => "yes",
        Some(GoalValue::Flag(false)) => "no",
        Some(GoalValue::Rating(rating)) => rating.as_str(),
        None => "-",
    }
}

pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(mode: ColorMode) -> Self {
        let enabled = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
            }
        };
        Self { enabled }
    }

    #[cfg(test)]
    pub(crate) fn plain() -> Self {
        Self { enabled: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn heading(&self, text: &str) -> String {
        self.paint("1;36", text)
    }

    fn section(&self, text: &str) -> String {
        self.paint("1;33", &format!("== {text} =="))
    }

    fn label(&self, text: &str) -> String {
        self.paint("1", text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint("2", text)
    }

    fn date(&self, text: &str) -> String {
        self.paint("1;94", text)
    }

    fn strike(&self, text: &str) -> String {
        self.paint("9;90", text)
    }

    fn warn(&self, text: &str) -> String {
        self.paint("31", text)
    }
}

#[cfg(test)]
#[path = "ui_tests_ext.rs"]
mod tests;
