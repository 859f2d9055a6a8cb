use clap::{ArgGroup, Args, Subcommand, ValueEnum};

use crate::domain::goals::Goal;
use crate::domain::health::{Meal, WorkoutType};
use crate::domain::record::OutreachKind;
use crate::domain::task::Quadrant;

pub fn parse_position(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(position) if position >= 1 => Ok(position - 1),
        _ => Err(format!("'{raw}' is not a position; positions start at 1")),
    }
}

#[derive(Debug, Args)]
#[command(about = "Work section commands.")]
pub struct WorkArgs {
    #[command(subcommand)]
    pub command: WorkSubcommands,
}

#[derive(Debug, Subcommand)]
pub enum WorkSubcommands {
    #[command(about = "Edit an Eisenhower quadrant task.")]
    Task(TaskArgs),
    #[command(about = "Edit a Big Three slot.")]
    Big3(BigThreeArgs),
    #[command(about = "Toggle a prospecting call or email slot.")]
    Outreach(OutreachArgs),
    #[command(about = "Replace the work parking lot.")]
    Notes(NotesArgs),
}

#[derive(Debug, Args)]
#[command(about = "Personal section commands.")]
pub struct PersonalArgs {
    #[command(subcommand)]
    pub command: PersonalSubcommands,
}

#[derive(Debug, Subcommand)]
pub enum PersonalSubcommands {
    #[command(about = "Edit an Eisenhower quadrant task.")]
    Task(TaskArgs),
    #[command(about = "Edit a Big Three slot.")]
    Big3(BigThreeArgs),
    #[command(about = "Set or clear a daily goal.")]
    Goal(GoalArgs),
    #[command(about = "Replace the personal parking lot.")]
    Notes(NotesArgs),
}

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskSubcommands,
}

#[derive(Debug, Subcommand)]
pub enum TaskSubcommands {
    #[command(about = "Append a task to a quadrant.")]
    Add(TaskAddArgs),
    #[command(about = "Replace a task's text.")]
    Text(TaskTextArgs),
    #[command(about = "Mark a task completed.")]
    Done(TaskRefArgs),
    #[command(about = "Mark a task not completed.")]
    Undone(TaskRefArgs),
    #[command(about = "Flip a task's completed flag.")]
    Toggle(TaskRefArgs),
    #[command(about = "Remove a task.")]
    Rm(TaskRefArgs),
}

#[derive(Debug, Args)]
pub struct TaskAddArgs {
    #[arg(help = "Quadrant: do-it, schedule, get-help, get-rid-of.")]
    pub quadrant: Quadrant,
    #[arg(help = "Task text; omit for a blank task.")]
    pub text: Option<String>,
}

#[derive(Debug, Args)]
pub struct TaskRefArgs {
    #[arg(help = "Quadrant: do-it, schedule, get-help, get-rid-of.")]
    pub quadrant: Quadrant,
    #[arg(value_parser = parse_position, help = "Task position (1-based).")]
    pub index: usize,
}

#[derive(Debug, Args)]
pub struct TaskTextArgs {
    #[arg(help = "Quadrant: do-it, schedule, get-help, get-rid-of.")]
    pub quadrant: Quadrant,
    #[arg(value_parser = parse_position, help = "Task position (1-based).")]
    pub index: usize,
    #[arg(help = "New task text.")]
    pub text: String,
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("completion")
        .args(["done", "undone", "toggle"])
        .multiple(false)
))]
pub struct BigThreeArgs {
    #[arg(value_parser = parse_position, help = "Slot 1, 2 or 3.")]
    pub index: usize,
    #[arg(short = 't', long, help = "New text for the slot.")]
    pub text: Option<String>,
    #[arg(long, help = "Mark the slot completed.")]
    pub done: bool,
    #[arg(long, help = "Mark the slot not completed.")]
    pub undone: bool,
    #[arg(long, help = "Flip the slot's completed flag.")]
    pub toggle: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutreachChoice {
    Calls,
    Emails,
}

impl From<OutreachChoice> for OutreachKind {
    fn from(value: OutreachChoice) -> Self {
        match value {
            OutreachChoice::Calls => OutreachKind::Calls,
            OutreachChoice::Emails => OutreachKind::Emails,
        }
    }
}

#[derive(Debug, Args)]
pub struct OutreachArgs {
    #[arg(value_enum, help = "Which tracker to toggle.")]
    pub kind: OutreachChoice,
    #[arg(value_parser = parse_position, help = "Slot 1 through 10.")]
    pub index: usize,
}

#[derive(Debug, Args)]
pub struct NotesArgs {
    #[arg(help = "Parking lot text; an empty string clears it.")]
    pub text: String,
}

#[derive(Debug, Args)]
pub struct GoalArgs {
    #[arg(help = "Goal, e.g. express-wife, read15min, meditate5min.")]
    pub goal: Goal,
    #[arg(help = "yes|no for checkbox goals, positive|neutral|negative for ratings, or clear.")]
    pub value: String,
}

#[derive(Debug, Args)]
#[command(about = "Health section commands.")]
pub struct HealthArgs {
    #[command(subcommand)]
    pub command: HealthSubcommands,
}

#[derive(Debug, Subcommand)]
pub enum HealthSubcommands {
    #[command(about = "Toggle or set a meal.")]
    Meal(MealArgs),
    #[command(about = "Record stretching (mobility).")]
    Stretch(TriStateArgs),
    #[command(about = "Record showering (hygiene).")]
    Shower(TriStateArgs),
    #[command(about = "Edit the movement list.")]
    Workout(WorkoutArgs),
    #[command(about = "Record medication.")]
    Meds(MedsArgs),
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("state").args(["on", "off"]).multiple(false)))]
pub struct MealArgs {
    #[arg(help = "breakfast, lunch or dinner.")]
    pub meal: Meal,
    #[arg(long, help = "Mark the meal eaten.")]
    pub on: bool,
    #[arg(long, help = "Mark the meal not eaten.")]
    pub off: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TriState {
    Yes,
    No,
    Clear,
}

impl TriState {
    pub fn as_option(self) -> Option<bool> {
        match self {
            TriState::Yes => Some(true),
            TriState::No => Some(false),
            TriState::Clear => None,
        }
    }
}

#[derive(Debug, Args)]
pub struct TriStateArgs {
    #[arg(value_enum, help = "yes, no or clear.")]
    pub value: TriState,
}

#[derive(Debug, Args)]
pub struct WorkoutArgs {
    #[command(subcommand)]
    pub command: WorkoutSubcommands,
}

#[derive(Debug, Subcommand)]
pub enum WorkoutSubcommands {
    #[command(about = "Append a workout (Lift unless a type is given).")]
    Add(WorkoutAddArgs),
    #[command(about = "Change a workout's type; its unit follows.")]
    Type(WorkoutTypeArgs),
    #[command(about = "Set a workout's duration or distance.")]
    Duration(WorkoutDurationArgs),
    #[command(about = "Remove a workout.")]
    Rm(WorkoutRefArgs),
}

#[derive(Debug, Args)]
pub struct WorkoutAddArgs {
    #[arg(help = "Lift, Spin, Run, Basketball, Golf, Walk or Other.")]
    pub kind: Option<WorkoutType>,
    #[arg(long, help = "Minutes, or miles for Spin/Run/Walk.")]
    pub duration: Option<String>,
}

#[derive(Debug, Args)]
pub struct WorkoutTypeArgs {
    #[arg(value_parser = parse_position, help = "Workout position (1-based).")]
    pub index: usize,
    #[arg(help = "Lift, Spin, Run, Basketball, Golf, Walk or Other.")]
    pub kind: WorkoutType,
}

#[derive(Debug, Args)]
pub struct WorkoutDurationArgs {
    #[arg(value_parser = parse_position, help = "Workout position (1-based).")]
    pub index: usize,
    #[arg(help = "Minutes, or miles for Spin/Run/Walk.")]
    pub duration: String,
}

#[derive(Debug, Args)]
pub struct WorkoutRefArgs {
    #[arg(value_parser = parse_position, help = "Workout position (1-based).")]
    pub index: usize,
}

#[derive(Debug, Args)]
pub struct MedsArgs {
    #[command(subcommand)]
    pub command: MedsSubcommands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MedsTaken {
    Yes,
    Clear,
}

#[derive(Debug, Subcommand)]
pub enum MedsSubcommands {
    #[command(about = "Check (yes) or uncheck (clear) the medication box.")]
    Taken(MedsTakenArgs),
    #[command(about = "Record what was taken.")]
    What(NotesArgs),
}

#[derive(Debug, Args)]
pub struct MedsTakenArgs {
    #[arg(value_enum, help = "yes or clear.")]
    pub value: MedsTaken,
}

#[derive(Debug, Args)]
#[command(about = "Reflection commands.")]
pub struct ReflectArgs {
    #[command(subcommand)]
    pub command: ReflectSubcommands,
}

#[derive(Debug, Subcommand)]
pub enum ReflectSubcommands {
    #[command(about = "What was the best part of your day?")]
    Rose(NotesArgs),
    #[command(about = "What are you looking forward to?")]
    Bud(NotesArgs),
    #[command(about = "What was challenging today?")]
    Thorn(NotesArgs),
    #[command(about = "What made you smile today?")]
    Laugh(NotesArgs),
    #[command(about = "Fill a gratitude slot.")]
    Gratitude(GratitudeArgs),
}

#[derive(Debug, Args)]
pub struct GratitudeArgs {
    #[arg(value_parser = parse_position, help = "Slot 1, 2 or 3.")]
    pub index: usize,
    #[arg(help = "What you are grateful for.")]
    pub text: String,
}
