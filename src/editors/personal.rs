use super::planner::{self, PlannerEdit};
use super::EditError;
use crate::domain::goals::{Goal, GoalValue};
use crate::domain::record::PersonalSection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonalEdit {
    Planner(PlannerEdit),
    SetGoal {
        goal: Goal,
        value: Option<GoalValue>,
    },
    SetNotes(String),
}

pub fn apply(personal: &mut PersonalSection, edit: PersonalEdit) -> Result<(), EditError> {
    match edit {
        PersonalEdit::Planner(edit) => {
            planner::apply(&mut personal.eisenhower, &mut personal.big_three, edit)?
        }
        PersonalEdit::SetGoal { goal, value } => personal.goals.set(goal, value)?,
        PersonalEdit::SetNotes(notes) => personal.notes = notes,
    }
    Ok(())
}
