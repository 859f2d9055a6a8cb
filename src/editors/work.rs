use super::planner::{self, PlannerEdit};
use super::{slot, EditError};
use crate::domain::record::{OutreachKind, WorkSection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkEdit {
    Planner(PlannerEdit),
    ToggleOutreach { kind: OutreachKind, index: usize },
    SetNotes(String),
}

pub fn apply(work: &mut WorkSection, edit: WorkEdit) -> Result<(), EditError> {
    match edit {
        WorkEdit::Planner(edit) => planner::apply(&mut work.eisenhower, &mut work.big_three, edit)?,
        WorkEdit::ToggleOutreach { kind, index } => {
            let done = slot(work.outreach.slots_mut(kind), kind.label(), index)?;
            *done = !*done;
        }
        WorkEdit::SetNotes(notes) => work.notes = notes,
    }
    Ok(())
}
