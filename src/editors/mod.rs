use std::error::Error;
use std::fmt;

use crate::domain::goals::GoalKindMismatch;
use crate::domain::record::DayRecord;

pub mod health;
pub mod personal;
pub mod planner;
pub mod reflection;
pub mod work;

pub use health::HealthEdit;
pub use personal::PersonalEdit;
pub use planner::PlannerEdit;
pub use reflection::ReflectionEdit;
pub use work::WorkEdit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Work(WorkEdit),
    Health(HealthEdit),
    Personal(PersonalEdit),
    Reflection(ReflectionEdit),
}

pub fn apply_edit(record: &DayRecord, edit: Edit) -> Result<DayRecord, EditError> {
    let mut next = record.clone();
    match edit {
        Edit::Work(edit) => work::apply(&mut next.work, edit)?,
        Edit::Health(edit) => health::apply(&mut next.health, edit)?,
        Edit::Personal(edit) => personal::apply(&mut next.personal, edit)?,
        Edit::Reflection(edit) => reflection::apply(&mut next.reflection, edit)?,
    }
    Ok(next)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    IndexOutOfRange {
        list: &'static str,
        index: usize,
        len: usize,
    },
    GoalKind(GoalKindMismatch),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::IndexOutOfRange { list, index, len } => write!(
                f,
                "{} has {} entr{}; position {} does not exist",
                list,
                len,
                if *len == 1 { "y" } else { "ies" },
                index + 1
            ),
            EditError::GoalKind(err) => write!(f, "{}", err),
        }
    }
}

impl Error for EditError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            EditError::IndexOutOfRange { .. } => None,
            EditError::GoalKind(err) => Some(err),
        }
    }
}

impl From<GoalKindMismatch> for EditError {
    fn from(value: GoalKindMismatch) -> Self {
        EditError::GoalKind(value)
    }
}

pub(crate) fn slot<'a, T>(
    items: &'a mut [T],
    list: &'static str,
    index: usize,
) -> Result<&'a mut T, EditError> {
    let len = items.len();
    items
        .get_mut(index)
        .ok_or(EditError::IndexOutOfRange { list, index, len })
}
