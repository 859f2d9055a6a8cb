use super::{slot, EditError};
use crate::domain::task::{Eisenhower, Quadrant, Task};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlannerEdit {
    AddTask(Quadrant),
    SetTaskText {
        quadrant: Quadrant,
        index: usize,
        text: String,
    },
    SetTaskCompleted {
        quadrant: Quadrant,
        index: usize,
        completed: bool,
    },
    ToggleTask {
        quadrant: Quadrant,
        index: usize,
    },
    RemoveTask {
        quadrant: Quadrant,
        index: usize,
    },
    SetBigThreeText {
        index: usize,
        text: String,
    },
    SetBigThreeCompleted {
        index: usize,
        completed: bool,
    },
    ToggleBigThree {
        index: usize,
    },
}

pub fn apply(
    eisenhower: &mut Eisenhower,
    big_three: &mut [Task],
    edit: PlannerEdit,
) -> Result<(), EditError> {
    match edit {
        PlannerEdit::AddTask(quadrant) => eisenhower.tasks_mut(quadrant).push(Task::default()),
        PlannerEdit::SetTaskText {
            quadrant,
            index,
            text,
        } => task(eisenhower, quadrant, index)?.text = text,
        PlannerEdit::SetTaskCompleted {
            quadrant,
            index,
            completed,
        } => task(eisenhower, quadrant, index)?.completed = completed,
        PlannerEdit::ToggleTask { quadrant, index } => {
            let item = task(eisenhower, quadrant, index)?;
            item.completed = !item.completed;
        }
        PlannerEdit::RemoveTask { quadrant, index } => {
            let tasks = eisenhower.tasks_mut(quadrant);
            if index >= tasks.len() {
                return Err(EditError::IndexOutOfRange {
                    list: quadrant.label(),
                    index,
                    len: tasks.len(),
                });
            }
            tasks.remove(index);
        }
        PlannerEdit::SetBigThreeText { index, text } => {
            slot(big_three, "Big Three", index)?.text = text;
        }
        PlannerEdit::SetBigThreeCompleted { index, completed } => {
            slot(big_three, "Big Three", index)?.completed = completed;
        }
        PlannerEdit::ToggleBigThree { index } => {
            let item = slot(big_three, "Big Three", index)?;
            item.completed = !item.completed;
        }
    }
    Ok(())
}

fn task(
    eisenhower: &mut Eisenhower,
    quadrant: Quadrant,
    index: usize,
) -> Result<&mut Task, EditError> {
    slot(eisenhower.tasks_mut(quadrant), quadrant.label(), index)
}
