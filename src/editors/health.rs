use super::{slot, EditError};
use crate::domain::health::{Meal, Workout, WorkoutType};
use crate::domain::record::HealthSection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthEdit {
    ToggleMeal(Meal),
    SetMeal { meal: Meal, eaten: bool },
    SetStretch(Option<bool>),
    SetShower(Option<bool>),
    AddWorkout,
    SetWorkoutType { index: usize, kind: WorkoutType },
    SetWorkoutDuration { index: usize, duration: String },
    RemoveWorkout(usize),
    SetMedicationTaken(bool),
    SetMedicationWhat(String),
}

pub fn apply(health: &mut HealthSection, edit: HealthEdit) -> Result<(), EditError> {
    match edit {
        HealthEdit::ToggleMeal(meal) => {
            let eaten = health.meals.get(meal);
            health.meals.set(meal, !eaten);
        }
        HealthEdit::SetMeal { meal, eaten } => health.meals.set(meal, eaten),
        HealthEdit::SetStretch(value) => health.stretch = value,
        HealthEdit::SetShower(value) => health.shower = value,
        HealthEdit::AddWorkout => health.workouts.push(Workout::new(WorkoutType::Lift)),
        HealthEdit::SetWorkoutType { index, kind } => {
            slot(&mut health.workouts, "Movement", index)?.set_kind(kind);
        }
        HealthEdit::SetWorkoutDuration { index, duration } => {
            slot(&mut health.workouts, "Movement", index)?.set_duration(&duration);
        }
        HealthEdit::RemoveWorkout(index) => {
            if index >= health.workouts.len() {
                return Err(EditError::IndexOutOfRange {
                    list: "Movement",
                    index,
                    len: health.workouts.len(),
                });
            }
            health.workouts.remove(index);
        }
        HealthEdit::SetMedicationTaken(checked) => {
            health.medication.taken = checked.then_some(true);
        }
        HealthEdit::SetMedicationWhat(what) => health.medication.what = what,
    }
    Ok(())
}
