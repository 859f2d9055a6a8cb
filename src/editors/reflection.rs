use super::{slot, EditError};
use crate::domain::record::{Prompt, Reflection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectionEdit {
    SetAnswer { prompt: Prompt, text: String },
    SetGratitude { index: usize, text: String },
}

pub fn apply(reflection: &mut Reflection, edit: ReflectionEdit) -> Result<(), EditError> {
    match edit {
        ReflectionEdit::SetAnswer { prompt, text } => *reflection.answer_mut(prompt) = text,
        ReflectionEdit::SetGratitude { index, text } => {
            *slot(&mut reflection.gratitude, "Gratitude", index)? = text;
        }
    }
    Ok(())
}
