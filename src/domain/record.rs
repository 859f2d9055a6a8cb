use serde::{Deserialize, Serialize};

use super::fixed;
use super::goals::Goals;
use super::health::{Meals, Medication, Workout};
use super::task::{Eisenhower, Task};
use crate::date_key::DateKey;

pub const BIG_THREE_SLOTS: usize = 3;
pub const OUTREACH_SLOTS: usize = 10;
pub const GRATITUDE_SLOTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutreachKind {
    Calls,
    Emails,
}

impl OutreachKind {
    pub fn label(self) -> &'static str {
        match self {
            OutreachKind::Calls => "Prospecting Calls",
            OutreachKind::Emails => "Prospecting Emails",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Outreach {
    #[serde(deserialize_with = "fixed::deserialize")]
    pub calls: [bool; OUTREACH_SLOTS],
    #[serde(deserialize_with = "fixed::deserialize")]
    pub emails: [bool; OUTREACH_SLOTS],
}

impl Outreach {
    pub fn slots(&self, kind: OutreachKind) -> &[bool; OUTREACH_SLOTS] {
        match kind {
            OutreachKind::Calls => &self.calls,
            OutreachKind::Emails => &self.emails,
        }
    }

    pub fn slots_mut(&mut self, kind: OutreachKind) -> &mut [bool; OUTREACH_SLOTS] {
        match kind {
            OutreachKind::Calls => &mut self.calls,
            OutreachKind::Emails => &mut self.emails,
        }
    }

    pub fn done_count(&self, kind: OutreachKind) -> usize {
        self.slots(kind).iter().filter(|done| **done).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkSection {
    pub eisenhower: Eisenhower,
    #[serde(deserialize_with = "fixed::deserialize")]
    pub big_three: [Task; BIG_THREE_SLOTS],
    pub outreach: Outreach,
    #[serde(rename = "parkingLot")]
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthSection {
    pub meals: Meals,
    #[serde(rename = "mobility")]
    pub stretch: Option<bool>,
    #[serde(rename = "movement")]
    pub workouts: Vec<Workout>,
    #[serde(rename = "hygiene")]
    pub shower: Option<bool>,
    #[serde(rename = "meds")]
    pub medication: Medication,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonalSection {
    pub eisenhower: Eisenhower,
    #[serde(deserialize_with = "fixed::deserialize")]
    pub big_three: [Task; BIG_THREE_SLOTS],
    pub goals: Goals,
    #[serde(rename = "parkingLot")]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prompt {
    Rose,
    Bud,
    Thorn,
    Laugh,
}

impl Prompt {
    pub const ALL: [Prompt; 4] = [Prompt::Rose, Prompt::Bud, Prompt::Thorn, Prompt::Laugh];

    pub fn label(self) -> &'static str {
        match self {
            Prompt::Rose => "Rose",
            Prompt::Bud => "Bud",
            Prompt::Thorn => "Thorn",
            Prompt::Laugh => "Laugh",
        }
    }

    pub fn question(self) -> &'static str {
        match self {
            Prompt::Rose => "What was the best part of your day?",
            Prompt::Bud => "What are you excited about or looking forward to?",
            Prompt::Thorn => "What was challenging or difficult today?",
            Prompt::Laugh => "What brought you joy or made you smile today?",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reflection {
    pub rose: String,
    pub bud: String,
    pub thorn: String,
    pub laugh: String,
    #[serde(deserialize_with = "fixed::deserialize")]
    pub gratitude: [String; GRATITUDE_SLOTS],
}

impl Reflection {
    pub fn answer(&self, prompt: Prompt) -> &str {
        match prompt {
            Prompt::Rose => &self.rose,
            Prompt::Bud => &self.bud,
            Prompt::Thorn => &self.thorn,
            Prompt::Laugh => &self.laugh,
        }
    }

    pub fn answer_mut(&mut self, prompt: Prompt) -> &mut String {
        match prompt {
            Prompt::Rose => &mut self.rose,
            Prompt::Bud => &mut self.bud,
            Prompt::Thorn => &mut self.thorn,
            Prompt::Laugh => &mut self.laugh,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateKey>,
    pub work: WorkSection,
    pub health: HealthSection,
    pub personal: PersonalSection,
    pub reflection: Reflection,
}

impl DayRecord {
    pub fn blank(date: DateKey) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }
}

/// Builds the record for a day that has nothing stored yet.
///
/// Only the Eisenhower quadrants inherit from `previous`, and only their open
/// tasks; every other field starts blank.
pub fn derive_day(date: DateKey, previous: Option<&DayRecord>) -> DayRecord {
    let mut record = DayRecord::blank(date);
    if let Some(previous) = previous {
        record.work.eisenhower = previous.work.eisenhower.carried_forward();
        record.personal.eisenhower = previous.personal.eisenhower.carried_forward();
    }
    record
}

#[cfg(test)]
mod tests;
