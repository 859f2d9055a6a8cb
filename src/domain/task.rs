use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{fold_choice, ParseChoiceError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub text: String,
    pub completed: bool,
}

impl Task {
    #[cfg(test)]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            completed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    DoIt,
    Schedule,
    GetHelp,
    GetRidOf,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::DoIt,
        Quadrant::Schedule,
        Quadrant::GetHelp,
        Quadrant::GetRidOf,
    ];

    const NAMES: &'static [&'static str] = &["do-it", "schedule", "get-help", "get-rid-of"];

    pub fn as_str(self) -> &'static str {
        match self {
            Quadrant::DoIt => "doIt",
            Quadrant::Schedule => "schedule",
            Quadrant::GetHelp => "getHelp",
            Quadrant::GetRidOf => "getRidOf",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Quadrant::DoIt => "Do It Today",
            Quadrant::Schedule => "Schedule It",
            Quadrant::GetHelp => "Get Help",
            Quadrant::GetRidOf => "Get Rid Of",
        }
    }

    pub fn sublabel(self) -> &'static str {
        match self {
            Quadrant::DoIt => "Urgent & Important",
            Quadrant::Schedule => "Important, Not Urgent",
            Quadrant::GetHelp => "Urgent, Not Important",
            Quadrant::GetRidOf => "Neither",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quadrant {
    type Err = ParseChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match fold_choice(value).as_str() {
            "doit" | "do" | "today" => Ok(Quadrant::DoIt),
            "schedule" | "scheduleit" => Ok(Quadrant::Schedule),
            "gethelp" | "help" | "delegate" => Ok(Quadrant::GetHelp),
            "getridof" | "drop" | "delete" => Ok(Quadrant::GetRidOf),
            _ => Err(ParseChoiceError::new("quadrant", value, Self::NAMES)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Eisenhower {
    pub do_it: Vec<Task>,
    pub schedule: Vec<Task>,
    pub get_help: Vec<Task>,
    pub get_rid_of: Vec<Task>,
}

impl Eisenhower {
    pub fn tasks(&self, quadrant: Quadrant) -> &[Task] {
        match quadrant {
            Quadrant::DoIt => &self.do_it,
            Quadrant::Schedule => &self.schedule,
            Quadrant::GetHelp => &self.get_help,
            Quadrant::GetRidOf => &self.get_rid_of,
        }
    }

    pub fn tasks_mut(&mut self, quadrant: Quadrant) -> &mut Vec<Task> {
        match quadrant {
            Quadrant::DoIt => &mut self.do_it,
            Quadrant::Schedule => &mut self.schedule,
            Quadrant::GetHelp => &mut self.get_help,
            Quadrant::GetRidOf => &mut self.get_rid_of,
        }
    }

    pub fn carried_forward(&self) -> Self {
        let open = |tasks: &[Task]| {
            tasks
                .iter()
                .filter(|task| !task.completed)
                .cloned()
                .collect::<Vec<_>>()
        };
        Self {
            do_it: open(&self.do_it),
            schedule: open(&self.schedule),
            get_help: open(&self.get_help),
            get_rid_of: open(&self.get_rid_of),
        }
    }

    pub fn open_count(&self) -> usize {
        Quadrant::ALL
            .iter()
            .map(|quadrant| {
                self.tasks(*quadrant)
                    .iter()
                    .filter(|task| !task.completed)
                    .count()
            })
            .sum()
    }
}
