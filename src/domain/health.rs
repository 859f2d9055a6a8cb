use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{fold_choice, ParseChoiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    pub fn as_str(self) -> &'static str {
        match self {
            Meal::Breakfast => "breakfast",
            Meal::Lunch => "lunch",
            Meal::Dinner => "dinner",
        }
    }
}

impl FromStr for Meal {
    type Err = ParseChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match fold_choice(value).as_str() {
            "breakfast" => Ok(Meal::Breakfast),
            "lunch" => Ok(Meal::Lunch),
            "dinner" => Ok(Meal::Dinner),
            _ => Err(ParseChoiceError::new(
                "meal",
                value,
                &["breakfast", "lunch", "dinner"],
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meals {
    pub breakfast: bool,
    pub lunch: bool,
    pub dinner: bool,
}

impl Meals {
    pub fn get(&self, meal: Meal) -> bool {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Dinner => self.dinner,
        }
    }

    pub fn set(&mut self, meal: Meal, eaten: bool) {
        match meal {
            Meal::Breakfast => self.breakfast = eaten,
            Meal::Lunch => self.lunch = eaten,
            Meal::Dinner => self.dinner = eaten,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    #[default]
    Lift,
    Spin,
    Run,
    Basketball,
    Golf,
    Walk,
    Other,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 7] = [
        WorkoutType::Lift,
        WorkoutType::Spin,
        WorkoutType::Run,
        WorkoutType::Basketball,
        WorkoutType::Golf,
        WorkoutType::Walk,
        WorkoutType::Other,
    ];

    const NAMES: &'static [&'static str] =
        &["Lift", "Spin", "Run", "Basketball", "Golf", "Walk", "Other"];

    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutType::Lift => "Lift",
            WorkoutType::Spin => "Spin",
            WorkoutType::Run => "Run",
            WorkoutType::Basketball => "Basketball",
            WorkoutType::Golf => "Golf",
            WorkoutType::Walk => "Walk",
            WorkoutType::Other => "Other",
        }
    }

    pub fn unit(self) -> WorkoutUnit {
        match self {
            WorkoutType::Spin | WorkoutType::Run | WorkoutType::Walk => WorkoutUnit::Miles,
            _ => WorkoutUnit::Minutes,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = ParseChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let folded = fold_choice(value);
        WorkoutType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| ParseChoiceError::new("workout type", value, Self::NAMES))
    }
}

impl Serialize for WorkoutType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WorkoutType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        WorkoutType::from_str(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutUnit {
    #[default]
    Minutes,
    Miles,
}

impl WorkoutUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutUnit::Minutes => "minutes",
            WorkoutUnit::Miles => "miles",
        }
    }
}

/// One logged activity. The unit is never stored independently of the type:
/// it is recomputed whenever the type is set, including on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredWorkout")]
pub struct Workout {
    #[serde(rename = "type")]
    kind: WorkoutType,
    duration: String,
    unit: WorkoutUnit,
}

impl Workout {
    pub fn new(kind: WorkoutType) -> Self {
        Self {
            kind,
            duration: String::new(),
            unit: kind.unit(),
        }
    }

    pub fn kind(&self) -> WorkoutType {
        self.kind
    }

    pub fn unit(&self) -> WorkoutUnit {
        self.unit
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn set_kind(&mut self, kind: WorkoutType) {
        self.kind = kind;
        self.unit = kind.unit();
    }

    pub fn set_duration(&mut self, duration: &str) {
        self.duration = duration.to_string();
    }
}

#[derive(Deserialize)]
struct StoredWorkout {
    #[serde(rename = "type", default)]
    kind: WorkoutType,
    #[serde(default)]
    duration: String,
}

impl From<StoredWorkout> for Workout {
    fn from(value: StoredWorkout) -> Self {
        let mut workout = Workout::new(value.kind);
        workout.duration = value.duration;
        workout
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Medication {
    pub taken: Option<bool>,
    pub what: String,
}

#[cfg(test)]
mod tests {
    use super::{Meal, Workout, WorkoutType, WorkoutUnit};

    #[test]
    fn unit_follows_type() {
        assert_eq!(WorkoutType::Run.unit(), WorkoutUnit::Miles);
        assert_eq!(WorkoutType::Spin.unit(), WorkoutUnit::Miles);
        assert_eq!(WorkoutType::Walk.unit(), WorkoutUnit::Miles);
        for kind in [
            WorkoutType::Lift,
            WorkoutType::Basketball,
            WorkoutType::Golf,
            WorkoutType::Other,
        ] {
            assert_eq!(kind.unit(), WorkoutUnit::Minutes, "{kind}");
        }
    }

    #[test]
    fn stored_unit_is_ignored_on_load() {
        let workout: Workout =
            serde_json::from_str(r#"{"type":"Run","duration":"3.1","unit":"minutes"}"#)
                .expect("workout should parse");
        assert_eq!(workout.kind(), WorkoutType::Run);
        assert_eq!(workout.unit(), WorkoutUnit::Miles);
        assert_eq!(workout.duration(), "3.1");

        let value = serde_json::to_value(&workout).expect("workout should serialize");
        assert_eq!(
            value,
            serde_json::json!({"type": "Run", "duration": "3.1", "unit": "miles"})
        );
    }

    #[test]
    fn parses_types_and_meals_case_insensitively() {
        assert_eq!(
            "basketball".parse::<WorkoutType>().unwrap(),
            WorkoutType::Basketball
        );
        assert!("yoga".parse::<WorkoutType>().is_err());
        assert_eq!("Dinner".parse::<Meal>().unwrap(), Meal::Dinner);
        assert!("brunch".parse::<Meal>().is_err());
    }
}
