use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{fold_choice, ParseChoiceError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Positive,
    Neutral,
    Negative,
}

impl Rating {
    pub fn as_str(self) -> &'static str {
        match self {
            Rating::Positive => "positive",
            Rating::Neutral => "neutral",
            Rating::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    Flag,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    ExpressWife,
    ExpressSon,
    KeptPromises,
    Read15Min,
    ActHealthy,
    DailyDevotional,
    Meditate5Min,
}

impl Goal {
    pub const ALL: [Goal; 7] = [
        Goal::ExpressWife,
        Goal::ExpressSon,
        Goal::KeptPromises,
        Goal::Read15Min,
        Goal::ActHealthy,
        Goal::DailyDevotional,
        Goal::Meditate5Min,
    ];

    const NAMES: &'static [&'static str] = &[
        "express-wife",
        "express-son",
        "kept-promises",
        "read-15-min",
        "act-healthy",
        "daily-devotional",
        "meditate-5-min",
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Goal::ExpressWife => "expressWife",
            Goal::ExpressSon => "expressSon",
            Goal::KeptPromises => "keptPromises",
            Goal::Read15Min => "read15Min",
            Goal::ActHealthy => "actHealthy",
            Goal::DailyDevotional => "dailyDevotional",
            Goal::Meditate5Min => "meditate5Min",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::ExpressWife => "Express Affection with Wife",
            Goal::ExpressSon => "Express Affection with Son",
            Goal::KeptPromises => "Kept Promises to Myself",
            Goal::Read15Min => "Read for 15 Minutes",
            Goal::ActHealthy => "Act Like a Healthy Person Today",
            Goal::DailyDevotional => "Daily Devotional",
            Goal::Meditate5Min => "Meditate for 5 Minutes",
        }
    }

    pub fn kind(self) -> GoalKind {
        match self {
            Goal::ExpressWife | Goal::ExpressSon => GoalKind::Rating,
            _ => GoalKind::Flag,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = ParseChoiceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let folded = fold_choice(value);
        Goal::ALL
            .into_iter()
            .find(|goal| goal.as_str().eq_ignore_ascii_case(&folded))
            .ok_or_else(|| ParseChoiceError::new("goal", value, Self::NAMES))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalValue {
    Flag(bool),
    Rating(Rating),
}

impl GoalValue {
    pub fn kind(self) -> GoalKind {
        match self {
            GoalValue::Flag(_) => GoalKind::Flag,
            GoalValue::Rating(_) => GoalKind::Rating,
        }
    }

    pub fn parse_optional(raw: &str) -> Result<Option<Self>, ParseChoiceError> {
        match fold_choice(raw).as_str() {
            "yes" | "y" | "true" => Ok(Some(GoalValue::Flag(true))),
            "no" | "n" | "false" => Ok(Some(GoalValue::Flag(false))),
            "positive" => Ok(Some(GoalValue::Rating(Rating::Positive))),
            "neutral" | "0" => Ok(Some(GoalValue::Rating(Rating::Neutral))),
            "negative" => Ok(Some(GoalValue::Rating(Rating::Negative))),
            "clear" | "none" | "null" => Ok(None),
            _ => Err(ParseChoiceError::new(
                "goal value",
                raw,
                &["yes", "no", "positive", "neutral", "negative", "clear"],
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalKindMismatch {
    pub goal: Goal,
    pub value: GoalValue,
}

impl fmt::Display for GoalKindMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = match self.goal.kind() {
            GoalKind::Flag => "yes or no",
            GoalKind::Rating => "positive, neutral, or negative",
        };
        write!(f, "goal '{}' takes {}", self.goal, expected)
    }
}

impl Error for GoalKindMismatch {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Goals {
    pub express_wife: Option<Rating>,
    pub express_son: Option<Rating>,
    pub kept_promises: Option<bool>,
    #[serde(rename = "read15Min")]
    pub read_15_min: Option<bool>,
    pub act_healthy: Option<bool>,
    pub daily_devotional: Option<bool>,
    #[serde(rename = "meditate5Min")]
    pub meditate_5_min: Option<bool>,
}

impl Goals {
    pub fn get(&self, goal: Goal) -> Option<GoalValue> {
        match goal {
            Goal::ExpressWife => self.express_wife.map(GoalValue::Rating),
            Goal::ExpressSon => self.express_son.map(GoalValue::Rating),
            Goal::KeptPromises => self.kept_promises.map(GoalValue::Flag),
            Goal::Read15Min => self.read_15_min.map(GoalValue::Flag),
            Goal::ActHealthy => self.act_healthy.map(GoalValue::Flag),
            Goal::DailyDevotional => self.daily_devotional.map(GoalValue::Flag),
            Goal::Meditate5Min => self.meditate_5_min.map(GoalValue::Flag),
        }
    }

    pub fn set(&mut self, goal: Goal, value: Option<GoalValue>) -> Result<(), GoalKindMismatch> {
        if let Some(value) = value {
            if value.kind() != goal.kind() {
                return Err(GoalKindMismatch { goal, value });
            }
        }
        let rating = match value {
            Some(GoalValue::Rating(rating)) => Some(rating),
            _ => None,
        };
        let flag = match value {
            Some(GoalValue::Flag(flag)) => Some(flag),
            _ => None,
        };
        match goal {
            Goal::ExpressWife => self.express_wife = rating,
            Goal::ExpressSon => self.express_son = rating,
            Goal::KeptPromises => self.kept_promises = flag,
            Goal::Read15Min => self.read_15_min = flag,
            Goal::ActHealthy => self.act_healthy = flag,
            Goal::DailyDevotional => self.daily_devotional = flag,
            Goal::Meditate5Min => self.meditate_5_min = flag,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Goal, GoalValue, Goals, Rating};

    #[test]
    fn set_and_clear_respect_goal_kind() {
        let mut goals = Goals::default();
        goals
            .set(Goal::ExpressSon, Some(GoalValue::Rating(Rating::Neutral)))
            .expect("rating goal accepts rating");
        goals
            .set(Goal::Read15Min, Some(GoalValue::Flag(false)))
            .expect("flag goal accepts flag");
        assert_eq!(
            goals.get(Goal::ExpressSon),
            Some(GoalValue::Rating(Rating::Neutral))
        );
        assert_eq!(goals.get(Goal::Read15Min), Some(GoalValue::Flag(false)));

        let err = goals
            .set(Goal::ExpressWife, Some(GoalValue::Flag(true)))
            .expect_err("flag on rating goal should fail");
        assert!(err.to_string().contains("positive, neutral, or negative"));
        assert_eq!(goals.get(Goal::ExpressWife), None);

        goals.set(Goal::Read15Min, None).expect("clear always works");
        assert_eq!(goals.get(Goal::Read15Min), None);
    }

    #[test]
    fn serializes_with_stored_goal_keys() {
        let mut goals = Goals::default();
        goals
            .set(Goal::Meditate5Min, Some(GoalValue::Flag(true)))
            .unwrap();
        goals
            .set(Goal::ExpressWife, Some(GoalValue::Rating(Rating::Positive)))
            .unwrap();
        let value = serde_json::to_value(&goals).unwrap();
        assert_eq!(value["meditate5Min"], true);
        assert_eq!(value["read15Min"], serde_json::Value::Null);
        assert_eq!(value["expressWife"], "positive");
    }

    #[test]
    fn parses_goal_names_and_values() {
        assert_eq!("read-15-min".parse::<Goal>().unwrap(), Goal::Read15Min);
        assert_eq!("dailyDevotional".parse::<Goal>().unwrap(), Goal::DailyDevotional);
        assert!("floss".parse::<Goal>().is_err());
        assert_eq!(
            GoalValue::parse_optional("Yes").unwrap(),
            Some(GoalValue::Flag(true))
        );
        assert_eq!(GoalValue::parse_optional("clear").unwrap(), None);
        assert!(GoalValue::parse_optional("maybe").is_err());
    }
}
