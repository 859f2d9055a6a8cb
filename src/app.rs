use std::error::Error;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use crate::config::{ConfigError, DaybookConfig};
use crate::date_key::{DateKey, DateKeyError};
use crate::domain::record::DayRecord;
use crate::editors::Edit;
use crate::navigator::Navigator;
use crate::repository::{parse_blob, DayRepository, RepositoryError, UpdateOutcome};
use crate::store::{KeyValueStore, MemoryStore, SqliteStore};

pub struct App {
    store: Rc<dyn KeyValueStore>,
    repository: DayRepository,
    navigator: Navigator,
    config: DaybookConfig,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DayView {
    pub date: DateKey,
    pub display: String,
    pub stored: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persisted: Option<bool>,
    pub record: DayRecord,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DaySummary {
    pub date: DateKey,
    pub open_tasks: usize,
    pub big_three_done: usize,
    pub reflected: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImportSummary {
    pub days: usize,
    pub persisted: bool,
}

impl App {
    pub fn open(db_path: &str, config: DaybookConfig) -> Self {
        let store: Rc<dyn KeyValueStore> = match SqliteStore::open(db_path) {
            Ok(store) => {
                debug!("opened store at {db_path}");
                Rc::new(store)
            }
            Err(err) => {
                warn!("could not open store at {db_path}: {err}; changes will not be saved");
                Rc::new(MemoryStore::default())
            }
        };
        Self::with_store(store, config)
    }

    pub fn with_store(store: Rc<dyn KeyValueStore>, config: DaybookConfig) -> Self {
        let repository = DayRepository::load(Rc::clone(&store), &config.storage_key);
        let navigator = Navigator::new(load_cursor(&*store, &config.cursor_key));
        Self {
            store,
            repository,
            navigator,
            config,
        }
    }

    pub fn current_date(&self) -> DateKey {
        self.navigator.current()
    }

    pub fn step(&mut self, from: DateKey, delta: i64) -> Result<DayView, AppError> {
        let date = self.navigator.step_from(from, delta)?;
        self.save_cursor();
        Ok(self.view(date))
    }

    pub fn go_to_today(&mut self) -> DayView {
        let date = self.navigator.go_to_today();
        self.save_cursor();
        self.view(date)
    }

    pub fn go_to(&mut self, date: DateKey) -> DayView {
        let date = self.navigator.go_to(date);
        self.save_cursor();
        self.view(date)
    }

    pub fn view(&self, date: DateKey) -> DayView {
        DayView {
            date,
            display: date.display_long(),
            stored: self.repository.is_stored(date),
            persisted: None,
            record: self.repository.resolve(date),
        }
    }

    pub fn edit(&mut self, date: DateKey, edit: Edit) -> Result<DayView, AppError> {
        let outcome = self.repository.apply(date, edit)?;
        Ok(updated_view(date, outcome))
    }

    pub fn edit_all(&mut self, date: DateKey, edits: Vec<Edit>) -> Result<DayView, AppError> {
        let outcome = self.repository.apply_all(date, edits)?;
        Ok(updated_view(date, outcome))
    }

    pub fn patch(&mut self, date: DateKey, partial: &Value) -> Result<DayView, AppError> {
        if !partial.is_object() {
            return Err(AppError::InvalidArgument(
                "patch must be a JSON object".to_string(),
            ));
        }
        let outcome = self.repository.update(date, partial)?;
        Ok(updated_view(date, outcome))
    }

    pub fn list_days(&self) -> Vec<DaySummary> {
        self.repository
            .days()
            .iter()
            .map(|(date, record)| summarize(*date, record))
            .collect()
    }

    pub fn export_blob(&self) -> Result<String, AppError> {
        Ok(self.repository.to_blob()?)
    }

    pub fn import_blob(&mut self, raw: &str) -> Result<ImportSummary, AppError> {
        let mut days = parse_blob(raw)?;
        for (date, record) in days.iter_mut() {
            record.date = Some(*date);
        }
        let count = days.len();
        let persisted = self.repository.replace_all(days);
        debug!("imported {count} day record(s)");
        Ok(ImportSummary {
            days: count,
            persisted,
        })
    }

    fn save_cursor(&self) {
        let value = self.navigator.current().to_string();
        if let Err(err) = self.store.set(&self.config.cursor_key, &value) {
            warn!(
                "could not save cursor under '{}': {err}",
                self.config.cursor_key
            );
        }
    }
}

fn load_cursor(store: &dyn KeyValueStore, cursor_key: &str) -> DateKey {
    match store.get(cursor_key) {
        Ok(Some(raw)) => match raw.parse::<DateKey>() {
            Ok(date) => date,
            Err(err) => {
                warn!("ignoring saved cursor under '{cursor_key}': {err}");
                DateKey::today()
            }
        },
        Ok(None) => DateKey::today(),
        Err(err) => {
            warn!("could not read cursor under '{cursor_key}': {err}");
            DateKey::today()
        }
    }
}

fn updated_view(date: DateKey, outcome: UpdateOutcome) -> DayView {
    DayView {
        date,
        display: date.display_long(),
        stored: true,
        persisted: Some(outcome.persisted),
        record: outcome.record,
    }
}

fn summarize(date: DateKey, record: &DayRecord) -> DaySummary {
    let big_three_done = record
        .work
        .big_three
        .iter()
        .chain(record.personal.big_three.iter())
        .filter(|task| task.completed)
        .count();
    let reflection = &record.reflection;
    let reflected = [&reflection.rose, &reflection.bud, &reflection.thorn, &reflection.laugh]
        .into_iter()
        .chain(reflection.gratitude.iter())
        .any(|answer| !answer.trim().is_empty());
    DaySummary {
        date,
        open_tasks: record.work.eisenhower.open_count() + record.personal.eisenhower.open_count(),
        big_three_done,
        reflected,
    }
}

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    DateKey(DateKeyError),
    Repository(RepositoryError),
    Config(ConfigError),
    InvalidArgument(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "I/O error: {}", err),
            AppError::Json(err) => write!(f, "invalid day records: {}", err),
            AppError::DateKey(err) => write!(f, "{}", err),
            AppError::Repository(err) => write!(f, "{}", err),
            AppError::Config(err) => write!(f, "{}", err),
            AppError::InvalidArgument(message) => write!(f, "{}", message),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::DateKey(err) => Some(err),
            AppError::Repository(err) => Some(err),
            AppError::Config(err) => Some(err),
            AppError::InvalidArgument(_) => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Json(value)
    }
}

impl From<DateKeyError> for AppError {
    fn from(value: DateKeyError) -> Self {
        AppError::DateKey(value)
    }
}

impl From<RepositoryError> for AppError {
    fn from(value: RepositoryError) -> Self {
        AppError::Repository(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}
