use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use serde_json::Value;
use uuid::Uuid;

use crate::date_key::DateKey;
use crate::domain::record::{derive_day, DayRecord};
use crate::editors::{apply_edit, Edit, EditError};
use crate::merge::merge_patch;
use crate::store::KeyValueStore;

pub type DayMap = BTreeMap<DateKey, DayRecord>;

pub struct DayRepository {
    store: Rc<dyn KeyValueStore>,
    storage_key: String,
    days: DayMap,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub record: DayRecord,
    pub persisted: bool,
}

impl DayRepository {
    pub fn load(store: Rc<dyn KeyValueStore>, storage_key: &str) -> Self {
        let days = load_days(&*store, storage_key);
        Self {
            store,
            storage_key: storage_key.to_string(),
            days,
        }
    }

    pub fn days(&self) -> &DayMap {
        &self.days
    }

    pub fn is_stored(&self, date: DateKey) -> bool {
        self.days.contains_key(&date)
    }

    /// The stored record for `date`, or a freshly derived one. Never writes.
    pub fn resolve(&self, date: DateKey) -> DayRecord {
        if let Some(record) = self.days.get(&date) {
            return record.clone();
        }
        let previous = date.previous().and_then(|key| self.days.get(&key));
        derive_day(date, previous)
    }

    pub fn update(
        &mut self,
        date: DateKey,
        partial: &Value,
    ) -> Result<UpdateOutcome, RepositoryError> {
        let mut merged =
            serde_json::to_value(self.resolve(date)).map_err(RepositoryError::Serialize)?;
        merge_patch(&mut merged, partial);
        let record: DayRecord =
            serde_json::from_value(merged).map_err(RepositoryError::InvalidPatch)?;
        Ok(self.store_record(date, record))
    }

    pub fn apply(&mut self, date: DateKey, edit: Edit) -> Result<UpdateOutcome, RepositoryError> {
        self.apply_all(date, [edit])
    }

    /// Runs the edits in order against the day's current record and persists
    /// once. Nothing is stored if any edit fails.
    pub fn apply_all(
        &mut self,
        date: DateKey,
        edits: impl IntoIterator<Item = Edit>,
    ) -> Result<UpdateOutcome, RepositoryError> {
        let mut record = self.resolve(date);
        for edit in edits {
            record = apply_edit(&record, edit)?;
        }
        Ok(self.store_record(date, record))
    }

    pub fn replace_all(&mut self, days: DayMap) -> bool {
        self.days = days;
        self.persist()
    }

    pub fn to_blob(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.days)
    }

    fn store_record(&mut self, date: DateKey, mut record: DayRecord) -> UpdateOutcome {
        record.date = Some(date);
        self.days.insert(date, record.clone());
        let persisted = self.persist();
        UpdateOutcome { record, persisted }
    }

    fn persist(&self) -> bool {
        let blob = match self.to_blob() {
            Ok(blob) => blob,
            Err(err) => {
                warn!("could not serialize day records: {err}");
                return false;
            }
        };
        match self.store.set(&self.storage_key, &blob) {
            Ok(()) => {
                debug!(
                    "saved {} day record(s) under '{}'",
                    self.days.len(),
                    self.storage_key
                );
                true
            }
            Err(err) => {
                warn!(
                    "could not save day records under '{}': {err}",
                    self.storage_key
                );
                false
            }
        }
    }
}

pub fn parse_blob(raw: &str) -> Result<DayMap, serde_json::Error> {
    serde_json::from_str(raw)
}

fn load_days(store: &dyn KeyValueStore, storage_key: &str) -> DayMap {
    let raw = match store.get(storage_key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no saved day records under '{storage_key}'; starting fresh");
            return DayMap::new();
        }
        Err(err) => {
            warn!("could not read '{storage_key}': {err}; starting fresh");
            return DayMap::new();
        }
    };

    match parse_blob(&raw) {
        Ok(days) => {
            debug!("loaded {} day record(s) from '{storage_key}'", days.len());
            days
        }
        Err(err) => {
            let backup_key = format!("{storage_key}.corrupt-{}", Uuid::now_v7());
            match store.set(&backup_key, &raw) {
                Ok(()) => warn!(
                    "saved day records under '{storage_key}' are unreadable ({err}); \
                     moved them to '{backup_key}' and starting fresh"
                ),
                Err(backup_err) => warn!(
                    "saved day records under '{storage_key}' are unreadable ({err}) \
                     and could not be backed up ({backup_err}); starting fresh"
                ),
            }
            DayMap::new()
        }
    }
}

#[derive(Debug)]
pub enum RepositoryError {
    InvalidPatch(serde_json::Error),
    Serialize(serde_json::Error),
    Edit(EditError),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::InvalidPatch(err) => {
                write!(f, "patch does not fit the day record: {}", err)
            }
            RepositoryError::Serialize(err) => write!(f, "could not serialize day: {}", err),
            RepositoryError::Edit(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RepositoryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RepositoryError::InvalidPatch(err) => Some(err),
            RepositoryError::Serialize(err) => Some(err),
            RepositoryError::Edit(err) => Some(err),
        }
    }
}

impl From<EditError> for RepositoryError {
    fn from(value: EditError) -> Self {
        RepositoryError::Edit(value)
    }
}

#[cfg(test)]
mod tests;
