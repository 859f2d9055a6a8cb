use crate::date_key::{DateKey, DateKeyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    current: DateKey,
}

impl Navigator {
    pub fn new(start: DateKey) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> DateKey {
        self.current
    }

    pub fn step_from(&mut self, from: DateKey, delta: i64) -> Result<DateKey, DateKeyError> {
        self.current = from.add_days(delta)?;
        Ok(self.current)
    }

    #[cfg(test)]
    pub fn step(&mut self, delta: i64) -> Result<DateKey, DateKeyError> {
        self.step_from(self.current, delta)
    }

    pub fn go_to_today(&mut self) -> DateKey {
        self.current = DateKey::today();
        self.current
    }

    pub fn go_to(&mut self, date: DateKey) -> DateKey {
        self.current = date;
        self.current
    }
}
