use std::fmt::Display;

use params::{ConfigError, Horizon, Loss, Margin, Source, DEFAULT_MODEL_NAME};

use crate::Grid;

/// The declared dimensions of a sweep: fixed scalars plus the swept lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepConfig {
    pub model_name: String,
    pub train_years: u32,
    pub first_day: u32,
    pub fit_intercept: bool,
    pub loss: Loss,
    pub last_days: Vec<u32>,
    pub margins: Vec<Margin>,
    pub forecast_with: Vec<Source>,
    pub debias_with: Vec<Source>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_owned(),
            train_years: 20,
            first_day: 1,
            fit_intercept: true,
            loss: Loss::Mse,
            last_days: vec![1, 7, 14, 28, 42],
            margins: vec![
                Margin::Days(0),
                Margin::Days(14),
                Margin::Days(28),
                Margin::Days(35),
            ],
            forecast_with: vec![Source::PerturbedAndControl],
            debias_with: vec![Source::PerturbedAndControl],
        }
    }
}

impl SweepConfig {
    /// Check that every combination in the grid is valid and uniquely named.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_name.is_empty() || self.model_name.contains(&['/', '\\', '\0'][..]) {
            return Err(ConfigError::InvalidModelName(self.model_name.clone()));
        }
        if let Some(last_day) = self.last_days.iter().find(|d| **d < self.first_day) {
            return Err(ConfigError::InvertedWindow(self.first_day, *last_day));
        }
        check_unique("last_days", &self.last_days)?;
        check_unique("margins", &self.margins)?;
        check_unique("forecast_with", &self.forecast_with)?;
        check_unique("debias_with", &self.debias_with)?;
        Ok(())
    }

    /// Validate, then create a fresh iterator over this config's grid for `horizon`.
    pub fn grid(&self, horizon: Horizon) -> Result<Grid<'_>, ConfigError> {
        self.validate()?;
        Grid::new(self, horizon)
    }

    /// Number of combinations in the grid for `horizon`.
    pub fn grid_size(&self, horizon: Horizon) -> usize {
        crate::lead_pairs(horizon).len()
            * self.last_days.len()
            * self.margins.len()
            * self.forecast_with.len()
            * self.debias_with.len()
    }
}

fn check_unique<T>(field: &'static str, values: &[T]) -> Result<(), ConfigError>
where
    T: std::hash::Hash + Eq + Display,
{
    match util::first_duplicate(values) {
        Some(dupe) => Err(ConfigError::DuplicateValue(field, dupe.to_string())),
        None => Ok(()),
    }
}
