use serde::Deserialize;

use util::HashMap;

use crate::{
    submodel_name, ConfigError, Error, Loss, LookupError, Margin, ParamSet, Source, SubmodelName,
    Task, Window,
};

/// A partially specified parameter set, as stored for a selected submodel.
/// Missing fields fall back to the defaults in [`ParamOverrides::resolve`].
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamOverrides {
    pub fit_intercept: Option<bool>,
    pub train_years: Option<u32>,
    pub margin_in_days: Option<u32>,
    pub first_day: Option<u32>,
    pub last_day: Option<u32>,
    pub loss: Option<String>,
    pub first_lead: Option<u32>,
    pub last_lead: Option<u32>,
    pub forecast_with: Option<Source>,
    pub debias_with: Option<Source>,
}

impl ParamOverrides {
    /// Fill in defaults for any unspecified fields.
    pub fn resolve(self) -> Result<ParamSet, ConfigError> {
        Ok(ParamSet {
            fit_intercept: self.fit_intercept.unwrap_or(true),
            train_years: self.train_years.unwrap_or(20),
            margin_in_days: Margin::from(self.margin_in_days),
            days: Window::new(self.first_day.unwrap_or(1), self.last_day.unwrap_or(1))?,
            loss: self.loss.as_deref().map(str::parse::<Loss>).transpose()?.unwrap_or_default(),
            leads: Window::new(self.first_lead.unwrap_or(0), self.last_lead.unwrap_or(29))?,
            forecast_with: self.forecast_with.unwrap_or(Source::Control),
            debias_with: self.debias_with.unwrap_or(Source::Perturbed),
        })
    }
}

/// Read-only source of previously selected submodel parameters, keyed by task.
pub trait BestParamsStore {
    fn lookup(&self, key: &str) -> Option<ParamOverrides>;
}

/// `BestParamsStore` backed by a JSON object mapping
/// `"{ground_truth}_{horizon}"` to parameter objects.
#[derive(Debug, Default)]
pub struct JsonParamsStore {
    entries: HashMap<String, ParamOverrides>,
}

impl JsonParamsStore {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        let entries: HashMap<String, ParamOverrides> = serde_json::from_str(text)?;
        log::debug!("Loaded selected parameters for {} tasks", entries.len());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BestParamsStore for JsonParamsStore {
    fn lookup(&self, key: &str) -> Option<ParamOverrides> {
        self.entries.get(key).cloned()
    }
}

/// Look up the selected parameters for `task`, with defaults applied.
pub fn resolve_best_params<S: BestParamsStore + ?Sized>(
    store: &S,
    task: &Task,
) -> Result<ParamSet, Error> {
    let key = task.key();
    let overrides = store.lookup(&key).ok_or(LookupError(key))?;
    Ok(overrides.resolve()?)
}

/// Name of the selected submodel of `model_name` for `task`.
pub fn selected_submodel_name<S: BestParamsStore + ?Sized>(
    store: &S,
    model_name: &str,
    task: &Task,
) -> Result<SubmodelName, Error> {
    let params = resolve_best_params(store, task)?;
    Ok(submodel_name(model_name, &params))
}
