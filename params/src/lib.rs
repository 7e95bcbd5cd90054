//! Parameter sets for ecmwfpp submodels, and the canonical names derived from them.
//!
//! Every on-disk location of a submodel's forecasts and metrics is keyed by its
//! [`SubmodelName`], so [`submodel_name`] is the only place a name is ever built.

mod task;
pub use task::{GroundTruth, Horizon, Task};

mod param_set;
pub use param_set::{flag_str, Loss, Margin, ParamSet, Source, Window};

/// Canonical submodel naming
mod name;
pub use name::{submodel_name, SubmodelName};

/// Lookup of previously selected parameters
mod store;
pub use store::{
    resolve_best_params, selected_submodel_name, BestParamsStore, JsonParamsStore, ParamOverrides,
};

/// Name of the model family whose submodels we sweep.
pub const DEFAULT_MODEL_NAME: &str = "ecmwfpp";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid horizon \"{0}\" (expected one of 34w, 56w, 12w)")]
    InvalidHorizon(String),
    #[error(
        "invalid ground truth id \"{0}\" \
        (expected one of contest_tmp2m, contest_precip, us_tmp2m, us_precip)"
    )]
    InvalidGroundTruth(String),
    #[error("invalid ensemble source \"{0}\" (expected one of c, p, p+c)")]
    InvalidSource(String),
    #[error("invalid loss \"{0}\" (expected mse)")]
    InvalidLoss(String),
    #[error("invalid margin \"{0}\" (expected a non-negative integer or \"none\")")]
    InvalidMargin(String),
    #[error("window start {0} is after window end {1}")]
    InvertedWindow(u32, u32),
    #[error("model name \"{0}\" can't be used as a path component")]
    InvalidModelName(String),
    #[error("{0} contains duplicate value {1}")]
    DuplicateValue(&'static str, String),
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("no selected submodel parameters for task \"{0}\"")]
pub struct LookupError(pub String);

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error("selected parameters are invalid: {0}")]
    Config(#[from] ConfigError),
}
