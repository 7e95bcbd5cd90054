use std::fmt;
use std::path::Path;

use crate::{flag_str, ParamSet};

/// Canonical identifier of one submodel.
/// Used as a label and as a directory name, so it never contains a path separator.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SubmodelName(String);

impl SubmodelName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SubmodelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SubmodelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for SubmodelName {
    fn as_ref(&self) -> &Path {
        self.0.as_ref()
    }
}

/// Name a submodel of `model_name`.
///
/// Field order and prefixes are fixed: every metrics and forecast directory
/// on disk is keyed by this string, so both swept and selected submodels
/// must be named here.
pub fn submodel_name(model_name: &str, params: &ParamSet) -> SubmodelName {
    debug_assert!(!model_name.contains(&['/', '\\', '\0'][..]));
    SubmodelName(format!(
        "{model_name}-debias{}_years{}_margin{}_days{}_leads{}_loss{}_forecast{}_debias{}",
        flag_str(params.fit_intercept),
        params.train_years,
        params.margin_in_days,
        params.days,
        params.leads,
        params.loss,
        params.forecast_with,
        params.debias_with,
    ))
}
