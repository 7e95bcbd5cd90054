use std::path::PathBuf;

use params::{ParamSet, SubmodelName};

/// Contains all information required to dispatch a single submodel prediction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    /// Shell command that runs (or submits) the prediction
    pub command: String,
    /// Metrics file the prediction is expected to write, relative to the output root
    pub expected_output: PathBuf,
    /// Canonical name of the submodel
    pub submodel_name: SubmodelName,
    /// Parameters the command was built from
    pub params: ParamSet,
}
