use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

/// Ground-truth variable we are forecasting.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum GroundTruth {
    ContestTmp2m,
    ContestPrecip,
    UsTmp2m,
    UsPrecip,
}

impl GroundTruth {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContestTmp2m => "contest_tmp2m",
            Self::ContestPrecip => "contest_precip",
            Self::UsTmp2m => "us_tmp2m",
            Self::UsPrecip => "us_precip",
        }
    }
}

impl FromStr for GroundTruth {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contest_tmp2m" => Ok(Self::ContestTmp2m),
            "contest_precip" => Ok(Self::ContestPrecip),
            "us_tmp2m" => Ok(Self::UsTmp2m),
            "us_precip" => Ok(Self::UsPrecip),
            _ => Err(ConfigError::InvalidGroundTruth(s.to_owned())),
        }
    }
}

impl fmt::Display for GroundTruth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forecast lead-time bucket.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Horizon {
    /// weeks 3-4
    W34,
    /// weeks 5-6
    W56,
    /// weeks 1-2
    W12,
}

impl Horizon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::W34 => "34w",
            Self::W56 => "56w",
            Self::W12 => "12w",
        }
    }
}

impl FromStr for Horizon {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "34w" => Ok(Self::W34),
            "56w" => Ok(Self::W56),
            "12w" => Ok(Self::W12),
            _ => Err(ConfigError::InvalidHorizon(s.to_owned())),
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A forecasting task: one ground-truth variable at one horizon.
///
/// Displays as `"{ground_truth}_{horizon}"`, which is also the key used
/// for selected-parameter lookups and in output paths.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Task {
    pub ground_truth: GroundTruth,
    pub horizon: Horizon,
}

impl Task {
    pub fn new(ground_truth: GroundTruth, horizon: Horizon) -> Self {
        Self {
            ground_truth,
            horizon,
        }
    }

    /// Parse both halves of a task from command-line strings.
    pub fn parse(ground_truth: &str, horizon: &str) -> Result<Self, ConfigError> {
        // horizon first, so an unknown horizon is always the error reported:
        let horizon = horizon.parse()?;
        Ok(Self::new(ground_truth.parse()?, horizon))
    }

    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.ground_truth, self.horizon)
    }
}
