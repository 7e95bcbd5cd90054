use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::ConfigError;

/// Render a flag the way the predictor and existing submodel directories expect it.
pub fn flag_str(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

/// Loss function the submodel is tuned for.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Loss {
    #[default]
    Mse,
}

impl Loss {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mse => "mse",
        }
    }
}

impl FromStr for Loss {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mse" => Ok(Self::Mse),
            _ => Err(ConfigError::InvalidLoss(s.to_owned())),
        }
    }
}

impl fmt::Display for Loss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which ECMWF ensemble members to use for forecasting or debiasing.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Deserialize)]
pub enum Source {
    /// control run only
    #[serde(rename = "c")]
    Control,
    /// perturbed members only
    #[serde(rename = "p")]
    Perturbed,
    /// perturbed members plus control
    #[serde(rename = "p+c")]
    PerturbedAndControl,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Control => "c",
            Self::Perturbed => "p",
            Self::PerturbedAndControl => "p+c",
        }
    }
}

impl FromStr for Source {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(Self::Control),
            "p" => Ok(Self::Perturbed),
            "p+c" => Ok(Self::PerturbedAndControl),
            _ => Err(ConfigError::InvalidSource(s.to_owned())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-width in days of the day-of-year matching window.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Margin {
    Days(u32),
    /// match every day of the year
    #[default]
    Unbounded,
}

impl From<Option<u32>> for Margin {
    fn from(days: Option<u32>) -> Self {
        match days {
            Some(days) => Self::Days(days),
            None => Self::Unbounded,
        }
    }
}

impl FromStr for Margin {
    type Err = ConfigError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("none") {
            Ok(Self::Unbounded)
        } else {
            s.parse::<u32>()
                .map(Self::Days)
                .map_err(|_| ConfigError::InvalidMargin(s.to_owned()))
        }
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(days) => write!(f, "{days}"),
            Self::Unbounded => f.write_str("None"),
        }
    }
}

/// Inclusive `first..=last` range, used for both day and lead windows.
/// Can only be constructed with `first <= last`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Window {
    first: u32,
    last: u32,
}

impl Window {
    pub fn new(first: u32, last: u32) -> Result<Self, ConfigError> {
        if first > last {
            Err(ConfigError::InvertedWindow(first, last))
        } else {
            Ok(Self { first, last })
        }
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn last(&self) -> u32 {
        self.last
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

/// One fully specified combination of submodel parameters.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct ParamSet {
    /// fit an intercept when debiasing
    pub fit_intercept: bool,
    /// number of years of training data
    pub train_years: u32,
    pub margin_in_days: Margin,
    /// range of days averaged over when debiasing
    pub days: Window,
    pub loss: Loss,
    /// range of forecast leads averaged over
    pub leads: Window,
    pub forecast_with: Source,
    pub debias_with: Source,
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn test_window_invariant() {
        assert!(Window::new(1, 1).is_ok());
        assert_eq!(Window::new(15, 22).unwrap().to_string(), "15-22");
        assert_eq!(Window::new(29, 0), Err(ConfigError::InvertedWindow(29, 0)));
    }
    #[test]
    fn test_parse_margin() {
        assert_eq!("35".parse::<Margin>().unwrap(), Margin::Days(35));
        assert_eq!("none".parse::<Margin>().unwrap(), Margin::Unbounded);
        assert_eq!("None".parse::<Margin>().unwrap(), Margin::Unbounded);
        assert!("-3".parse::<Margin>().is_err());
        assert_eq!(Margin::Unbounded.to_string(), "None");
        assert_eq!(Margin::Days(0).to_string(), "0");
    }
    #[test]
    fn test_parse_source() {
        assert_eq!("p+c".parse::<Source>().unwrap(), Source::PerturbedAndControl);
        assert_eq!(
            "c+p".parse::<Source>(),
            Err(ConfigError::InvalidSource("c+p".to_owned()))
        );
    }
    #[test]
    fn test_parse_loss() {
        assert_eq!("mse".parse::<Loss>(), Ok(Loss::Mse));
        assert_eq!("mae".parse::<Loss>(), Err(ConfigError::InvalidLoss("mae".to_owned())));
    }
    #[test]
    fn test_flag_str() {
        assert_eq!(flag_str(true), "True");
        assert_eq!(flag_str(false), "False");
    }
}
