use std::path::PathBuf;
use std::str::FromStr;

use grid::SweepConfig;
use params::{ConfigError, Task};

use crate::args::Args;

/// What the app should do once settings are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Enumerate the grid and dispatch a prediction per submodel.
    Sweep,
    /// Print the selected submodel's name.
    Selected,
}

/// Settings are like Args, except all the logic has
/// been applied so e.g. defaults are added in and strings are parsed.
#[derive(Debug)]
pub struct Settings {
    pub task: Task,
    pub sweep: SweepConfig,
    pub target_dates: String,
    pub cmd_prefix: String,
    pub skip_existing: bool,
    pub output_root: PathBuf,
    pub params_file: PathBuf,
    pub mode: Mode,
    pub dry_run: bool,
    pub verbose: u8,
}

impl TryFrom<Args> for Settings {
    type Error = anyhow::Error;
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let task = Task::parse(&args.ground_truth_id, &args.horizon)?;

        // empty lists on the command line mean "use the default":
        let mut sweep = SweepConfig::default();
        if !args.last_days.is_empty() {
            sweep.last_days = args.last_days;
        }
        if !args.margins.is_empty() {
            sweep.margins = parse_all(&args.margins)?;
        }
        if !args.forecast_with.is_empty() {
            sweep.forecast_with = parse_all(&args.forecast_with)?;
        }
        if !args.debias_with.is_empty() {
            sweep.debias_with = parse_all(&args.debias_with)?;
        }
        sweep.validate()?;

        let mode = if args.selected {
            Mode::Selected
        } else {
            Mode::Sweep
        };

        Ok(Self {
            task,
            sweep,
            target_dates: args.target_dates,
            cmd_prefix: args.cmd_prefix,
            skip_existing: args.skip_existing,
            output_root: PathBuf::from(args.output_root),
            params_file: PathBuf::from(args.params),
            mode,
            dry_run: args.dry_run,
            verbose: args.verbose,
        })
    }
}

fn parse_all<T>(strs: &[String]) -> Result<Vec<T>, ConfigError>
where
    T: FromStr<Err = ConfigError>,
{
    strs.iter().map(|s| s.trim().parse()).collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::Parser;
    use params::{Horizon, Margin, Source};

    fn parse(argv: &[&str]) -> anyhow::Result<Settings> {
        let args = Args::try_parse_from(argv)?;
        args.try_into()
    }

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let settings = parse(&["ecmwfpp-sweep", "contest_tmp2m", "34w"])?;
        assert_eq!(settings.task.horizon, Horizon::W34);
        assert_eq!(settings.sweep, SweepConfig::default());
        assert_eq!(settings.target_dates, "std_paper_eval");
        assert_eq!(settings.cmd_prefix, "python");
        assert!(!settings.skip_existing);
        assert_eq!(settings.mode, Mode::Sweep);
        Ok(())
    }

    #[test]
    fn test_flags() -> anyhow::Result<()> {
        let settings = parse(&[
            "ecmwfpp-sweep",
            "us_precip",
            "56w",
            "-t",
            "std_contest",
            "-c",
            "src/batch/batch_python.sh --memory 12",
            "--se",
            "--margins",
            "none,14",
            "--forecast_with",
            "c,p+c",
            "-vv",
        ])?;
        assert_eq!(settings.target_dates, "std_contest");
        assert_eq!(settings.cmd_prefix, "src/batch/batch_python.sh --memory 12");
        assert!(settings.skip_existing);
        assert_eq!(settings.sweep.margins, vec![Margin::Unbounded, Margin::Days(14)]);
        assert_eq!(
            settings.sweep.forecast_with,
            vec![Source::Control, Source::PerturbedAndControl]
        );
        assert_eq!(settings.verbose, 2);
        Ok(())
    }

    #[test]
    fn test_invalid_horizon() {
        let err = parse(&["ecmwfpp-sweep", "contest_tmp2m", "99w"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::InvalidHorizon("99w".to_owned()))
        );
    }

    #[test]
    fn test_invalid_source() {
        let err =
            parse(&["ecmwfpp-sweep", "contest_tmp2m", "34w", "--debias_with", "x"]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::InvalidSource(_))
        ));
    }

    #[test]
    fn test_selected_mode() -> anyhow::Result<()> {
        let settings = parse(&["ecmwfpp-sweep", "contest_tmp2m", "34w", "--selected"])?;
        assert_eq!(settings.mode, Mode::Selected);
        Ok(())
    }
}
