use clap::Parser;

const CMD_NAME: &str = "ecmwfpp-sweep";
const DEFAULT_TARGET_DATES: &str = "std_paper_eval";
const DEFAULT_CMD_PREFIX: &str = "python";
const DEFAULT_PARAMS: &str = "selected_submodel.json";
const DEFAULT_ROOT: &str = ".";

/// Generate predictions for each ecmwfpp submodel in the tuning grid.
///
/// Use e.g. `-c "src/batch/batch_python.sh --memory 12 --cores 16 --hours 1"`
/// to submit each submodel to a batch queue instead of running it locally.
#[derive(Parser)]
#[command(name = CMD_NAME, version)]
pub struct Args {
    /// Ground truth id (contest_tmp2m, contest_precip, us_tmp2m, us_precip)
    pub ground_truth_id: String,

    /// Forecast horizon (34w, 56w, 12w)
    pub horizon: String,

    /// Target dates for batch prediction
    #[arg(short, long = "target_dates", value_name = "DATES")]
    #[arg(default_value = DEFAULT_TARGET_DATES)]
    pub target_dates: String,

    /// Prefix of the command used to run each submodel prediction
    #[arg(short, long = "cmd_prefix", value_name = "PREFIX")]
    #[arg(default_value = DEFAULT_CMD_PREFIX)]
    pub cmd_prefix: String,

    /// Skip submodels whose metrics file already exists
    #[arg(short, long = "skip_existing", visible_alias = "se")]
    pub skip_existing: bool,

    /// Directory that `eval/metrics` paths are relative to
    #[arg(short, long = "output_root", value_name = "DIR", default_value = DEFAULT_ROOT)]
    #[arg(env = "ECMWFPP_SWEEP_ROOT")]
    pub output_root: String,

    /// JSON file of selected submodel parameters
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_PARAMS)]
    #[arg(env = "ECMWFPP_SWEEP_PARAMS")]
    pub params: String,

    /// Print the name of the selected submodel for this task and exit
    #[arg(long)]
    pub selected: bool,

    /// Override swept last days
    #[arg(long = "last_days", value_name = "DAYS", value_delimiter = ',')]
    pub last_days: Vec<u32>,

    /// Override swept margins ("none" for an unbounded margin)
    #[arg(long, value_name = "MARGINS", value_delimiter = ',')]
    pub margins: Vec<String>,

    /// Override swept forecast sources (c, p, p+c)
    #[arg(long = "forecast_with", value_name = "SOURCES", value_delimiter = ',')]
    pub forecast_with: Vec<String>,

    /// Override swept debias sources (c, p, p+c)
    #[arg(long = "debias_with", value_name = "SOURCES", value_delimiter = ',')]
    pub debias_with: Vec<String>,

    /// Dry run; print commands but don't run them
    #[arg(short = 'n', long = "dry_run")]
    pub dry_run: bool,

    /// Print additional debugging info (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
