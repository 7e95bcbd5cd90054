/// Dispatches each request in a sweep
mod dispatcher;
pub use dispatcher::{Dispatcher, Outcome, SweepReport};

/// Run a subprocess
mod run_cmd;
pub use run_cmd::{DryRunExecutor, ShellExecutor};

use anyhow::Result;

/// Something that can take a command line and run or submit it.
///
/// `Ok` only means the command was handed off; whether the prediction
/// itself succeeded is not reported back.
pub trait Executor {
    fn execute(&mut self, command: &str) -> Result<()>;

    /// True if commands are only reported, never run.
    fn is_dry_run(&self) -> bool {
        false
    }
}

impl<E: Executor + ?Sized> Executor for &mut E {
    fn execute(&mut self, command: &str) -> Result<()> {
        (**self).execute(command)
    }

    fn is_dry_run(&self) -> bool {
        (**self).is_dry_run()
    }
}
