use std::process::Command;

use anyhow::{Context, Result};
use colored::Colorize;

use super::Executor;

/// Runs each command with `sh -c`, blocking until it exits.
/// The child's stdout and stderr are inherited, and its exit status is
/// logged but otherwise ignored.
#[derive(Debug, Default)]
pub struct ShellExecutor {
    verbose: bool,
}

impl ShellExecutor {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Executor for ShellExecutor {
    fn execute(&mut self, command: &str) -> Result<()> {
        let status = Command::new("sh")
            .arg("-c")
            .arg(command)
            .status()
            .with_context(|| format!("failed to execute child process for {command:?}"))?;

        if status.success() {
            log::debug!("process finished with {status}");
        } else {
            log::warn!("process finished with {status}: {command}");
        }
        if self.verbose {
            eprintln!("{} with {status}.", "Process finished".green());
        }
        Ok(())
    }
}

/// Reports commands instead of running them.
#[derive(Debug, Default)]
pub struct DryRunExecutor;

impl Executor for DryRunExecutor {
    fn execute(&mut self, command: &str) -> Result<()> {
        log::info!("dry run; not executing {command}");
        Ok(())
    }

    fn is_dry_run(&self) -> bool {
        true
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_shell_executor_runs_command() -> Result<()> {
        let dir = tempdir()?;
        let marker = dir.path().join("marker");
        ShellExecutor::default().execute(&format!("touch {}", marker.display()))?;
        assert!(marker.exists());
        Ok(())
    }

    #[test]
    fn test_failed_child_is_not_an_error() -> Result<()> {
        ShellExecutor::default().execute("exit 3")?;
        Ok(())
    }
}
