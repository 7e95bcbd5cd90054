use anyhow::{Context, Result};

use crate::fs::Fs;
use crate::plan::ExecutionRequest;
use crate::ui::Ui;

use super::Executor;

/// What happened to one submodel in a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// metrics file already existed and `skip_existing` was set
    Skipped(ExecutionRequest),
    /// command was handed to the executor
    Dispatched(ExecutionRequest),
}

impl Outcome {
    pub fn request(&self) -> &ExecutionRequest {
        match self {
            Self::Skipped(req) | Self::Dispatched(req) => req,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// Ordered outcomes of every submodel in a sweep.
#[derive(Debug, Default)]
pub struct SweepReport {
    pub outcomes: Vec<Outcome>,
    /// commands were reported but not run
    pub dry_run: bool,
}

impl SweepReport {
    pub fn dispatched(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_skipped()).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }
}

/// `Dispatcher` is the struct that actually runs a sweep.
///
/// It takes each request in order, checks whether the request's metrics file
/// already exists (only when `skip_existing` is set), and otherwise hands the
/// command to its `Executor`. Each request is checked right before it would be
/// dispatched and never re-checked. Nothing is retried, and a failed child
/// process does not stop the sweep; an error from the executor itself does.
pub struct Dispatcher<'a, E> {
    executor: E,
    /// Filesystem interface
    fs: &'a Fs,
    /// User interface
    ui: &'a Ui,
    skip_existing: bool,
}

impl<'a, E: Executor> Dispatcher<'a, E> {
    pub fn new(executor: E, fs: &'a Fs, ui: &'a Ui, skip_existing: bool) -> Self {
        Self {
            executor,
            fs,
            ui,
            skip_existing,
        }
    }

    pub fn run<I>(&mut self, requests: I) -> Result<SweepReport>
    where
        I: IntoIterator<Item = ExecutionRequest>,
    {
        let requests = requests.into_iter();
        let mut report = SweepReport {
            outcomes: Vec::with_capacity(requests.size_hint().0),
            dry_run: self.executor.is_dry_run(),
        };

        for req in requests {
            let outcome = self.dispatch(req)?;
            report.outcomes.push(outcome);
        }

        Ok(report)
    }

    fn dispatch(&mut self, req: ExecutionRequest) -> Result<Outcome> {
        if self.skip_existing && self.fs.is_file(&req.expected_output) {
            self.ui.skip(req.submodel_name.as_str());
            return Ok(Outcome::Skipped(req));
        }

        self.ui.run(&req.command, self.executor.is_dry_run());
        self.executor
            .execute(&req.command)
            .with_context(|| format!("while dispatching submodel {}", req.submodel_name))?;
        Ok(Outcome::Dispatched(req))
    }
}
