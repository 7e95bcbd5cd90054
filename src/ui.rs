use colored::{ColoredString, Colorize};

use util::Timer;

use crate::exec::SweepReport;

/// All interactions with the text UI should go through this struct.
pub struct Ui {
    /// -v setting, displays extra text info to user
    pub verbose: bool,
    /// keeps track of how long the sweep took
    timer: Timer,
}

impl Ui {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            timer: Timer::now(),
        }
    }

    pub fn start_timer(&mut self) {
        if self.verbose {
            self.timer.reset();
        }
    }

    pub fn print_elapsed(&self, label: &str) {
        if self.verbose {
            self.timer.print_elapsed(label);
        }
    }

    pub fn verbose_msg(&self, msg: &str) {
        if self.verbose {
            eprintln!("{}", msg);
        }
    }

    pub fn verbose_progress(&self, msg: &str) {
        if self.verbose {
            eprint!("{}... ", msg.magenta());
        }
    }

    pub fn done(&self) {
        if self.verbose {
            eprintln!("{}.", "done".green());
        }
    }

    /// about to dispatch `cmd`, or only report it if `dry_run`
    pub fn run(&self, cmd: &str, dry_run: bool) {
        eprintln!("\n{} {cmd}", dispatch_label(dry_run));
    }

    /// metrics already exist for `submodel`
    pub fn skip(&self, submodel: &str) {
        eprintln!("\n{} metrics file exists for {submodel}", "SKIP".yellow());
    }

    pub fn summary(&self, report: &SweepReport) {
        let verb = if report.dry_run { "Would dispatch" } else { "Dispatched" };
        eprintln!(
            "\n{} {} submodels; skipped {}.",
            verb.green(),
            report.dispatched(),
            report.skipped(),
        );
    }
}

fn dispatch_label(dry_run: bool) -> ColoredString {
    if dry_run {
        "DRY RUN".yellow()
    } else {
        "RUN".green()
    }
}
