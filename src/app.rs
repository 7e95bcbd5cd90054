use anyhow::{Context, Result};
use colored::Colorize;

use params::{selected_submodel_name, JsonParamsStore, SubmodelName};

use crate::exec::{DryRunExecutor, Dispatcher, Executor, ShellExecutor, SweepReport};
use crate::fs::Fs;
use crate::plan::RequestBuilder;
use crate::settings::{Mode, Settings};
use crate::ui::Ui;

/// This struct actually runs the command-line app.
pub struct App {
    /// Interpreted command line settings
    settings: Settings,
    /// Filesystem interface
    fs: Fs,
    /// User interface
    ui: Ui,
}

impl App {
    /// Create a new `App`.
    pub fn new(settings: Settings) -> Self {
        let fs = Fs::new(&settings.output_root);
        let ui = Ui::new(settings.verbose > 0);
        Self { settings, fs, ui }
    }

    /// Run the app, using settings to determine what to do.
    pub fn run(mut self) -> Result<()> {
        match self.settings.mode {
            Mode::Selected => {
                let name = self.selected_name()?;
                println!("{name}");
            }
            Mode::Sweep => {
                self.ui.start_timer();
                let report = self.sweep()?;
                self.ui.summary(&report);
                self.ui.print_elapsed("Sweep");
            }
        }
        Ok(())
    }

    /// Enumerate the grid and dispatch each submodel with the executor chosen by settings.
    pub fn sweep(&self) -> Result<SweepReport> {
        if self.settings.dry_run {
            self.sweep_with(DryRunExecutor)
        } else {
            self.sweep_with(ShellExecutor::new(self.ui.verbose))
        }
    }

    /// Enumerate the grid and dispatch each submodel with `executor`.
    pub fn sweep_with<E: Executor>(&self, executor: E) -> Result<SweepReport> {
        let settings = &self.settings;
        self.fs.check_output_root(self.ui.verbose)?;

        let grid = settings.sweep.grid(settings.task.horizon)?;
        log::info!(
            "Sweeping {} {} submodels for {}",
            grid.len(),
            settings.sweep.model_name,
            settings.task,
        );
        if grid.len() == 0 {
            eprintln!("{}", "Grid is empty; nothing to run.".yellow());
        }

        let mut builder = RequestBuilder::new(
            &settings.sweep.model_name,
            settings.task,
            &settings.target_dates,
            &settings.cmd_prefix,
            &self.fs,
        );
        let requests = grid.map(|params| builder.build(params));

        let mut dispatcher = Dispatcher::new(executor, &self.fs, &self.ui, settings.skip_existing);
        dispatcher.run(requests).context("while running sweep")
    }

    /// Name of the selected submodel for the configured task.
    pub fn selected_name(&self) -> Result<SubmodelName> {
        let store = self.load_params_store()?;
        let settings = &self.settings;
        let name = selected_submodel_name(&store, &settings.sweep.model_name, &settings.task)?;
        Ok(name)
    }

    fn load_params_store(&self) -> Result<JsonParamsStore> {
        let path = &self.settings.params_file;
        self.ui.verbose_progress("Reading selected submodel parameters");
        let mut strbuf = String::with_capacity(0); // will be resized when read.
        self.fs
            .read_to_buf(path, &mut strbuf)
            .with_context(|| format!("while reading selected parameters file {path:?}"))?;
        let store = JsonParamsStore::from_json(&strbuf)
            .with_context(|| format!("while parsing selected parameters file {path:?}"))?;
        self.ui.done();
        self.ui
            .verbose_msg(&format!("Found selected parameters for {} tasks.", store.len()));
        Ok(store)
    }
}
