use params::{flag_str, ParamSet, Task};

/// Utility for building the command line that runs one submodel prediction.
/// Note that it modifies a String reference held internally;
/// read that String to get the command.
#[derive(Debug)]
pub struct CommandBuilder<'a> {
    strbuf: &'a mut String,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(strbuf: &'a mut String) -> Self {
        Self { strbuf }
    }
}

impl CommandBuilder<'_> {
    /// user-supplied prefix, e.g. `python` or a batch submission script
    pub fn write_prefix(&mut self, cmd_prefix: &str) {
        self.strbuf.clear();
        self.strbuf.push_str(cmd_prefix);
    }

    /// predictor module; quoted so batch wrappers pass it through as one arg
    pub fn write_module(&mut self, model_name: &str) {
        self.strbuf.push_str(" \"-m subseasonal_toolkit.models.");
        self.strbuf.push_str(model_name);
        self.strbuf.push_str(".batch_predict\"");
    }

    /// positional task args and target dates
    pub fn write_task(&mut self, task: &Task, target_dates: &str) {
        self.write_arg(task.ground_truth.as_str());
        self.write_arg(task.horizon.as_str());
        self.write_flag("-t", target_dates);
    }

    /// one flag per parameter, in the order the predictor's parser lists them.
    // NB the intercept flag is repeated after `-m`; keep in lock-step with batch_predict's flags.
    pub fn write_params(&mut self, params: &ParamSet) {
        let intercept = flag_str(params.fit_intercept);
        self.write_flag("-y", params.train_years);
        self.write_flag("-i", intercept);
        self.write_flag("-m", params.margin_in_days);
        self.write_flag("-i", intercept);
        self.write_flag("-fd", params.days.first());
        self.write_flag("-ld", params.days.last());
        self.write_flag("-fl", params.leads.first());
        self.write_flag("-ll", params.leads.last());
        self.write_flag("-fw", params.forecast_with);
        self.write_flag("-dw", params.debias_with);
    }

    fn write_arg(&mut self, arg: &str) {
        self.strbuf.push(' ');
        self.strbuf.push_str(arg);
    }

    fn write_flag<T: std::fmt::Display>(&mut self, flag: &str, val: T) {
        use std::fmt::Write;
        self.strbuf.push(' ');
        self.strbuf.push_str(flag);
        // writing to a String can't fail:
        let _ = write!(self.strbuf, " {val}");
    }
}
