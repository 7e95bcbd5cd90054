use params::{submodel_name, ParamSet, Task};

use crate::fs::Fs;

use super::{CommandBuilder, ExecutionRequest};

/// Builds an `ExecutionRequest` for each parameter set in a sweep.
/// Everything except the parameters is shared by every request in the sweep.
pub struct RequestBuilder<'a> {
    model_name: &'a str,
    task: Task,
    target_dates: &'a str,
    cmd_prefix: &'a str,
    fs: &'a Fs,
    /// scratch space for assembling commands
    strbuf: String,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(
        model_name: &'a str,
        task: Task,
        target_dates: &'a str,
        cmd_prefix: &'a str,
        fs: &'a Fs,
    ) -> Self {
        Self {
            model_name,
            task,
            target_dates,
            cmd_prefix,
            fs,
            strbuf: String::with_capacity(256),
        }
    }

    /// Name the submodel, predict where its metrics will land, and build its command.
    pub fn build(&mut self, params: ParamSet) -> ExecutionRequest {
        let name = submodel_name(self.model_name, &params);
        let expected_output = self
            .fs
            .rmse_file(self.model_name, &name, &self.task, self.target_dates);

        let mut cmd = CommandBuilder::new(&mut self.strbuf);
        cmd.write_prefix(self.cmd_prefix);
        cmd.write_module(self.model_name);
        cmd.write_task(&self.task, self.target_dates);
        cmd.write_params(&params);

        ExecutionRequest {
            command: self.strbuf.clone(),
            expected_output,
            submodel_name: name,
            params,
        }
    }
}
