use std::path::PathBuf;

use params::{SubmodelName, Task};

use super::Fs;

/// Utility fns for making the paths that submodel predictions write to.
/// All paths are relative to the output root.
impl Fs {
    /// eval/metrics/$MODEL/submodel_forecasts/$SUBMODEL/$TASK
    pub fn submodel_task_dir(&self, model: &str, submodel: &SubmodelName, task: &Task) -> PathBuf {
        let mut buf = PathBuf::with_capacity(256);
        buf.push("eval");
        buf.push("metrics");
        buf.push(model);
        buf.push("submodel_forecasts");
        buf.push(submodel);
        buf.push(task.to_string());
        buf
    }

    /// eval/metrics/$MODEL/submodel_forecasts/$SUBMODEL/$TASK/rmse-$TASK-$TARGET_DATES.h5
    pub fn rmse_file(
        &self,
        model: &str,
        submodel: &SubmodelName,
        task: &Task,
        target_dates: &str,
    ) -> PathBuf {
        let mut buf = self.submodel_task_dir(model, submodel, task);
        buf.push(format!("rmse-{task}-{target_dates}.h5"));
        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use params::{submodel_name, GroundTruth, Horizon, ParamOverrides};
    use std::path::Path;

    #[test]
    fn test_rmse_file() {
        let fs = Fs::new(Path::new("."));
        let params = ParamOverrides::default().resolve().unwrap();
        let submodel = submodel_name("ecmwfpp", &params);
        let task = Task::new(GroundTruth::ContestTmp2m, Horizon::W34);
        assert_eq!(
            fs.rmse_file("ecmwfpp", &submodel, &task, "std_contest"),
            PathBuf::from(
                "eval/metrics/ecmwfpp/submodel_forecasts/\
                ecmwfpp-debiasTrue_years20_marginNone_days1-1_leads0-29_lossmse_forecastc_debiasp/\
                contest_tmp2m_34w/rmse-contest_tmp2m_34w-std_contest.h5"
            )
        );
    }
}
