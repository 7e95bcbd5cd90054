use std::iter::FusedIterator;

use params::{ConfigError, Horizon, ParamSet, Window};

use crate::SweepConfig;

// lead, last_day, margin, forecast_with, debias_with:
const DIMS: usize = 5;

/// Iterator over every `ParamSet` in a sweep, outermost dimension first.
///
/// Works like an odometer: the last index spins fastest, and carries into
/// the one before it when it wraps. Cloning a `Grid` before iterating gives
/// an independent copy that yields the same sequence.
#[derive(Debug, Clone)]
pub struct Grid<'a> {
    config: &'a SweepConfig,
    leads: Vec<Window>,
    days: Vec<Window>,
    /// current position in each dimension
    idx: [usize; DIMS],
    /// length of each dimension
    lens: [usize; DIMS],
    remaining: usize,
}

impl<'a> Grid<'a> {
    pub(crate) fn new(config: &'a SweepConfig, horizon: Horizon) -> Result<Self, ConfigError> {
        let leads = crate::lead_pairs(horizon)
            .iter()
            .map(|(first, last)| Window::new(*first, *last))
            .collect::<Result<Vec<_>, _>>()?;
        let days = config
            .last_days
            .iter()
            .map(|last| Window::new(config.first_day, *last))
            .collect::<Result<Vec<_>, _>>()?;
        let lens = [
            leads.len(),
            days.len(),
            config.margins.len(),
            config.forecast_with.len(),
            config.debias_with.len(),
        ];
        let remaining: usize = lens.iter().product();
        log::debug!("Grid for {horizon} has dimensions {lens:?} ({remaining} combinations)");
        Ok(Self {
            config,
            leads,
            days,
            idx: [0; DIMS],
            lens,
            remaining,
        })
    }

    fn current(&self) -> ParamSet {
        let [lead, day, margin, fw, dw] = self.idx;
        ParamSet {
            fit_intercept: self.config.fit_intercept,
            train_years: self.config.train_years,
            margin_in_days: self.config.margins[margin],
            days: self.days[day],
            loss: self.config.loss,
            leads: self.leads[lead],
            forecast_with: self.config.forecast_with[fw],
            debias_with: self.config.debias_with[dw],
        }
    }

    fn advance(&mut self) {
        for dim in (0..DIMS).rev() {
            self.idx[dim] += 1;
            if self.idx[dim] < self.lens[dim] {
                return;
            }
            self.idx[dim] = 0;
        }
    }
}

impl Iterator for Grid<'_> {
    type Item = ParamSet;

    fn next(&mut self) -> Option<ParamSet> {
        if self.remaining == 0 {
            return None;
        }
        let params = self.current();
        self.remaining -= 1;
        self.advance();
        Some(params)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Grid<'_> {}

impl FusedIterator for Grid<'_> {}

#[cfg(test)]
mod test {
    use super::*;
    use params::{submodel_name, Margin, Source};

    fn leads(p: &ParamSet) -> (u32, u32) {
        (p.leads.first(), p.leads.last())
    }

    #[test]
    fn test_34w_default_grid() {
        let config = SweepConfig::default();
        let grid = config.grid(Horizon::W34).unwrap();
        assert_eq!(grid.len(), 80);
        let all: Vec<ParamSet> = grid.collect();
        assert_eq!(all.len(), 80);

        // outermost dimension is the lead window:
        assert_eq!(leads(&all[0]), (29, 29));
        assert_eq!(leads(&all[20]), (0, 29));
        assert_eq!(leads(&all[40]), (15, 22));
        assert_eq!(leads(&all[79]), (15, 15));

        // then last_day, then margin:
        assert_eq!(all[0].days.last(), 1);
        assert_eq!(all[0].margin_in_days, Margin::Days(0));
        assert_eq!(all[1].margin_in_days, Margin::Days(14));
        assert_eq!(all[3].margin_in_days, Margin::Days(35));
        assert_eq!(all[4].days.last(), 7);
        assert_eq!(all[4].margin_in_days, Margin::Days(0));
        assert_eq!(all[19].days.last(), 42);

        for p in &all {
            assert_eq!(p.days.first(), 1);
            assert!(p.fit_intercept);
            assert_eq!(p.train_years, 20);
        }
    }

    #[test]
    fn test_56w_default_grid() {
        let config = SweepConfig::default();
        let names: Vec<String> = config
            .grid(Horizon::W56)
            .unwrap()
            .map(|p| submodel_name(&config.model_name, &p).into_string())
            .collect();
        assert_eq!(names.len(), 20);
        assert!(names.iter().all(|n| n.contains("leads29-29")));
    }

    #[test]
    fn test_12w_grid() {
        let config = SweepConfig::default();
        let all: Vec<ParamSet> = config.grid(Horizon::W12).unwrap().collect();
        assert_eq!(all.len(), 20);
        assert!(all.iter().all(|p| leads(p) == (1, 1)));
    }

    #[test]
    fn test_inner_dimensions_spin_fastest() {
        let config = SweepConfig {
            last_days: vec![14],
            margins: vec![Margin::Unbounded],
            forecast_with: vec![Source::Control, Source::PerturbedAndControl],
            debias_with: vec![Source::Perturbed, Source::Control],
            ..SweepConfig::default()
        };
        let pairs: Vec<(Source, Source)> = config
            .grid(Horizon::W56)
            .unwrap()
            .map(|p| (p.forecast_with, p.debias_with))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (Source::Control, Source::Perturbed),
                (Source::Control, Source::Control),
                (Source::PerturbedAndControl, Source::Perturbed),
                (Source::PerturbedAndControl, Source::Control),
            ]
        );
    }

    #[test]
    fn test_grid_is_deterministic_and_restartable() {
        let config = SweepConfig::default();
        let grid = config.grid(Horizon::W34).unwrap();
        let first: Vec<ParamSet> = grid.clone().collect();
        let second: Vec<ParamSet> = grid.collect();
        let third: Vec<ParamSet> = config.grid(Horizon::W34).unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(first, third);
    }

    #[test]
    fn test_names_are_unique() {
        let config = SweepConfig::default();
        let names: Vec<_> = config
            .grid(Horizon::W34)
            .unwrap()
            .map(|p| submodel_name(&config.model_name, &p))
            .collect();
        assert_eq!(util::first_duplicate(&names), None);
    }

    #[test]
    fn test_empty_dimension() {
        let config = SweepConfig {
            margins: vec![],
            ..SweepConfig::default()
        };
        let mut grid = config.grid(Horizon::W34).unwrap();
        assert_eq!(grid.len(), 0);
        assert_eq!(grid.next(), None);
        assert_eq!(grid.next(), None);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let config = SweepConfig::default();
        let mut grid = config.grid(Horizon::W56).unwrap();
        grid.next();
        grid.next();
        assert_eq!(grid.len(), 18);
        assert_eq!(grid.count(), 18);
    }
}
