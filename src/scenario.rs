//! Scenario runner for batch projections and single-axis sweeps
//!
//! Orchestrates independent engine runs; each run builds a fresh engine
//! from its own parameter set, so batches parallelize freely.

use crate::params::InvestmentParameters;
use crate::projection::{ProjectionEngine, ProjectionResult};
use log::debug;
use rayon::prelude::*;

/// Base scenario plus batch and sweep helpers
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: InvestmentParameters,
}

impl ScenarioRunner {
    /// Create a runner around a base parameter set
    pub fn new(base: InvestmentParameters) -> Self {
        Self { base }
    }

    /// The base parameter set
    pub fn base(&self) -> &InvestmentParameters {
        &self.base
    }

    /// Run a single projection of the base scenario
    pub fn run(&self) -> ProjectionResult {
        ProjectionEngine::new(self.base.clone()).project()
    }

    /// Run projections for many parameter sets in parallel, preserving order
    pub fn run_batch(parameter_sets: &[InvestmentParameters]) -> Vec<ProjectionResult> {
        debug!("running batch of {} scenarios", parameter_sets.len());
        parameter_sets
            .par_iter()
            .map(|params| ProjectionEngine::new(params.clone()).project())
            .collect()
    }

    /// Project the base scenario at each loan rate (percent), in order
    pub fn sweep_loan_rate(&self, rates_pct: &[f64]) -> Vec<(f64, ProjectionResult)> {
        rates_pct
            .iter()
            .map(|&rate| {
                let mut params = self.base.clone();
                params.loan_rate_pct = rate;
                (rate, ProjectionEngine::new(params).project())
            })
            .collect()
    }

    /// Project the base scenario at each holding period, in order
    pub fn sweep_holding_period(&self, years: &[u32]) -> Vec<(u32, ProjectionResult)> {
        years
            .iter()
            .map(|&holding| {
                let mut params = self.base.clone();
                params.holding_period_years = holding;
                (holding, ProjectionEngine::new(params).project())
            })
            .collect()
    }
}
