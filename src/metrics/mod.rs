//! Trust metric evaluators.
//!
//! Each metric is a named, weighted, independently-computed signal in [0,1].
//! The set is closed: [`Metric`] enumerates every evaluator, and each variant
//! carries its own weight and evaluation logic with no shared mutable state.
//!
//! Evaluation never fails. Every evaluator contains its own API failures and
//! degrades to a defined fallback score; what escapes the boundary is always
//! a [`MetricResult`] with a score clamped to [0,1] and the wall-clock time
//! that evaluator spent on its own work.

mod bus_factor;
mod correctness;
mod issues;
mod license;
mod ramp_up;
mod responsive_maintainer;

use crate::hosting::{Client, RepoSpec};
use std::time::Instant;

const LOG_TARGET: &str = "   metrics";

/// The closed set of trust metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// How quickly a newcomer can ramp up: discussions plus README quality
    RampUp,
    /// Issue hygiene: the fraction of filed issues that got closed
    Correctness,
    /// Contributor diversity relative to a healthy project size
    BusFactor,
    /// How quickly maintainers close issues
    ResponsiveMaintainer,
    /// Whether the repository declares a license
    License,
}

/// Every metric, in output order.
pub const ALL_METRICS: [Metric; 5] = [
    Metric::RampUp,
    Metric::Correctness,
    Metric::BusFactor,
    Metric::ResponsiveMaintainer,
    Metric::License,
];

/// The score and wall-clock latency of one metric evaluation.
#[derive(Debug, Clone, Copy)]
pub struct MetricResult {
    /// Bounded score in [0,1]
    pub score: f64,
    /// Wall-clock duration of this evaluator's own work, in seconds
    pub latency: f64,
}

impl Metric {
    /// The identifier used as the output field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::RampUp => "RampUp",
            Self::Correctness => "Correctness",
            Self::BusFactor => "BusFactor",
            Self::ResponsiveMaintainer => "ResponsiveMaintainer",
            Self::License => "License",
        }
    }

    /// Relative weight, fixed at construction. Maintenance responsiveness
    /// dominates the trust assessment.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Self::ResponsiveMaintainer => 3,
            Self::RampUp | Self::Correctness | Self::BusFactor | Self::License => 1,
        }
    }

    /// Evaluate this metric against a resolved repository.
    ///
    /// A resolved URL that did not identify a repository arrives as `None`;
    /// every metric then reports its fallback score. The returned score is
    /// clamped to [0,1] regardless of intermediate arithmetic.
    pub async fn evaluate(self, client: &Client, repo: Option<&RepoSpec>) -> MetricResult {
        let start = Instant::now();

        let score = match repo {
            Some(repo) => match self {
                Self::RampUp => ramp_up::calculate(client, repo).await,
                Self::Correctness => correctness::calculate(client, repo).await,
                Self::BusFactor => bus_factor::calculate(client, repo).await,
                Self::ResponsiveMaintainer => responsive_maintainer::calculate(client, repo).await,
                Self::License => license::calculate(client, repo).await,
            },
            None => {
                log::debug!(target: LOG_TARGET, "No repository to evaluate for {}, using fallback score", self.name());
                0.0
            }
        };

        MetricResult {
            score: score.clamp(0.0, 1.0),
            latency: start.elapsed().as_secs_f64(),
        }
    }
}
