//! # Progress Simulator
//!
//! Advances every active agent by a sampled increment per tick, completing
//! agents that cross the progress ceiling. Increments come from an injectable
//! [`IncrementSource`] so tests can replay deterministic sequences.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::CoordinationError;
use crate::state::{AgentStatus, Initiative, InitiativeStore, SessionStore};

/// Bounds for one tick's progress increment
const MIN_INCREMENT: f64 = 0.1;
const MAX_INCREMENT: f64 = 0.3;

/// Source of per-tick progress increments
pub trait IncrementSource {
    /// Sample the next increment
    fn next_increment(&mut self) -> f64;
}

/// Uniform sampling over the fixed increment range
pub struct UniformIncrement<R: Rng> {
    rng: R,
}

impl UniformIncrement<StdRng> {
    /// Non-deterministic source seeded from the OS
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic source for replayable runs
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> UniformIncrement<R> {
    /// Wrap an explicit generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> IncrementSource for UniformIncrement<R> {
    fn next_increment(&mut self) -> f64 {
        self.rng.gen_range(MIN_INCREMENT..=MAX_INCREMENT)
    }
}

/// Result of one simulation tick
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    /// Agents that advanced this tick, with their progress afterwards
    pub advanced: Vec<(String, f64)>,
    /// Agents that crossed the ceiling and completed this tick
    pub completed: Vec<String>,
}

/// Tick-based progress simulation over an initiative's active agents
pub struct ProgressSimulator<S: IncrementSource> {
    source: S,
}

impl ProgressSimulator<UniformIncrement<StdRng>> {
    /// Simulator with OS-seeded uniform increments
    pub fn from_entropy() -> Self {
        Self::new(UniformIncrement::from_entropy())
    }
}

impl<S: IncrementSource> ProgressSimulator<S> {
    /// Create a simulator over an increment source
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Advance every active agent by one sampled increment
    ///
    /// Progress never decreases and never exceeds 1.0. Pending, completed,
    /// and failed agents are untouched.
    pub fn advance(&mut self, initiative: &mut Initiative) -> TickReport {
        let mut report = TickReport::default();

        for agent in initiative
            .agents
            .iter_mut()
            .filter(|agent| agent.status == AgentStatus::Active)
        {
            let increment = self.source.next_increment();
            if agent.advance(increment) {
                info!(agent = %agent.name, "agent completed");
                report.completed.push(agent.name.clone());
            } else {
                debug!(agent = %agent.name, progress = agent.progress, "agent advanced");
            }
            report.advanced.push((agent.name.clone(), agent.progress));
        }

        report
    }

    /// Tick the store's current initiative and persist it
    ///
    /// Fails with [`CoordinationError::NoActiveInitiative`] when nothing has
    /// been created yet; callers treat that as a no-op.
    pub async fn tick(
        &mut self,
        store: &mut InitiativeStore,
        sessions: &SessionStore,
    ) -> Result<TickReport, CoordinationError> {
        let initiative = store
            .current_mut()
            .ok_or(CoordinationError::NoActiveInitiative)?;

        let report = self.advance(initiative);
        sessions.save(initiative).await?;
        Ok(report)
    }
}
