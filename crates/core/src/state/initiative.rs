//! # Initiative State
//!
//! The initiative aggregate and its agents. An initiative owns a fixed roster
//! of agents, one per catalog suite, populated once at creation. Agents move
//! through a small status state machine: pending -> active -> completed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::DeploymentCatalog;
use crate::error::CoordinationError;
use crate::state::session::SessionStore;

/// Progress an agent starts with when activated
const ACTIVATION_PROGRESS: f64 = 0.1;

/// Task text an agent carries once it completes
const COMPLETED_TASK: &str = "Completed successfully";

/// Status of one agent
///
/// `Failed` is a representable value with no producing transition in the
/// current rules - it is kept for the persisted record format and for any
/// future failure-injection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Pending,
    Active,
    Completed,
    Failed,
}

/// One simulated worker unit, belonging to exactly one suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique name within the initiative
    pub name: String,
    /// Name of the owning suite
    pub suite: String,
    /// Current status
    pub status: AgentStatus,
    /// Free-text task description, advisory only
    pub current_task: String,
    /// Progress in [0.0, 1.0]
    pub progress: f64,
    /// Timestamp of the last mutation
    pub last_update: DateTime<Utc>,
}

impl Agent {
    fn new(name: &str, suite: &str, task: &str) -> Self {
        Self {
            name: name.to_string(),
            suite: suite.to_string(),
            status: AgentStatus::Pending,
            current_task: task.to_string(),
            progress: 0.0,
            last_update: Utc::now(),
        }
    }

    /// Transition pending -> active at the fixed starting progress
    ///
    /// Agents that are already active or completed are left unchanged, which
    /// makes re-activation requests idempotent. Returns whether the agent
    /// changed state.
    pub(crate) fn activate(&mut self) -> bool {
        if self.status != AgentStatus::Pending {
            return false;
        }
        self.status = AgentStatus::Active;
        self.progress = ACTIVATION_PROGRESS;
        self.last_update = Utc::now();
        true
    }

    /// Advance progress by `increment`, clamped to the 1.0 ceiling
    ///
    /// Completion is set exactly at the ceiling. Returns true when the agent
    /// completes on this call.
    pub(crate) fn advance(&mut self, increment: f64) -> bool {
        self.progress = (self.progress + increment).min(1.0);
        self.last_update = Utc::now();

        if self.progress >= 1.0 {
            self.status = AgentStatus::Completed;
            self.current_task = COMPLETED_TASK.to_string();
            true
        } else {
            false
        }
    }
}

/// Initiative-level status label
///
/// Set at creation and never transitioned by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitiativeStatus {
    Initialized,
}

impl std::fmt::Display for InitiativeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Initialized => write!(f, "initialized"),
        }
    }
}

/// The top-level unit of work: identity, metadata, and the agent roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    /// Unique time-based identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Ordered agent roster, populated once at creation
    pub agents: Vec<Agent>,
    /// Initiative-level status label
    pub status: InitiativeStatus,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
}

impl Initiative {
    /// Build an initiative with one pending agent per catalog suite
    pub fn from_catalog(catalog: &DeploymentCatalog, name: &str, description: &str) -> Self {
        let agents = catalog
            .suites()
            .iter()
            .flat_map(|suite| {
                suite
                    .agents
                    .iter()
                    .map(|agent| Agent::new(agent, &suite.name, &suite.initial_task))
            })
            .collect();

        Self {
            id: generate_initiative_id(),
            name: name.to_string(),
            description: description.to_string(),
            agents,
            status: InitiativeStatus::Initialized,
            created_at: Utc::now(),
        }
    }

    /// Find an agent by name
    pub fn agent(&self, name: &str) -> Option<&Agent> {
        self.agents.iter().find(|agent| agent.name == name)
    }
}

/// Generate a unique initiative ID (timestamp-based)
///
/// A process-local sequence number breaks ties between initiatives created
/// within the same millisecond.
fn generate_initiative_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static SEQUENCE: AtomicU64 = AtomicU64::new(0);

    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("initiative-{}-{}", Utc::now().timestamp_millis(), seq)
}

/// Holder of the process's current initiative
///
/// At most one initiative is current at a time; creating a new one replaces
/// the prior one. Passed explicitly to every operation - there is no ambient
/// global state.
#[derive(Debug, Default)]
pub struct InitiativeStore {
    current: Option<Initiative>,
}

impl InitiativeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new initiative from the catalog roster and make it current
    ///
    /// The initiative is persisted immediately; if the write fails the prior
    /// current initiative (if any) is left in place.
    pub async fn create(
        &mut self,
        catalog: &DeploymentCatalog,
        sessions: &SessionStore,
        name: &str,
        description: &str,
    ) -> Result<&Initiative, CoordinationError> {
        let initiative = Initiative::from_catalog(catalog, name, description);
        sessions.save(&initiative).await?;

        tracing::info!(id = %initiative.id, name = %initiative.name, "created initiative");
        Ok(self.current.insert(initiative))
    }

    /// The current initiative, if one has been created
    pub fn current(&self) -> Option<&Initiative> {
        self.current.as_ref()
    }

    /// Mutable access to the current initiative
    pub fn current_mut(&mut self) -> Option<&mut Initiative> {
        self.current.as_mut()
    }
}
