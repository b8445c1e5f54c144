//! # Muster Core
//!
//! The engine behind the `muster` CLI - tracks named agents grouped into
//! suites, activates subsets of them on demand, advances their progress over
//! discrete simulation ticks, and persists the resulting state after every
//! mutation.
//!
//! ## Architecture
//!
//! - `catalog` - the static suite -> agents -> tasks deployment table
//! - `state/` - initiative and agent data model plus session persistence
//! - `deploy/` - activation coordinator and progress simulation
//!
//! ## Usage
//!
//! ```rust,ignore
//! use muster_core::{
//!     DeploymentCatalog, DeploymentCoordinator, InitiativeStore, SessionStore,
//! };
//!
//! let sessions = SessionStore::open_default().await?;
//! let coordinator = DeploymentCoordinator::new(DeploymentCatalog::builtin());
//! let mut store = InitiativeStore::new();
//! store.create(coordinator.catalog(), &sessions, "demo", "").await?;
//! coordinator.activate(&mut store, &sessions, &["semantic".into()]).await?;
//! ```

pub mod catalog;
pub mod deploy;
pub mod error;
pub mod state;

pub use catalog::{DeploymentCatalog, ExecutionMode, SuiteSpec};
pub use deploy::{
    ActivationReport, DeploymentCoordinator, IncrementSource, ProgressSimulator, TickReport,
    UniformIncrement,
};
pub use error::CoordinationError;
pub use state::{
    Agent, AgentStatus, Initiative, InitiativeStatus, InitiativeStore, SessionError, SessionStore,
};
