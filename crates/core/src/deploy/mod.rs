//! # Deployment Engine
//!
//! Activation of agent suites and tick-based progress simulation.

pub mod coordinator;
pub mod simulator;

pub use coordinator::{ActivationReport, DeploymentCoordinator};
pub use simulator::{IncrementSource, ProgressSimulator, TickReport, UniformIncrement};
