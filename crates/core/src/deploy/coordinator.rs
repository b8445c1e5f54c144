//! # Deployment Coordinator
//!
//! Looks up requested suites in the deployment catalog and transitions their
//! pending agents to active. Unknown suite names are ignored rather than
//! rejected; the activation report carries them as a notice for the caller.

use tracing::{info, warn};

use crate::catalog::{DeploymentCatalog, SuiteSpec};
use crate::error::CoordinationError;
use crate::state::{Initiative, InitiativeStore, SessionStore};

/// Result of an activation request
#[derive(Debug, Clone)]
pub struct ActivationReport {
    /// Agents that transitioned pending -> active in this call
    pub activated: Vec<String>,
    /// Requested suite names with no catalog entry (ignored, not fatal)
    pub unknown_suites: Vec<String>,
    /// The full static deployment plan, regardless of what was requested
    pub plan: Vec<SuiteSpec>,
}

/// Activates agent suites against an initiative
pub struct DeploymentCoordinator {
    catalog: DeploymentCatalog,
}

impl DeploymentCoordinator {
    /// Create a coordinator over a catalog
    pub fn new(catalog: DeploymentCatalog) -> Self {
        Self { catalog }
    }

    /// The underlying catalog
    pub fn catalog(&self) -> &DeploymentCatalog {
        &self.catalog
    }

    /// Apply the activation transition for the requested suites
    ///
    /// For each suite found in the catalog, every owned agent that is still
    /// pending becomes active. Agents already active or completed are left
    /// unchanged, so repeating a request is a no-op.
    pub fn activate_agents(
        &self,
        initiative: &mut Initiative,
        suites: &[String],
    ) -> ActivationReport {
        let mut report = ActivationReport {
            activated: Vec::new(),
            unknown_suites: Vec::new(),
            plan: self.catalog.suites().to_vec(),
        };

        for suite in suites {
            let Some(spec) = self.catalog.lookup(suite) else {
                warn!(suite = %suite, "unknown suite requested, ignoring");
                report.unknown_suites.push(suite.clone());
                continue;
            };

            for agent in initiative
                .agents
                .iter_mut()
                .filter(|agent| spec.agents.contains(&agent.name))
            {
                if agent.activate() {
                    info!(agent = %agent.name, suite = %agent.suite, "agent activated");
                    report.activated.push(agent.name.clone());
                }
            }
        }

        report
    }

    /// Activate suites on the store's current initiative and persist it
    ///
    /// Fails with [`CoordinationError::NoActiveInitiative`] when nothing has
    /// been created yet; callers treat that as a no-op, not a fatal error.
    pub async fn activate(
        &self,
        store: &mut InitiativeStore,
        sessions: &SessionStore,
        suites: &[String],
    ) -> Result<ActivationReport, CoordinationError> {
        let initiative = store
            .current_mut()
            .ok_or(CoordinationError::NoActiveInitiative)?;

        let report = self.activate_agents(initiative, suites);
        sessions.save(initiative).await?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AgentStatus;
    use tempfile::TempDir;

    fn coordinator() -> DeploymentCoordinator {
        DeploymentCoordinator::new(DeploymentCatalog::builtin())
    }

    fn initiative(coordinator: &DeploymentCoordinator) -> Initiative {
        Initiative::from_catalog(coordinator.catalog(), "demo", "")
    }

    fn suites(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_activate_single_suite() {
        let coordinator = coordinator();
        let mut initiative = initiative(&coordinator);

        let report = coordinator.activate_agents(&mut initiative, &suites(&["semantic"]));
        assert_eq!(report.activated, vec!["semantic_discovery_agent"]);
        assert!(report.unknown_suites.is_empty());

        for agent in &initiative.agents {
            if agent.name == "semantic_discovery_agent" {
                assert_eq!(agent.status, AgentStatus::Active);
                assert_eq!(agent.progress, 0.1);
            } else {
                assert_eq!(agent.status, AgentStatus::Pending);
                assert_eq!(agent.progress, 0.0);
            }
        }
    }

    #[test]
    fn test_unknown_suite_is_a_noop() {
        let coordinator = coordinator();
        let mut initiative = initiative(&coordinator);

        let report = coordinator.activate_agents(&mut initiative, &suites(&["not_a_suite"]));
        assert!(report.activated.is_empty());
        assert_eq!(report.unknown_suites, vec!["not_a_suite"]);

        for agent in &initiative.agents {
            assert_eq!(agent.status, AgentStatus::Pending);
        }
    }

    #[test]
    fn test_activation_is_idempotent() {
        let coordinator = coordinator();
        let mut initiative = initiative(&coordinator);
        let requested = suites(&["semantic", "federation"]);

        let first = coordinator.activate_agents(&mut initiative, &requested);
        assert_eq!(first.activated.len(), 2);
        let statuses: Vec<_> = initiative.agents.iter().map(|a| a.status).collect();

        let second = coordinator.activate_agents(&mut initiative, &requested);
        assert!(second.activated.is_empty());
        let after: Vec<_> = initiative.agents.iter().map(|a| a.status).collect();
        assert_eq!(statuses, after);
    }

    #[test]
    fn test_report_carries_full_plan() {
        let coordinator = coordinator();
        let mut initiative = initiative(&coordinator);

        // The plan describes what could run, not just what was requested
        let report = coordinator.activate_agents(&mut initiative, &suites(&["semantic"]));
        assert_eq!(report.plan.len(), 6);
    }

    #[tokio::test]
    async fn test_activate_without_initiative() {
        let dir = TempDir::new().unwrap();
        let sessions = SessionStore::open(dir.path()).await.unwrap();
        let coordinator = coordinator();
        let mut store = InitiativeStore::new();

        let result = coordinator
            .activate(&mut store, &sessions, &suites(&["semantic"]))
            .await;
        assert!(matches!(result, Err(CoordinationError::NoActiveInitiative)));
    }

    #[tokio::test]
    async fn test_activate_persists_the_initiative() {
        let dir = TempDir::new().unwrap();
        let sessions = SessionStore::open(dir.path()).await.unwrap();
        let coordinator = coordinator();
        let mut store = InitiativeStore::new();
        store
            .create(coordinator.catalog(), &sessions, "demo", "")
            .await
            .unwrap();

        coordinator
            .activate(&mut store, &sessions, &suites(&["semantic"]))
            .await
            .unwrap();

        let id = store.current().unwrap().id.clone();
        let raw = std::fs::read_to_string(sessions.record_path(&id)).unwrap();
        let record: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(record["agents"][0]["status"], "active");
    }
}
