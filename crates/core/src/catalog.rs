//! # Deployment Catalog
//!
//! The fixed table describing every agent suite: which agents belong to it,
//! the tasks it covers, its nominal execution mode, and the suites it declares
//! as upstream dependencies. Defined once, never mutated at runtime.
//!
//! The `depends_on` edges form a directed graph, but nothing in the
//! coordinator consults it to order or gate activation - it is advisory
//! metadata carried for display and inspection.

use serde::{Deserialize, Serialize};

/// Nominal execution mode for a suite
///
/// Descriptive metadata only; no scheduler honors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    Parallel,
    Sequential,
    Continuous,
}

/// Descriptor for one agent suite
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteSpec {
    /// Suite name, unique within the catalog
    pub name: String,
    /// Names of the agents this suite owns
    pub agents: Vec<String>,
    /// Task description a freshly created agent carries while pending
    pub initial_task: String,
    /// Ordered task list for the suite
    pub tasks: Vec<String>,
    /// Nominal execution mode
    pub execution: ExecutionMode,
    /// Declared upstream suites (advisory, not enforced)
    pub depends_on: Vec<String>,
}

impl SuiteSpec {
    fn new(
        name: &str,
        agents: &[&str],
        initial_task: &str,
        tasks: &[&str],
        execution: ExecutionMode,
        depends_on: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            agents: agents.iter().map(|s| s.to_string()).collect(),
            initial_task: initial_task.to_string(),
            tasks: tasks.iter().map(|s| s.to_string()).collect(),
            execution,
            depends_on: depends_on.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The immutable suite table
#[derive(Debug, Clone)]
pub struct DeploymentCatalog {
    suites: Vec<SuiteSpec>,
}

impl DeploymentCatalog {
    /// Build the built-in catalog of six suites
    pub fn builtin() -> Self {
        let suites = vec![
            SuiteSpec::new(
                "semantic",
                &["semantic_discovery_agent"],
                "RDF ontology mapping",
                &[
                    "Extract schema from Epic, Cerner, Athena systems",
                    "Generate RDF triples for semantic mapping",
                    "Apply ML similarity algorithms",
                    "Create confidence-scored field mappings",
                ],
                ExecutionMode::Parallel,
                &[],
            ),
            SuiteSpec::new(
                "federation",
                &["graphql_federation_agent"],
                "GraphQL schema federation",
                &[
                    "Design distributed GraphQL architecture",
                    "Implement cross-organizational query coordination",
                    "Create trust management layer",
                    "Build query optimization engine",
                ],
                ExecutionMode::Parallel,
                &["semantic"],
            ),
            SuiteSpec::new(
                "ai_generation",
                &["cartridge_generation_agent"],
                "AI-powered connector creation",
                &[
                    "Analyze database schemas automatically",
                    "Generate GraphQL resolvers with AI",
                    "Create authentication handlers",
                    "Build test suites and documentation",
                ],
                ExecutionMode::Parallel,
                &["semantic"],
            ),
            SuiteSpec::new(
                "compliance",
                &["compliance_agent"],
                "HIPAA/HITECH validation",
                &[
                    "Validate HIPAA compliance requirements",
                    "Implement audit trail generation",
                    "Create data sovereignty enforcement",
                    "Generate compliance reports",
                ],
                ExecutionMode::Continuous,
                &[],
            ),
            SuiteSpec::new(
                "performance",
                &["performance_agent"],
                "Query optimization & caching",
                &[
                    "Implement multi-tier caching system",
                    "Optimize query execution planning",
                    "Monitor sub-100ms response targets",
                    "Handle graceful degradation",
                ],
                ExecutionMode::Parallel,
                &["federation"],
            ),
            SuiteSpec::new(
                "documentation",
                &["documentation_agent"],
                "Patent-quality technical docs",
                &[
                    "Generate API documentation",
                    "Create integration guides",
                    "Write compliance documentation",
                    "Produce patent-quality technical specs",
                ],
                ExecutionMode::Sequential,
                &["federation", "compliance", "ai_generation"],
            ),
        ];

        Self { suites }
    }

    /// Look up a suite by name
    pub fn lookup(&self, name: &str) -> Option<&SuiteSpec> {
        self.suites.iter().find(|suite| suite.name == name)
    }

    /// All suites in roster order
    pub fn suites(&self) -> &[SuiteSpec] {
        &self.suites
    }

    /// Names of all suites in roster order
    pub fn suite_names(&self) -> Vec<String> {
        self.suites.iter().map(|suite| suite.name.clone()).collect()
    }
}
