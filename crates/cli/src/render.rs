//! Terminal rendering for initiative state.

use muster_core::{ActivationReport, AgentStatus, DeploymentCatalog, Initiative, TickReport};

/// Width of the progress bar in cells
const BAR_WIDTH: usize = 20;

/// Status marker for an agent
pub fn status_emoji(status: AgentStatus) -> &'static str {
    match status {
        AgentStatus::Pending => "⏳",
        AgentStatus::Active => "🔄",
        AgentStatus::Completed => "✅",
        AgentStatus::Failed => "❌",
    }
}

/// Render a progress value as a fixed-width bar
pub fn progress_bar(progress: f64) -> String {
    let filled = ((progress * BAR_WIDTH as f64) as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Print the outcome of an activation request
pub fn print_activation(report: &ActivationReport) {
    for suite in &report.unknown_suites {
        println!("  ⚠ Unknown suite: {suite}");
    }
    for agent in &report.activated {
        println!("  ✓ Activated {agent}");
    }
    println!(
        "🎮 {} active agent(s) ready. Use 'status' to monitor progress",
        report.activated.len()
    );
}

/// Print the per-agent outcome of one simulation tick
pub fn print_tick(report: &TickReport) {
    for (agent, progress) in &report.advanced {
        if report.completed.contains(agent) {
            println!("  ✅ {agent} completed!");
        } else {
            println!("  🔄 {agent}: {:.1}% complete", progress * 100.0);
        }
    }
}

/// Print the full status view of an initiative
pub fn print_status(initiative: &Initiative) {
    println!("\n🎯 Initiative: {}", initiative.name);
    println!("📅 Created: {}", initiative.created_at.format("%Y-%m-%d %H:%M"));
    println!("🔄 Status: {}", initiative.status);
    println!("\n📋 Agent Status:");
    println!("{}", "-".repeat(80));

    for agent in &initiative.agents {
        println!(
            "{} {:<25} [{}] {:5.1}%",
            status_emoji(agent.status),
            agent.name,
            progress_bar(agent.progress),
            agent.progress * 100.0
        );
        println!("   Suite: {:<15} Task: {}", agent.suite, agent.current_task);
        println!();
    }
}

/// Generate the tmux layout text: one pane per suite plus a status watch pane
pub fn tmux_layout(catalog: &DeploymentCatalog) -> String {
    let mut out = String::new();
    out.push_str("# Muster tmux layout\n");
    out.push_str(&format!(
        "# {}-pane layout, one pane per agent suite plus live agent status\n\n",
        catalog.suites().len() + 1
    ));
    out.push_str("session_name: muster\n");
    out.push_str("windows:\n");
    out.push_str("  - name: main\n");
    out.push_str("    layout: tiled\n");
    out.push_str("    panes:\n");

    for suite in catalog.suites() {
        out.push_str(&format!("      - title: \"{}\"\n", suite.name));
        out.push_str(&format!("        command: \"echo '{}'\"\n\n", suite.initial_task));
    }

    out.push_str("      - title: \"Agent Status\"\n");
    out.push_str("        command: \"watch -n 2 'muster status'\"\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_widths() {
        assert_eq!(progress_bar(0.0), "░".repeat(20));
        assert_eq!(progress_bar(1.0), "█".repeat(20));

        let half = progress_bar(0.5);
        assert_eq!(half.chars().filter(|c| *c == '█').count(), 10);
        assert_eq!(half.chars().count(), 20);
    }

    #[test]
    fn test_status_emoji() {
        assert_eq!(status_emoji(AgentStatus::Pending), "⏳");
        assert_eq!(status_emoji(AgentStatus::Completed), "✅");
    }

    #[test]
    fn test_tmux_layout_covers_all_suites() {
        let catalog = DeploymentCatalog::builtin();
        let layout = tmux_layout(&catalog);

        assert!(layout.contains("session_name: muster"));
        for suite in catalog.suites() {
            assert!(layout.contains(&format!("- title: \"{}\"", suite.name)));
        }
        assert!(layout.contains("Agent Status"));
    }
}
