//! Terminal output — colored verdicts and plan rendering.
//!
//! Uses the `console` crate for styling. [`PlanPrinter`] renders validation
//! verdicts (green check, red cross) and plan reports.

use console::Style;

use crate::report::PlanReport;
use crate::validate::ValidationError;

/// Styled printer for validation verdicts and plan summaries.
pub struct PlanPrinter {
    green: Style,
    red: Style,
    yellow: Style,
    dim: Style,
}

impl PlanPrinter {
    pub fn new() -> Self {
        Self {
            green: Style::new().green().bold(),
            red: Style::new().red().bold(),
            yellow: Style::new().yellow(),
            dim: Style::new().dim(),
        }
    }

    pub fn print_valid(&self, name: &str) {
        println!("{} `{name}` is a valid remediation plan", self.green.apply_to("✓"));
    }

    pub fn print_invalid(&self, err: &ValidationError) {
        println!("{} invalid remediation plan: {err}", self.red.apply_to("✗"));
    }

    /// Render a plan report: header line, then stages and actions in order.
    pub fn print_report(&self, report: &PlanReport) {
        let name = if report.name.is_empty() {
            "(unnamed plan)"
        } else {
            report.name.as_str()
        };
        println!("{name} {}", self.dim.apply_to(format!("[{}]", report.state)));
        if !report.project.is_empty() || !report.service.is_empty() {
            println!(
                "  {}",
                self.dim
                    .apply_to(format!("project: {}  service: {}", report.project, report.service))
            );
        }

        if report.stages.is_empty() {
            println!("  {}", self.yellow.apply_to("no stages declared"));
            return;
        }

        for stage in &report.stages {
            let state = stage
                .state
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!("  ▸ {} {}", stage.name, self.dim.apply_to(format!("[{state}]")));
            for action in &stage.actions {
                println!("      • {action}");
            }
        }
        println!(
            "  {}",
            self.dim.apply_to(format!(
                "{} stage(s), {} action(s)",
                report.stage_count, report.action_count
            ))
        );
    }

    /// Print the report as pretty JSON for machine consumption.
    pub fn print_report_json(&self, report: &PlanReport) {
        println!(
            "{}",
            serde_json::to_string_pretty(report).unwrap_or_default()
        );
    }
}

impl Default for PlanPrinter {
    fn default() -> Self {
        Self::new()
    }
}
