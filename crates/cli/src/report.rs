//! Plan rendering for the terminal and JSON output.

use serde::Serialize;
use std::fs;
use std::path::Path;
use truck_loader::{LoadingInstruction, LoadingPlan, PlanSummary};

/// A loading plan prepared for output.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    /// Aggregate statistics.
    pub summary: PlanSummary,
    /// Instructions in loading order.
    pub instructions: Vec<LoadingInstruction>,
}

impl PlanReport {
    /// Builds a report from a plan.
    pub fn new(plan: &LoadingPlan) -> Self {
        Self {
            summary: PlanSummary::from(plan),
            instructions: plan.steps().collect(),
        }
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Writes the report to a JSON file.
    pub fn save_json(&self, path: &Path) -> anyhow::Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Renders the instructions as a text table.
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:>5}  {:>8}  {:>6}  {:>6}  {:<10}\n",
            "STEP", "CRATE", "X", "Y", "TURN"
        ));
        out.push_str(&format!("{:-<45}\n", ""));
        for ins in &self.instructions {
            out.push_str(&format!(
                "{:>5}  {:>8}  {:>6}  {:>6}  {:<10}\n",
                ins.loading_step_number,
                ins.crate_id,
                ins.top_left_x,
                ins.top_left_y,
                turn_label(ins)
            ));
        }
        out
    }

    /// Prints the table and a summary line.
    pub fn print_summary(&self) {
        print!("{}", self.to_table());
        println!();
        println!(
            "Loaded {} crates, utilization {:.1}%, {} turned, {}ms",
            self.summary.crates_loaded,
            self.summary.utilization_percent,
            self.summary.turned_count,
            self.summary.time_ms
        );
    }
}

fn turn_label(ins: &LoadingInstruction) -> &'static str {
    match (ins.turn_horizontal, ins.turn_vertical) {
        (true, _) => "horizontal",
        (false, true) => "vertical",
        (false, false) => "-",
    }
}
