//! Structural advisories over an assembled stack.
//!
//! Lint findings are not errors: the stack is valid as declared, but a
//! reviewer should see these before deploying.

use std::fmt;

use tracing::warn;

use tradewinds_core::Stack;

/// One advisory finding.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    /// Every schedule rule fires on the same single weekday. The workload
    /// names imply a weekday cadence, so a single-day schedule is more
    /// likely an oversight than intent.
    SingleWeekdaySchedules { weekday: String, rules: Vec<String> },
    /// A table was declared without deletion protection.
    DeletionProtectionDisabled { table: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::SingleWeekdaySchedules { weekday, rules } => write!(
                f,
                "all schedule rules ({}) fire on {} only; a weekday range may have been intended",
                rules.join(", "),
                weekday
            ),
            Finding::DeletionProtectionDisabled { table } => {
                write!(f, "table {table} has deletion protection disabled")
            }
        }
    }
}

/// Inspect a stack and report advisories. Each finding is also logged
/// as a warning.
pub fn lint(stack: &Stack) -> Vec<Finding> {
    let mut findings = Vec::new();

    let rules = stack.schedule_rules();
    if !rules.is_empty() {
        let days: Vec<_> = rules
            .iter()
            .map(|(_, r)| r.cron.single_weekday())
            .collect();
        if let Some(&Some(day)) = days.first()
            && days.iter().all(|d| *d == Some(day))
        {
            findings.push(Finding::SingleWeekdaySchedules {
                weekday: day.to_string(),
                rules: rules.iter().map(|(_, r)| r.name.clone()).collect(),
            });
        }
    }

    for (_, table) in stack.tables() {
        if !table.deletion_protection {
            findings.push(Finding::DeletionProtectionDisabled {
                table: table.table_name.clone(),
            });
        }
    }

    for finding in &findings {
        warn!(%finding, "stack advisory");
    }
    findings
}
