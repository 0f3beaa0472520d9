//! Calendar-trigger descriptors.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::ids::LogicalId;
use crate::network::SubnetVisibility;

const WEEKDAYS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Cron fields for a calendar trigger, interpreted in UTC.
///
/// Only the fields the stack actually varies are modeled; day-of-month is
/// implied by the weekday field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CronSpec {
    pub minute: String,
    pub hour: String,
    /// `*` or a three-letter day name, optionally a range (`MON-FRI`).
    pub weekday: String,
    pub month: String,
}

impl CronSpec {
    pub fn weekly(weekday: &str, hour: u8, minute: u8) -> Self {
        CronSpec {
            minute: minute.to_string(),
            hour: hour.to_string(),
            weekday: weekday.to_string(),
            month: "*".to_string(),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        validate_numeric("minute", &self.minute, 0, 59)?;
        validate_numeric("hour", &self.hour, 0, 23)?;
        validate_weekday(&self.weekday)?;
        validate_numeric("month", &self.month, 1, 12)?;
        Ok(())
    }

    /// Render as a provider cron expression, e.g. `cron(30 3 ? * MON *)`.
    pub fn expression(&self) -> String {
        format!(
            "cron({} {} ? {} {} *)",
            self.minute, self.hour, self.month, self.weekday
        )
    }

    /// The single day name this trigger fires on, if the weekday field
    /// names exactly one day.
    pub fn single_weekday(&self) -> Option<&str> {
        WEEKDAYS
            .iter()
            .find(|d| self.weekday.eq_ignore_ascii_case(d))
            .copied()
    }
}

fn validate_numeric(field: &'static str, value: &str, min: u32, max: u32) -> CoreResult<()> {
    if value == "*" {
        return Ok(());
    }
    match value.parse::<u32>() {
        Ok(n) if n >= min && n <= max => Ok(()),
        _ => Err(CoreError::InvalidCron {
            field,
            value: value.to_string(),
        }),
    }
}

fn validate_weekday(value: &str) -> CoreResult<()> {
    let bad = || CoreError::InvalidCron {
        field: "weekday",
        value: value.to_string(),
    };
    if value == "*" {
        return Ok(());
    }
    let is_day = |d: &str| WEEKDAYS.iter().any(|w| d.eq_ignore_ascii_case(w));
    match value.split_once('-') {
        Some((from, to)) if is_day(from) && is_day(to) => Ok(()),
        None if is_day(value) => Ok(()),
        _ => Err(bad()),
    }
}

/// Run parameters for a task launched by a trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EcsTarget {
    pub cluster: LogicalId,
    pub task: LogicalId,
    pub task_count: u32,
    pub subnet_visibility: SubnetVisibility,
    pub assign_public_ip: bool,
}

/// A calendar rule that launches one task on a fixed schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRuleSpec {
    pub name: String,
    pub cron: CronSpec,
    pub target: EcsTarget,
}

impl ScheduleRuleSpec {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.is_empty() {
            return Err(CoreError::EmptyName("schedule rule"));
        }
        if self.target.task_count == 0 {
            return Err(CoreError::InvalidCapacity(format!(
                "rule {} must launch at least one task",
                self.name
            )));
        }
        self.cron.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_expression() {
        let cron = CronSpec::weekly("MON", 3, 30);
        assert!(cron.validate().is_ok());
        assert_eq!(cron.expression(), "cron(30 3 ? * MON *)");
        assert_eq!(cron.single_weekday(), Some("MON"));
    }

    #[test]
    fn weekday_range_is_not_a_single_day() {
        let cron = CronSpec::weekly("MON-FRI", 13, 30);
        assert!(cron.validate().is_ok());
        assert_eq!(cron.single_weekday(), None);
    }

    #[test]
    fn reject_out_of_range_fields() {
        assert!(CronSpec::weekly("MON", 24, 0).validate().is_err());
        assert!(CronSpec::weekly("MON", 0, 60).validate().is_err());
        assert!(CronSpec::weekly("MONDAYISH", 3, 30).validate().is_err());

        let mut zero_month = CronSpec::weekly("MON", 3, 30);
        zero_month.month = "0".to_string();
        assert!(zero_month.validate().is_err());
        zero_month.month = "12".to_string();
        assert!(zero_month.validate().is_ok());
    }
}
