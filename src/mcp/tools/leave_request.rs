//! Tool for submitting a leave request.
//!
//! The request is evaluated against the employee's remaining balance and
//! either denied or reported as submitted for manager approval. Nothing is
//! recorded and no balance is decremented.

use crate::mcp::{directory::find_employee, error::LeaveError};
use chrono::NaiveDate;
use rmcp::{ErrorData, handler::server::wrapper::Parameters, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const REQUEST_YEAR: &str = "2026";

fn default_leave_type() -> String {
    "pto".to_string()
}

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct LeaveRequestParams {
    #[serde(default)]
    #[schemars(description = "Employee ID, e.g. EMP003")]
    pub employee_id: String,
    #[serde(default)]
    #[schemars(description = "First day of leave in YYYY-MM-DD format, e.g. 2026-03-20")]
    pub start_date: String,
    #[serde(default)]
    #[schemars(description = "Last day of leave (inclusive) in YYYY-MM-DD format, e.g. 2026-03-24")]
    pub end_date: String,
    #[serde(default = "default_leave_type")]
    #[schemars(description = "Leave type: pto, vacation, sick or sick_leave. Defaults to pto.")]
    pub leave_type: String,
}

/// Balance a leave type is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveKind {
    Pto,
    Sick,
    /// Anything else is approved without a balance check.
    Other,
}

impl LeaveKind {
    #[must_use]
    pub fn classify(leave_type: &str) -> Self {
        match leave_type {
            "pto" | "vacation" => Self::Pto,
            "sick" | "sick_leave" => Self::Sick,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LeaveRequestOutcome {
    Submitted {
        request_id: String,
        employee_id: String,
        name: &'static str,
        leave_type: String,
        start_date: String,
        end_date: String,
        days_requested: i64,
        message: String,
    },
    Denied {
        reason: String,
        employee_id: String,
    },
}

/// Inclusive day count, never below one. Unparseable dates count as a single
/// day rather than failing the request.
#[must_use]
pub fn requested_days(start_date: &str, end_date: &str) -> i64 {
    let parse = |date: &str| NaiveDate::parse_from_str(date, "%Y-%m-%d");
    if let (Ok(start), Ok(end)) = (parse(start_date), parse(end_date)) {
        ((end - start).num_days() + 1).max(1)
    } else {
        warn!(start_date, end_date, "unparseable leave dates, counting as 1 day");
        1
    }
}

#[must_use]
pub fn request_id(employee_id: &str, start_date: &str) -> String {
    let chars: Vec<char> = employee_id.chars().collect();
    let suffix: String = chars[chars.len().saturating_sub(3)..].iter().collect();
    format!("LR-{REQUEST_YEAR}-{suffix}-{}", start_date.replace('-', ""))
}

/// # Errors
///
/// Returns `LeaveError::EmployeeNotFound` for an unknown employee id. An
/// insufficient balance is not an error; it yields `LeaveRequestOutcome::Denied`.
pub fn evaluate_leave_request(
    employee_id: &str,
    start_date: &str,
    end_date: &str,
    leave_type: &str,
) -> Result<LeaveRequestOutcome, LeaveError> {
    let employee = find_employee(employee_id)
        .ok_or_else(|| LeaveError::EmployeeNotFound(employee_id.to_string()))?;

    let leave_type = leave_type.to_lowercase();
    let days = requested_days(start_date, end_date);

    let shortfall = match LeaveKind::classify(&leave_type) {
        LeaveKind::Pto if i64::from(employee.pto_remaining) < days => {
            Some(("PTO", employee.pto_remaining))
        }
        LeaveKind::Sick if i64::from(employee.sick_remaining) < days => {
            Some(("sick leave", employee.sick_remaining))
        }
        LeaveKind::Other => {
            warn!(employee_id, %leave_type, "unrecognized leave type, skipping balance check");
            None
        }
        _ => None,
    };

    if let Some((label, remaining)) = shortfall {
        info!(employee_id, days, remaining, "leave request denied");
        return Ok(LeaveRequestOutcome::Denied {
            reason: format!(
                "Not enough {label}. You requested {days} days but only have {remaining} remaining."
            ),
            employee_id: employee_id.to_string(),
        });
    }

    let request_id = request_id(employee_id, start_date);
    info!(employee_id, %request_id, days, "leave request submitted");
    let message = format!(
        "Leave request {request_id} submitted for manager approval. \
         Confirmation email within 24 hours."
    );
    Ok(LeaveRequestOutcome::Submitted {
        request_id,
        employee_id: employee_id.to_string(),
        name: employee.name,
        leave_type,
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        days_requested: days,
        message,
    })
}

/// # Errors
///
/// Returns `INVALID_PARAMS` for an unknown employee id.
pub fn submit_leave_request(
    Parameters(args): Parameters<LeaveRequestParams>,
) -> Result<CallToolResult, ErrorData> {
    let outcome = evaluate_leave_request(
        &args.employee_id,
        &args.start_date,
        &args.end_date,
        &args.leave_type,
    )?;
    let value = serde_json::to_value(outcome).map_err(LeaveError::from)?;
    Ok(CallToolResult::structured(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_counts_as_one() {
        assert_eq!(requested_days("2026-03-10", "2026-03-10"), 1);
    }

    #[test]
    fn range_is_inclusive() {
        assert_eq!(requested_days("2026-03-20", "2026-03-24"), 5);
        assert_eq!(requested_days("2026-02-27", "2026-03-02"), 4);
    }

    #[test]
    fn reversed_or_garbled_dates_fall_back_to_one_day() {
        assert_eq!(requested_days("2026-03-24", "2026-03-20"), 1);
        assert_eq!(requested_days("March 20", "2026-03-24"), 1);
        assert_eq!(requested_days("", ""), 1);
    }

    #[test]
    fn request_id_uses_id_suffix_and_start_digits() {
        assert_eq!(request_id("EMP003", "2026-03-20"), "LR-2026-003-20260320");
        assert_eq!(request_id("X1", "2026-01-05"), "LR-2026-X1-20260105");
    }

    #[test]
    fn submits_when_balance_covers_request() {
        let outcome = evaluate_leave_request("EMP003", "2026-03-20", "2026-03-24", "PTO").unwrap();
        let LeaveRequestOutcome::Submitted {
            request_id,
            leave_type,
            days_requested,
            name,
            message,
            ..
        } = outcome
        else {
            panic!("expected submission, got {outcome:?}");
        };
        assert_eq!(request_id, "LR-2026-003-20260320");
        assert_eq!(leave_type, "pto");
        assert_eq!(days_requested, 5);
        assert_eq!(name, "Sarah Johnson");
        assert_eq!(
            message,
            "Leave request LR-2026-003-20260320 submitted for manager approval. \
             Confirmation email within 24 hours."
        );
    }

    #[test]
    fn denies_pto_with_zero_balance() {
        let outcome = evaluate_leave_request("EMP004", "2026-03-10", "2026-03-10", "pto").unwrap();
        assert_eq!(
            outcome,
            LeaveRequestOutcome::Denied {
                reason: "Not enough PTO. You requested 1 days but only have 0 remaining."
                    .to_string(),
                employee_id: "EMP004".to_string(),
            }
        );
    }

    #[test]
    fn vacation_is_a_pto_synonym() {
        let outcome =
            evaluate_leave_request("EMP002", "2026-03-02", "2026-03-06", "Vacation").unwrap();
        assert!(matches!(outcome, LeaveRequestOutcome::Denied { .. }));
    }

    #[test]
    fn denies_sick_leave_beyond_balance() {
        let outcome =
            evaluate_leave_request("EMP004", "2026-03-16", "2026-03-18", "sick_leave").unwrap();
        let LeaveRequestOutcome::Denied { reason, .. } = outcome else {
            panic!("expected denial");
        };
        assert_eq!(
            reason,
            "Not enough sick leave. You requested 3 days but only have 2 remaining."
        );
    }

    #[test]
    fn unknown_leave_types_skip_balance_checks() {
        let outcome =
            evaluate_leave_request("EMP004", "2026-03-01", "2026-03-31", "bereavement").unwrap();
        assert!(matches!(
            outcome,
            LeaveRequestOutcome::Submitted {
                days_requested: 31,
                ..
            }
        ));
    }

    #[test]
    fn unknown_employee_is_not_found() {
        let err = evaluate_leave_request("EMP999", "2026-03-20", "2026-03-24", "pto").unwrap_err();
        assert!(matches!(err, LeaveError::EmployeeNotFound(id) if id == "EMP999"));
    }

    #[test]
    fn status_tag_leads_the_body() {
        let denied = evaluate_leave_request("EMP004", "2026-03-10", "2026-03-10", "pto").unwrap();
        let body = serde_json::to_string(&denied).unwrap();
        assert!(body.starts_with(r#"{"status":"denied","reason":"#));

        let submitted =
            evaluate_leave_request("EMP001", "2026-03-10", "2026-03-10", "pto").unwrap();
        let body = serde_json::to_string(&submitted).unwrap();
        assert!(body.starts_with(r#"{"status":"submitted","request_id":"LR-2026-001-20260310""#));
    }

    #[test]
    fn repeated_requests_are_identical() {
        let first = evaluate_leave_request("EMP001", "2026-04-01", "2026-04-03", "pto").unwrap();
        let second = evaluate_leave_request("EMP001", "2026-04-01", "2026-04-03", "pto").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_leave_type_defaults_to_pto() {
        let params: LeaveRequestParams = serde_json::from_str(
            r#"{"employee_id":"EMP001","start_date":"2026-04-01","end_date":"2026-04-01"}"#,
        )
        .unwrap();
        assert_eq!(params.leave_type, "pto");
    }

    #[test]
    fn mcp_tool_returns_outcome() {
        let result = submit_leave_request(Parameters(LeaveRequestParams {
            employee_id: "EMP005".to_string(),
            start_date: "2026-05-04".to_string(),
            end_date: "2026-05-08".to_string(),
            leave_type: "vacation".to_string(),
        }))
        .unwrap();
        let content = result.structured_content.unwrap();
        assert_eq!(content["status"], "submitted");
        assert_eq!(content["days_requested"], 5);
    }
}
