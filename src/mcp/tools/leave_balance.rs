//! Tool for retrieving an employee's remaining leave balances.
//!
//! Returns the remaining PTO and sick days from the employee directory
//! alongside the fixed annual allowances.

use crate::mcp::{
    directory::{PTO_ANNUAL_TOTAL, SICK_ANNUAL_TOTAL, find_employee},
    error::LeaveError,
};
use rmcp::{ErrorData, handler::server::wrapper::Parameters, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct EmployeeRequest {
    #[serde(default)]
    #[schemars(description = "Employee ID, e.g. EMP001")]
    pub employee_id: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct LeaveBalance {
    pub employee_id: String,
    pub name: &'static str,
    pub pto_remaining: u32,
    pub sick_remaining: u32,
    pub pto_annual_total: u32,
    pub sick_annual_total: u32,
}

/// # Errors
///
/// Returns `LeaveError::EmployeeNotFound` for an unknown employee id.
pub fn leave_balance(employee_id: &str) -> Result<LeaveBalance, LeaveError> {
    let employee = find_employee(employee_id)
        .ok_or_else(|| LeaveError::EmployeeNotFound(employee_id.to_string()))?;
    debug!(
        employee_id,
        pto = employee.pto_remaining,
        sick = employee.sick_remaining,
        "balance lookup"
    );

    Ok(LeaveBalance {
        employee_id: employee_id.to_string(),
        name: employee.name,
        pto_remaining: employee.pto_remaining,
        sick_remaining: employee.sick_remaining,
        pto_annual_total: PTO_ANNUAL_TOTAL,
        sick_annual_total: SICK_ANNUAL_TOTAL,
    })
}

/// # Errors
///
/// Returns `INVALID_PARAMS` for an unknown employee id.
pub fn check_leave_balance(
    Parameters(args): Parameters<EmployeeRequest>,
) -> Result<CallToolResult, ErrorData> {
    let balance = leave_balance(&args.employee_id)?;
    let value = serde_json::to_value(balance).map_err(LeaveError::from)?;
    Ok(CallToolResult::structured(value))
}
