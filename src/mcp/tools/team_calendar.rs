//! Tool for listing who on a team is out of office in a given month.
//!
//! The month may be a year-month token (`2026-03`) or free text containing an
//! English month name ("March", "in march please").

use crate::mcp::{
    directory::{CalendarEntry, CalendarPeriod, MONTH_NUMBERS, find_team_calendar, team_names},
    error::LeaveError,
};
use rmcp::{ErrorData, handler::server::wrapper::Parameters, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

const NOBODY_OFF_NOTE: &str = "Nobody scheduled off.";

#[derive(Serialize, Deserialize, JsonSchema)]
pub struct TeamCalendarRequest {
    #[serde(default)]
    #[schemars(description = "Team name: engineering, marketing or sales")]
    pub team_name: String,
    #[serde(default)]
    #[schemars(
        description = "Month as YYYY-MM (e.g. 2026-03) or an English month name (e.g. March)"
    )]
    pub month: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TeamCalendarView {
    pub team: String,
    pub month: String,
    pub out_of_office: &'static [CalendarEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

fn period_matches(period: &CalendarPeriod, query: &str) -> bool {
    if query.contains(period.month) || period.month.contains(query) {
        return true;
    }
    MONTH_NUMBERS
        .iter()
        .any(|(name, number)| query.contains(name) && period.month_number() == Some(*number))
}

/// # Errors
///
/// Returns `LeaveError::UnknownTeam`, listing the known teams, for an unknown
/// team. A month without entries is not an error.
pub fn team_out_of_office(team_name: &str, month: &str) -> Result<TeamCalendarView, LeaveError> {
    let team = team_name.trim().to_lowercase();
    let calendar = find_team_calendar(&team).ok_or_else(|| LeaveError::UnknownTeam {
        team: team_name.to_string(),
        available: team_names(),
    })?;

    let query = month.trim().to_lowercase();
    let view = calendar
        .periods
        .iter()
        .find(|period| period_matches(period, &query))
        .map_or_else(
            || TeamCalendarView {
                team: team_name.to_string(),
                month: month.to_string(),
                out_of_office: &[],
                note: Some(NOBODY_OFF_NOTE),
            },
            |period| TeamCalendarView {
                team: team_name.to_string(),
                month: period.month.to_string(),
                out_of_office: period.entries,
                note: None,
            },
        );

    debug!(
        %team,
        %query,
        matched = %view.month,
        out = view.out_of_office.len(),
        "calendar lookup"
    );
    Ok(view)
}

/// # Errors
///
/// Returns `INVALID_PARAMS` for an unknown team.
pub fn get_team_calendar(
    Parameters(args): Parameters<TeamCalendarRequest>,
) -> Result<CallToolResult, ErrorData> {
    let view = team_out_of_office(&args.team_name, &args.month)?;
    let value = serde_json::to_value(view).map_err(LeaveError::from)?;
    Ok(CallToolResult::structured(value))
}
