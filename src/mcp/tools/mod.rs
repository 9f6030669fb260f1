//! HR leave tools.
//!
//! Each module implements one operation as a pure function plus its MCP
//! adapter:
//! - `leave_balance`: Remaining PTO and sick days for an employee
//! - `leave_request`: Evaluate and submit a leave request
//! - `company_policy`: Look up a policy by topic
//! - `team_calendar`: Team out-of-office calendar for a month
//!
//! All tools read the static tables in `directory` and report lookup
//! failures through `LeaveError`.

pub mod company_policy;
pub mod leave_balance;
pub mod leave_request;
pub mod team_calendar;
