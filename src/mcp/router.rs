//! Action-group request routing.
//!
//! An orchestrating agent runtime sends an event naming an action group, a
//! function and a list of `{name, value}` parameters. The router flattens the
//! parameters, dispatches to one of the leave tools and wraps the JSON-encoded
//! result in the fixed response envelope. Lookup failures and unknown
//! functions become an `{"error": "..."}` body; they never fail the call.

use std::{collections::HashMap, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::mcp::{
    error::LeaveError,
    tools::{company_policy, leave_balance, leave_request, team_calendar},
};

const MESSAGE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CheckLeaveBalance,
    SubmitLeaveRequest,
    GetCompanyPolicy,
    GetTeamCalendar,
}

impl FromStr for Operation {
    type Err = LeaveError;

    fn from_str(function: &str) -> Result<Self, Self::Err> {
        match function {
            "check_leave_balance" => Ok(Self::CheckLeaveBalance),
            "submit_leave_request" => Ok(Self::SubmitLeaveRequest),
            "get_company_policy" => Ok(Self::GetCompanyPolicy),
            "get_team_calendar" => Ok(Self::GetTeamCalendar),
            other => Err(LeaveError::UnknownFunction(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionGroupParameter {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Inbound event. Fields the router does not use are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionGroupEvent {
    #[serde(default)]
    pub action_group: String,
    #[serde(default)]
    pub function: String,
    #[serde(default)]
    pub parameters: Vec<ActionGroupParameter>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextBody {
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseBody {
    #[serde(rename = "TEXT")]
    pub text: TextBody,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    pub response_body: ResponseBody,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionGroupResult {
    pub action_group: String,
    pub function: String,
    pub function_response: FunctionResponse,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionGroupResponse {
    pub message_version: String,
    pub response: ActionGroupResult,
}

impl ActionGroupResponse {
    /// Wraps a result value in the envelope, JSON-encoding it into the text body.
    ///
    /// # Errors
    ///
    /// Returns `LeaveError::Serialization` if the value cannot be encoded.
    pub fn new(
        action_group: String,
        function: String,
        result: &Value,
    ) -> Result<Self, LeaveError> {
        Ok(Self {
            message_version: MESSAGE_VERSION.to_string(),
            response: ActionGroupResult {
                action_group,
                function,
                function_response: FunctionResponse {
                    response_body: ResponseBody {
                        text: TextBody {
                            body: serde_json::to_string(result)?,
                        },
                    },
                },
            },
        })
    }

    /// The decoded result body.
    ///
    /// # Errors
    ///
    /// Returns `LeaveError::Serialization` if the text body is not valid JSON.
    pub fn body(&self) -> Result<Value, LeaveError> {
        Ok(serde_json::from_str(&self.response.function_response.response_body.text.body)?)
    }
}

fn param<'a>(params: &'a HashMap<String, String>, name: &str) -> &'a str {
    params.get(name).map_or("", String::as_str)
}

fn run(operation: Operation, params: &HashMap<String, String>) -> Result<Value, LeaveError> {
    let value = match operation {
        Operation::CheckLeaveBalance => {
            serde_json::to_value(leave_balance::leave_balance(param(params, "employee_id"))?)?
        }
        Operation::SubmitLeaveRequest => {
            let leave_type = params.get("leave_type").map_or("pto", String::as_str);
            serde_json::to_value(leave_request::evaluate_leave_request(
                param(params, "employee_id"),
                param(params, "start_date"),
                param(params, "end_date"),
                leave_type,
            )?)?
        }
        Operation::GetCompanyPolicy => {
            serde_json::to_value(company_policy::find_policy(param(params, "topic"))?)?
        }
        Operation::GetTeamCalendar => serde_json::to_value(team_calendar::team_out_of_office(
            param(params, "team_name"),
            param(params, "month"),
        )?)?,
    };
    Ok(value)
}

/// Dispatches a function by name over flattened parameters, returning the
/// result body. Lookup failures are folded into an `{error}` object.
///
/// # Errors
///
/// Only failures other than lookups propagate, i.e. serialization errors.
pub fn dispatch(function: &str, params: &HashMap<String, String>) -> Result<Value, LeaveError> {
    match function.parse::<Operation>().and_then(|operation| run(operation, params)) {
        Ok(value) => Ok(value),
        Err(err) if err.is_lookup_failure() => {
            debug!(function, error = %err, "lookup failure returned to caller");
            Ok(json!({ "error": err.to_string() }))
        }
        Err(err) => Err(err),
    }
}

/// Flattens the event parameters, dispatches the named function and wraps the
/// result in the response envelope.
///
/// # Errors
///
/// Propagates serialization failures from `dispatch` and the envelope.
pub fn handle_event(event: ActionGroupEvent) -> Result<ActionGroupResponse, LeaveError> {
    let ActionGroupEvent {
        action_group,
        function,
        parameters,
    } = event;
    let params: HashMap<String, String> =
        parameters.into_iter().map(|p| (p.name, p.value)).collect();
    info!(%action_group, %function, params = params.len(), "action group invocation");

    let result = dispatch(&function, &params)?;
    ActionGroupResponse::new(action_group, function, &result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(function: &str, params: &[(&str, &str)]) -> ActionGroupEvent {
        ActionGroupEvent {
            action_group: "LeaveActions".to_string(),
            function: function.to_string(),
            parameters: params
                .iter()
                .map(|&(name, value)| ActionGroupParameter {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn parses_the_closed_operation_set() {
        assert_eq!(
            "check_leave_balance".parse::<Operation>().unwrap(),
            Operation::CheckLeaveBalance
        );
        assert_eq!(
            "get_team_calendar".parse::<Operation>().unwrap(),
            Operation::GetTeamCalendar
        );
        assert!("Check_Leave_Balance".parse::<Operation>().is_err());
    }

    #[test]
    fn envelope_echoes_action_group_and_function() {
        let response =
            handle_event(event("check_leave_balance", &[("employee_id", "EMP001")])).unwrap();
        assert_eq!(response.message_version, "1.0");
        assert_eq!(response.response.action_group, "LeaveActions");
        assert_eq!(response.response.function, "check_leave_balance");
        let body = response.body().unwrap();
        assert_eq!(body["pto_remaining"], 12);
        assert_eq!(body["pto_annual_total"], 20);
    }

    #[test]
    fn envelope_wire_shape() {
        let response = handle_event(event("get_company_policy", &[("topic", "parental")])).unwrap();
        let wire = serde_json::to_value(&response).unwrap();
        let body = wire["response"]["functionResponse"]["responseBody"]["TEXT"]["body"]
            .as_str()
            .unwrap();
        let decoded: Value = serde_json::from_str(body).unwrap();
        assert_eq!(wire["messageVersion"], "1.0");
        assert_eq!(wire["response"]["actionGroup"], "LeaveActions");
        assert_eq!(decoded["topic"], "parental");
    }

    #[test]
    fn unknown_function_still_returns_envelope() {
        let response = handle_event(event("delete_employee", &[])).unwrap();
        assert_eq!(response.response.function, "delete_employee");
        assert_eq!(
            response.body().unwrap(),
            json!({ "error": "Unknown function: delete_employee" })
        );
    }

    #[test]
    fn not_found_is_an_error_body() {
        let body = dispatch("check_leave_balance", &HashMap::new()).unwrap();
        assert_eq!(body, json!({ "error": "No employee found with ID " }));
    }

    #[test]
    fn submission_defaults_leave_type_to_pto() {
        let response = handle_event(event(
            "submit_leave_request",
            &[
                ("employee_id", "EMP004"),
                ("start_date", "2026-03-10"),
                ("end_date", "2026-03-10"),
            ],
        ))
        .unwrap();
        let body = response.body().unwrap();
        assert_eq!(body["status"], "denied");
        assert!(body["reason"].as_str().unwrap().contains("0 remaining"));
    }

    #[test]
    fn calendar_unknown_team_is_error_body() {
        let body = dispatch(
            "get_team_calendar",
            &HashMap::from([
                ("team_name".to_string(), "legal".to_string()),
                ("month".to_string(), "March".to_string()),
            ]),
        )
        .unwrap();
        assert_eq!(
            body["error"],
            "Unknown team 'legal'. Available: engineering, marketing, sales"
        );
    }

    #[test]
    fn repeated_dispatch_is_idempotent() {
        for (function, params) in [
            ("check_leave_balance", vec![("employee_id", "EMP005")]),
            (
                "submit_leave_request",
                vec![
                    ("employee_id", "EMP005"),
                    ("start_date", "2026-05-04"),
                    ("end_date", "2026-05-08"),
                ],
            ),
            ("get_company_policy", vec![("topic", "pto")]),
            ("get_team_calendar", vec![("team_name", "sales"), ("month", "march")]),
        ] {
            let first = handle_event(event(function, &params)).unwrap();
            let second = handle_event(event(function, &params)).unwrap();
            assert_eq!(first, second, "{function}");
        }
    }

    #[test]
    fn event_ignores_unknown_fields() {
        let event: ActionGroupEvent = serde_json::from_str(
            r#"{"messageVersion":"1.0","agent":{"name":"hr"},"sessionId":"abc",
               "actionGroup":"LeaveActions","function":"get_company_policy",
               "parameters":[{"name":"topic","type":"string","value":"remote"}]}"#,
        )
        .unwrap();
        assert_eq!(event.parameters[0].value, "remote");
        let body = handle_event(event).unwrap().body().unwrap();
        assert_eq!(body["topic"], "remote_work");
    }
}
