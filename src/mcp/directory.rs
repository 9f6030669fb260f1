//! Read-only HR reference data: the employee directory, per-team
//! out-of-office calendars and the company policy catalog.
//!
//! The tables are plain ordered slices. Their order is significant: policy and
//! calendar lookups stop at the first match, and the "Available: ..." listings
//! in error messages follow it.

use serde::Serialize;

pub const PTO_ANNUAL_TOTAL: u32 = 20;
pub const SICK_ANNUAL_TOTAL: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub team: &'static str,
    pub pto_remaining: u32,
    pub sick_remaining: u32,
    pub role: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub employee_id: &'static str,
    pub name: &'static str,
    pub dates: &'static str,
    #[serde(rename = "type")]
    pub leave_type: &'static str,
}

#[derive(Debug)]
pub struct CalendarPeriod {
    /// Year-month key, e.g. `2026-03`.
    pub month: &'static str,
    pub entries: &'static [CalendarEntry],
}

impl CalendarPeriod {
    /// Two-digit month component of the key.
    #[must_use]
    pub fn month_number(&self) -> Option<&'static str> {
        self.month.split_once('-').map(|(_, month)| month)
    }
}

#[derive(Debug)]
pub struct TeamCalendar {
    pub team: &'static str,
    pub periods: &'static [CalendarPeriod],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyEntry {
    pub topic: &'static str,
    pub policy: &'static str,
}

pub const EMPLOYEES: &[EmployeeRecord] = &[
    EmployeeRecord {
        id: "EMP001",
        name: "Priya Sharma",
        team: "engineering",
        pto_remaining: 12,
        sick_remaining: 5,
        role: "Senior Developer",
    },
    EmployeeRecord {
        id: "EMP002",
        name: "James Chen",
        team: "engineering",
        pto_remaining: 3,
        sick_remaining: 5,
        role: "DevOps Engineer",
    },
    EmployeeRecord {
        id: "EMP003",
        name: "Sarah Johnson",
        team: "marketing",
        pto_remaining: 8,
        sick_remaining: 4,
        role: "Content Manager",
    },
    EmployeeRecord {
        id: "EMP004",
        name: "Raj Patel",
        team: "engineering",
        pto_remaining: 0,
        sick_remaining: 2,
        role: "Junior Developer",
    },
    EmployeeRecord {
        id: "EMP005",
        name: "Maria Garcia",
        team: "sales",
        pto_remaining: 15,
        sick_remaining: 5,
        role: "Account Executive",
    },
];

pub const TEAM_CALENDARS: &[TeamCalendar] = &[
    TeamCalendar {
        team: "engineering",
        periods: &[
            CalendarPeriod {
                month: "2026-02",
                entries: &[
                    CalendarEntry {
                        employee_id: "EMP002",
                        name: "James Chen",
                        dates: "Feb 23-25",
                        leave_type: "PTO",
                    },
                ],
            },
            CalendarPeriod {
                month: "2026-03",
                entries: &[
                    CalendarEntry {
                        employee_id: "EMP001",
                        name: "Priya Sharma",
                        dates: "Mar 9-13",
                        leave_type: "PTO",
                    },
                    CalendarEntry {
                        employee_id: "EMP004",
                        name: "Raj Patel",
                        dates: "Mar 16",
                        leave_type: "Sick",
                    },
                ],
            },
        ],
    },
    TeamCalendar {
        team: "marketing",
        periods: &[CalendarPeriod {
            month: "2026-03",
            entries: &[
                CalendarEntry {
                    employee_id: "EMP003",
                    name: "Sarah Johnson",
                    dates: "Mar 2-6",
                    leave_type: "PTO",
                },
            ],
        }],
    },
    TeamCalendar {
        team: "sales",
        periods: &[CalendarPeriod {
            month: "2026-03",
            entries: &[
                CalendarEntry {
                    employee_id: "EMP005",
                    name: "Maria Garcia",
                    dates: "Mar 10-14",
                    leave_type: "PTO",
                },
            ],
        }],
    },
];

pub const POLICIES: &[PolicyEntry] = &[
    PolicyEntry {
        topic: "pto",
        policy: "Annual PTO allowance: 20 days for full-time employees, \
                 accrued at 1.67 days/month. Requests of 1-2 days need 3 business days notice. \
                 Requests of 3+ days need 2 weeks notice. \
                 Unused PTO carries over up to 5 days into the next calendar year. \
                 No more than 10 consecutive business days without VP approval. \
                 Manager approval required for all requests.",
    },
    PolicyEntry {
        topic: "sick_leave",
        policy: "5 sick days per year, no advance notice needed but notify your manager by 9 AM. \
                 Doctor's note required if you're out 3+ consecutive days. \
                 Sick days don't carry over.",
    },
    PolicyEntry {
        topic: "remote_work",
        policy: "Up to 2 days/week remote with manager approval. Core hours 10 AM - 4 PM ET. \
                 VPN required for all remote access. Full-time remote needs VP sign-off.",
    },
    PolicyEntry {
        topic: "bereavement",
        policy: "5 paid days for immediate family (spouse, parent, child, sibling). \
                 3 paid days for extended family. Does not count against PTO.",
    },
    PolicyEntry {
        topic: "parental",
        policy: "16 weeks fully paid for primary caregivers, 6 weeks for secondary. \
                 Notify HR at least 30 days before expected start date.",
    },
];

/// Month names mapped to the two-digit month used in calendar keys.
pub const MONTH_NUMBERS: [(&str, &str); 12] = [
    ("january", "01"),
    ("february", "02"),
    ("march", "03"),
    ("april", "04"),
    ("may", "05"),
    ("june", "06"),
    ("july", "07"),
    ("august", "08"),
    ("september", "09"),
    ("october", "10"),
    ("november", "11"),
    ("december", "12"),
];

#[must_use]
pub fn find_employee(employee_id: &str) -> Option<&'static EmployeeRecord> {
    EMPLOYEES.iter().find(|employee| employee.id == employee_id)
}

/// Looks up a team by its already-normalized (lowercase, trimmed) name.
#[must_use]
pub fn find_team_calendar(team: &str) -> Option<&'static TeamCalendar> {
    TEAM_CALENDARS.iter().find(|calendar| calendar.team == team)
}

#[must_use]
pub fn team_names() -> String {
    TEAM_CALENDARS
        .iter()
        .map(|calendar| calendar.team)
        .collect::<Vec<_>>()
        .join(", ")
}

#[must_use]
pub fn policy_topics() -> String {
    POLICIES
        .iter()
        .map(|entry| entry.topic)
        .collect::<Vec<_>>()
        .join(", ")
}
