use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{AssignmentId, AssignmentStatus, EmployeeId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(rename = "_id")]
    pub id: EmployeeId,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(rename = "_id")]
    pub id: AssignmentId,
    pub assigned_to: EmployeeId,
    pub title: String,
    pub description: String,
    #[serde(with = "deadline_format")]
    pub deadline: NaiveDate,
    pub status: AssignmentStatus,
}

/// Body of an assignment creation request. The target employee is named, not
/// referenced by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub employee_name: String,
    pub title: String,
    pub description: String,
    #[serde(with = "deadline_format")]
    pub deadline: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AssignmentStatus,
}

/// Deadlines go out as `YYYY-MM-DD`. Backends that persist them as dates hand
/// back RFC 3339 timestamps, so both shapes are accepted on the way in.
pub mod deadline_format {
    use chrono::{DateTime, NaiveDate};
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid deadline '{raw}'")))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|timestamp| timestamp.date_naive())
            })
    }
}
