//! Flat records, one per remote table.
//!
//! Records carry no local identity beyond the remote-assigned numeric key and are
//! fetched fresh on every load. Field names serialize in camelCase.

use serde::{Deserialize, Serialize};

/// A project group (`groups` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRecord {
    pub id: i64,
    pub name: String,
    pub topic: String,
    /// Foreign key into [`EvaluationRecord::id`]. May dangle.
    pub evaluation_id: Option<i64>,
}

/// A scored assessment (`evaluations` table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub id: i64,
    pub description: String,
    pub score: Option<f64>,
}

/// A group member (`students` table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: String,
    pub group_id: i64,
}
