use std::fmt;

use serde::{Serialize, Serializer};

use crate::records::{EvaluationRecord, GroupRecord, StudentRecord};

/// A group joined with its evaluation and roster, ready for rendering.
///
/// Produced only by [`crate::assemble`]; never persisted. Serializes as the group
/// fields followed by `evaluations` and `members`, with each member rendered as a
/// `{ "name": ... }` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssembledGroup {
    #[serde(flatten)]
    pub record: GroupRecord,
    /// Zero or one evaluation whose id matches `record.evaluation_id`.
    pub evaluations: Vec<EvaluationRecord>,
    /// Students whose `group_id` equals `record.id`, in arrival order.
    #[serde(serialize_with = "serialize_member_names")]
    pub members: Vec<StudentRecord>,
}

impl AssembledGroup {
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.record.id
    }

    /// The matched evaluation, if any.
    #[must_use]
    pub fn evaluation(&self) -> Option<&EvaluationRecord> {
        self.evaluations.first()
    }

    /// Stable key for list rendering, always derived from the group id.
    #[must_use]
    pub fn list_key(&self) -> ListKey {
        ListKey::from_id(self.record.id)
    }
}

/// Deterministic list-item key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListKey(String);

impl ListKey {
    #[must_use]
    pub fn from_id(id: i64) -> Self {
        Self(id.to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Serialize)]
struct MemberName<'a> {
    name: &'a str,
}

fn serialize_member_names<S: Serializer>(
    members: &[StudentRecord],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(members.iter().map(|member| MemberName {
        name: &member.name,
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn sample() -> AssembledGroup {
        AssembledGroup {
            record: GroupRecord {
                id: 7,
                name: "Gamma".into(),
                topic: "Networks".into(),
                evaluation_id: None,
            },
            evaluations: Vec::new(),
            members: vec![StudentRecord {
                name: "Caio".into(),
                group_id: 7,
            }],
        }
    }

    #[test]
    fn serializes_flat_with_member_names_only() {
        let value = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": 7,
                "name": "Gamma",
                "topic": "Networks",
                "evaluationId": null,
                "evaluations": [],
                "members": [{ "name": "Caio" }],
            })
        );
    }

    #[test]
    fn list_key_is_group_id() {
        let group = sample();
        assert_eq!(group.list_key().as_str(), "7");
        assert_eq!(group.list_key(), group.list_key());
    }

    #[test]
    fn evaluation_accessor_returns_first() {
        let mut group = sample();
        assert!(group.evaluation().is_none());
        group.evaluations.push(EvaluationRecord {
            id: 1,
            description: "Solid".into(),
            score: Some(8.0),
        });
        assert_eq!(group.evaluation().map(|e| e.id), Some(1));
    }
}
