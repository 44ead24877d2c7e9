//! Client-side join of the three remote tables into the group list.
//!
//! Both lookups are pre-indexed so assembly is linear in the combined input size.
//! Duplicate evaluation ids resolve to the first occurrence.

use std::collections::HashMap;

use crate::assembled::AssembledGroup;
use crate::records::{EvaluationRecord, GroupRecord, StudentRecord};

/// Join groups with their evaluation and members.
///
/// Output order follows `groups`. A dangling `evaluation_id` yields an empty
/// `evaluations`; a group without students yields an empty `members`. Inputs are
/// borrowed and never modified.
#[must_use]
pub fn assemble(
    groups: &[GroupRecord],
    evaluations: &[EvaluationRecord],
    students: &[StudentRecord],
) -> Vec<AssembledGroup> {
    let evaluations_by_id = index_evaluations(evaluations);
    let rosters = index_rosters(students);

    groups
        .iter()
        .map(|group| {
            let evaluations = group
                .evaluation_id
                .and_then(|id| evaluations_by_id.get(&id))
                .map(|evaluation| vec![(*evaluation).clone()])
                .unwrap_or_default();

            let members = rosters
                .get(&group.id)
                .map(|roster| roster.iter().map(|s| (*s).clone()).collect())
                .unwrap_or_default();

            AssembledGroup {
                record: group.clone(),
                evaluations,
                members,
            }
        })
        .collect()
}

fn index_evaluations(evaluations: &[EvaluationRecord]) -> HashMap<i64, &EvaluationRecord> {
    let mut index = HashMap::with_capacity(evaluations.len());
    for evaluation in evaluations {
        index.entry(evaluation.id).or_insert(evaluation);
    }
    index
}

fn index_rosters(students: &[StudentRecord]) -> HashMap<i64, Vec<&StudentRecord>> {
    let mut index: HashMap<i64, Vec<&StudentRecord>> = HashMap::new();
    for student in students {
        index.entry(student.group_id).or_default().push(student);
    }
    index
}
