//! Card view of one assembled group.
//!
//! A card shows its title and topic while collapsed; expanding it reveals the
//! member roster and the evaluation. Missing values render as fixed fallback labels.

use std::fmt::Write as _;

use serde::Serialize;

use crate::assembled::{AssembledGroup, ListKey};

pub const NAME_FALLBACK: &str = "name not available";
pub const TOPIC_FALLBACK: &str = "topic not available";
pub const NO_MEMBERS: &str = "no members registered";
pub const NO_DESCRIPTION: &str = "no description";
pub const NO_SCORE: &str = "no score available";

/// Render-ready card with all fallbacks applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupCard {
    pub key: ListKey,
    pub title: String,
    pub topic: String,
    pub members: Vec<String>,
    pub evaluation: String,
    pub score: String,
    pub expanded: bool,
}

impl GroupCard {
    #[must_use]
    pub fn new(group: &AssembledGroup, expanded: bool) -> Self {
        let evaluation = group.evaluation();
        Self {
            key: group.list_key(),
            title: non_blank_or(&group.record.name, NAME_FALLBACK),
            topic: non_blank_or(&group.record.topic, TOPIC_FALLBACK),
            members: group.members.iter().map(|m| m.name.clone()).collect(),
            evaluation: evaluation
                .map(|e| e.description.trim())
                .filter(|description| !description.is_empty())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            score: evaluation
                .and_then(|e| e.score)
                .map_or_else(|| NO_SCORE.to_string(), format_score),
            expanded,
        }
    }

    /// Plain-text rendering, one field per line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = format!("{}\nTopic: {}", self.title, self.topic);
        if !self.expanded {
            return out;
        }

        out.push_str("\nMembers:");
        if self.members.is_empty() {
            let _ = write!(out, "\n  {NO_MEMBERS}");
        } else {
            for member in &self.members {
                let _ = write!(out, "\n  - {member}");
            }
        }
        let _ = write!(out, "\nEvaluation: {}", self.evaluation);
        let _ = write!(out, "\nScore: {}", self.score);
        out
    }
}

/// Render a whole list, cards separated by blank lines.
#[must_use]
pub fn render_cards(groups: &[AssembledGroup], expanded: bool) -> String {
    groups
        .iter()
        .map(|group| GroupCard::new(group, expanded).render())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

fn format_score(score: f64) -> String {
    // Whole scores print without a trailing ".0".
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{score:.0}")
    } else {
        score.to_string()
    }
}
