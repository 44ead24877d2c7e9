//! Remote table names.

use serde::{Deserialize, Serialize};

fn default_groups() -> String {
    "grupos".into()
}

fn default_evaluations() -> String {
    "avaliacoes".into()
}

fn default_students() -> String {
    "alunos".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TablesConfig {
    #[serde(default = "default_groups")]
    pub groups: String,

    #[serde(default = "default_evaluations")]
    pub evaluations: String,

    #[serde(default = "default_students")]
    pub students: String,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            groups: default_groups(),
            evaluations: default_evaluations(),
            students: default_students(),
        }
    }
}
