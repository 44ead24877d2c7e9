//! Wire rows for the three remote tables and their mapping to core records.
//!
//! Column names follow the remote schema. Null text becomes an empty string;
//! rows missing a key they are joined on are dropped with a warning.

use cohort_core::{EvaluationRecord, GroupRecord, NewStudent, StudentRecord};
use serde::{Deserialize, Serialize};

pub const GROUP_COLUMNS: &str = "id_grupo,nome_grupo,tema,id_avaliacao";
pub const EVALUATION_COLUMNS: &str = "id_avaliacao,descricao,nota";
pub const STUDENT_COLUMNS: &str = "nome,id_grupo";

#[derive(Debug, Clone, Deserialize)]
pub struct GroupRow {
    pub id_grupo: Option<i64>,
    pub nome_grupo: Option<String>,
    pub tema: Option<String>,
    pub id_avaliacao: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationRow {
    pub id_avaliacao: Option<i64>,
    pub descricao: Option<String>,
    pub nota: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentRow {
    pub nome: Option<String>,
    pub id_grupo: Option<i64>,
}

/// Row inserted into the students table on sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentInsert {
    pub nome: String,
    pub matricula: String,
    pub email: String,
}

impl From<&NewStudent> for StudentInsert {
    fn from(student: &NewStudent) -> Self {
        Self {
            nome: student.name.clone(),
            matricula: student.registration.clone(),
            email: student.email.clone(),
        }
    }
}

pub fn into_groups(rows: Vec<GroupRow>) -> Vec<GroupRecord> {
    rows.into_iter()
        .filter_map(|row| {
            let Some(id) = row.id_grupo else {
                tracing::warn!(name = ?row.nome_grupo, "skipping group row without id");
                return None;
            };
            Some(GroupRecord {
                id,
                name: row.nome_grupo.unwrap_or_default(),
                topic: row.tema.unwrap_or_default(),
                evaluation_id: row.id_avaliacao,
            })
        })
        .collect()
}

pub fn into_evaluations(rows: Vec<EvaluationRow>) -> Vec<EvaluationRecord> {
    rows.into_iter()
        .filter_map(|row| {
            let Some(id) = row.id_avaliacao else {
                tracing::warn!("skipping evaluation row without id");
                return None;
            };
            Some(EvaluationRecord {
                id,
                description: row.descricao.unwrap_or_default(),
                score: row.nota,
            })
        })
        .collect()
}

pub fn into_students(rows: Vec<StudentRow>) -> Vec<StudentRecord> {
    rows.into_iter()
        .filter_map(|row| {
            // Students without a group belong to no card.
            let Some(group_id) = row.id_grupo else {
                tracing::warn!(name = ?row.nome, "skipping student row without group id");
                return None;
            };
            Some(StudentRecord {
                name: row.nome.unwrap_or_default(),
                group_id,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const GROUPS_FIXTURE: &str = r#"[
        {"id_grupo": 1, "nome_grupo": "Alpha", "tema": "AI", "id_avaliacao": 10},
        {"id_grupo": 2, "nome_grupo": null, "tema": "Robotics", "id_avaliacao": null},
        {"id_grupo": null, "nome_grupo": "Broken", "tema": "?", "id_avaliacao": 3}
    ]"#;

    const EVALUATIONS_FIXTURE: &str = r#"[
        {"id_avaliacao": 10, "descricao": "Great work", "nota": 9.5},
        {"id_avaliacao": 11, "descricao": null, "nota": null},
        {"id_avaliacao": 12, "descricao": "Integer score", "nota": 7}
    ]"#;

    const STUDENTS_FIXTURE: &str = r#"[
        {"nome": "Ana", "id_grupo": 1},
        {"nome": "Unassigned", "id_grupo": null},
        {"nome": null, "id_grupo": 2}
    ]"#;

    #[test]
    fn maps_group_rows() {
        let rows: Vec<GroupRow> = serde_json::from_str(GROUPS_FIXTURE).unwrap();
        let groups = into_groups(rows);
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[0],
            GroupRecord {
                id: 1,
                name: "Alpha".into(),
                topic: "AI".into(),
                evaluation_id: Some(10),
            }
        );
        assert_eq!(groups[1].name, "");
        assert_eq!(groups[1].evaluation_id, None);
    }

    #[test]
    fn maps_evaluation_rows() {
        let rows: Vec<EvaluationRow> = serde_json::from_str(EVALUATIONS_FIXTURE).unwrap();
        let evaluations = into_evaluations(rows);
        assert_eq!(evaluations.len(), 3);
        assert_eq!(evaluations[0].score, Some(9.5));
        assert_eq!(evaluations[1].description, "");
        assert_eq!(evaluations[1].score, None);
        assert_eq!(evaluations[2].score, Some(7.0));
    }

    #[test]
    fn maps_student_rows_dropping_unassigned() {
        let rows: Vec<StudentRow> = serde_json::from_str(STUDENTS_FIXTURE).unwrap();
        let students = into_students(rows);
        assert_eq!(
            students,
            vec![
                StudentRecord { name: "Ana".into(), group_id: 1 },
                StudentRecord { name: String::new(), group_id: 2 },
            ]
        );
    }

    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn warnings_while(run: impl FnOnce()) -> String {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, run);
        let bytes = buffer.0.lock().expect("log buffer").clone();
        String::from_utf8(bytes).expect("utf8 logs")
    }

    #[test]
    fn every_keyless_row_kind_is_reported() {
        let logs = warnings_while(|| {
            into_groups(serde_json::from_str(GROUPS_FIXTURE).unwrap());
            into_evaluations(serde_json::from_str(r#"[{"id_avaliacao": null, "descricao": "x", "nota": 1}]"#).unwrap());
            into_students(serde_json::from_str(STUDENTS_FIXTURE).unwrap());
        });
        assert!(logs.contains("skipping group row without id"));
        assert!(logs.contains("skipping evaluation row without id"));
        assert!(logs.contains("skipping student row without group id"));
        assert!(logs.contains("Unassigned"));
    }

    #[test]
    fn student_insert_uses_remote_columns() {
        let insert = StudentInsert::from(&NewStudent {
            name: "Ana".into(),
            registration: "2024001".into(),
            email: "ana@example.edu".into(),
        });
        let value = serde_json::to_value(&insert).unwrap();
        assert_eq!(value["nome"], "Ana");
        assert_eq!(value["matricula"], "2024001");
        assert_eq!(value["email"], "ana@example.edu");
    }
}
