//! The three reads the group list is assembled from.

use std::future::Future;

use cohort_core::{EvaluationRecord, GroupRecord, StudentRecord};

use crate::client::DataClient;
use crate::error::DataError;
use crate::rows::{
    EVALUATION_COLUMNS, EvaluationRow, GROUP_COLUMNS, GroupRow, STUDENT_COLUMNS, StudentRow,
    into_evaluations, into_groups, into_students,
};

/// Anything that can supply full snapshots of the three tables.
pub trait RecordSource {
    fn fetch_groups(&self) -> impl Future<Output = Result<Vec<GroupRecord>, DataError>> + Send;

    fn fetch_evaluations(
        &self,
    ) -> impl Future<Output = Result<Vec<EvaluationRecord>, DataError>> + Send;

    fn fetch_students(&self) -> impl Future<Output = Result<Vec<StudentRecord>, DataError>> + Send;
}

impl RecordSource for DataClient {
    async fn fetch_groups(&self) -> Result<Vec<GroupRecord>, DataError> {
        let rows: Vec<GroupRow> = self.fetch_all(&self.tables.groups, GROUP_COLUMNS).await?;
        Ok(into_groups(rows))
    }

    async fn fetch_evaluations(&self) -> Result<Vec<EvaluationRecord>, DataError> {
        let rows: Vec<EvaluationRow> = self
            .fetch_all(&self.tables.evaluations, EVALUATION_COLUMNS)
            .await?;
        Ok(into_evaluations(rows))
    }

    async fn fetch_students(&self) -> Result<Vec<StudentRecord>, DataError> {
        let rows: Vec<StudentRow> = self
            .fetch_all(&self.tables.students, STUDENT_COLUMNS)
            .await?;
        Ok(into_students(rows))
    }
}
