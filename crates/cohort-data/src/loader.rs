//! Fetch-then-assemble for the group list.

use cohort_core::{AssembledGroup, assemble};

use crate::error::DataError;
use crate::retry::RetryConfig;
use crate::source::RecordSource;

/// Fetch the three tables concurrently and assemble the group list.
///
/// Assembly only runs once all three reads succeed. The first failure aborts
/// the load; no partial list is ever built.
///
/// # Errors
///
/// Returns [`DataError::Fetch`] naming the table whose read failed.
pub async fn load_group_list<S: RecordSource>(source: &S) -> Result<Vec<AssembledGroup>, DataError> {
    let (groups, evaluations, students) = tokio::try_join!(
        async {
            source
                .fetch_groups()
                .await
                .map_err(|e| DataError::fetch("groups", e))
        },
        async {
            source
                .fetch_evaluations()
                .await
                .map_err(|e| DataError::fetch("evaluations", e))
        },
        async {
            source
                .fetch_students()
                .await
                .map_err(|e| DataError::fetch("students", e))
        },
    )?;

    tracing::debug!(
        groups = groups.len(),
        evaluations = evaluations.len(),
        students = students.len(),
        "assembling group list"
    );
    Ok(assemble(&groups, &evaluations, &students))
}

/// [`load_group_list`] with whole-load retries on transient failures.
///
/// # Errors
///
/// Returns the last attempt's error once attempts are exhausted, or the first
/// permanent error.
pub async fn load_group_list_with_retry<S: RecordSource>(
    source: &S,
    retry: &RetryConfig,
) -> Result<Vec<AssembledGroup>, DataError> {
    let mut attempt = 1;
    loop {
        match load_group_list(source).await {
            Ok(groups) => return Ok(groups),
            Err(error) if attempt < retry.max_attempts && error.is_transient() => {
                let delay = retry.delay_for(attempt);
                tracing::warn!(
                    %error,
                    attempt,
                    max_attempts = retry.max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "group list load failed; retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}
