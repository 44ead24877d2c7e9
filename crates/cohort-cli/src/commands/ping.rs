use cohort_config::CohortConfig;
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct PingResponse {
    backend: String,
    table: String,
    reachable: bool,
    rows_sampled: usize,
}

/// Connection check: read one row of the groups table.
pub async fn handle(flags: &GlobalFlags, config: &CohortConfig) -> anyhow::Result<()> {
    let client = bootstrap::data_client(config).await?;
    let table = client.tables().groups.clone();

    let progress = Progress::spinner("Checking connection...");
    let rows = match client.ping(&table).await {
        Ok(rows) => {
            progress.finish_clear();
            rows
        }
        Err(error) => {
            progress.finish_err("unreachable");
            return Err(anyhow::Error::new(error).context(format!("ping {table}")));
        }
    };
    tracing::info!(table = %table, rows, "backend reachable");

    output(
        &PingResponse {
            backend: config.backend.url.clone(),
            table,
            reachable: true,
            rows_sampled: rows,
        },
        flags.format,
    )
}
