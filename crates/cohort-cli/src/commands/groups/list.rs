use cohort_config::CohortConfig;
use cohort_core::AssembledGroup;
use cohort_core::card::render_cards;
use cohort_data::{DataError, GroupListCache, RetryConfig, load_group_list_with_retry};

use crate::bootstrap;
use crate::cli::subcommands::groups::GroupsListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;
use crate::progress::Progress;

const EMPTY_LIST: &str = "(no groups)";

pub async fn handle(
    args: &GroupsListArgs,
    flags: &GlobalFlags,
    config: &CohortConfig,
) -> anyhow::Result<()> {
    let client = bootstrap::data_client(config).await?;
    let retries = args.retries.unwrap_or(config.general.retries);
    let retry = RetryConfig::with_retries(retries);

    let mut cache = GroupListCache::new();
    let generation = cache.begin();

    let progress = Progress::spinner("Loading groups...");
    let result = load_group_list_with_retry(&client, &retry).await;
    cache.commit(generation, &result);

    match &result {
        Ok(groups) => {
            progress.finish_clear();
            tracing::debug!(count = groups.len(), "group list loaded");
        }
        Err(_) => progress.finish_err("failed to load groups"),
    }

    print_groups(cache.groups(), flags, args.expand || config.general.expand)?;

    if let Err(error) = result {
        if let Some(hint) = retry_hint(&error, retries, flags.quiet) {
            eprintln!("hint: {hint}");
        }
        return Err(anyhow::Error::new(error).context("groups list"));
    }
    Ok(())
}

fn print_groups(groups: &[AssembledGroup], flags: &GlobalFlags, expanded: bool) -> anyhow::Result<()> {
    if flags.format != OutputFormat::Card {
        return output(&groups, flags.format);
    }
    if groups.is_empty() {
        println!("{EMPTY_LIST}");
    } else {
        println!("{}", render_cards(groups, expanded));
    }
    Ok(())
}

/// Suggest more attempts, but only when another attempt could succeed.
fn retry_hint(error: &DataError, retries: u32, quiet: bool) -> Option<String> {
    (error.is_transient() && !quiet)
        .then(|| format!("rerun with --retries {}", retries.saturating_add(2)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use cohort_data::DataError;

    use super::retry_hint;

    fn failed_read(status: u16) -> DataError {
        DataError::fetch(
            "groups",
            DataError::Api {
                status,
                message: "boom".into(),
            },
        )
    }

    #[test]
    fn hint_asks_for_more_attempts_than_last_time() {
        assert_eq!(
            retry_hint(&failed_read(503), 0, false).as_deref(),
            Some("rerun with --retries 2")
        );
        assert_eq!(
            retry_hint(&failed_read(503), 3, false).as_deref(),
            Some("rerun with --retries 5")
        );
    }

    #[test]
    fn permanent_failures_get_no_hint() {
        assert_eq!(retry_hint(&failed_read(401), 0, false), None);
        assert_eq!(retry_hint(&DataError::Parse("bad row".into()), 0, false), None);
    }

    #[test]
    fn quiet_mode_suppresses_hint() {
        assert_eq!(retry_hint(&failed_read(503), 0, true), None);
    }
}
