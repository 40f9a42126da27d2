//! One pass of the monitor: fetch, check, diff, persist, notify.
//!
//! Fetch failures and empty inventories are reported through the notifier
//! and end the run normally without touching the snapshot. Persistence and
//! delivery failures propagate to the caller.

use anyhow::Context;
use chrono::{DateTime, Utc};
use stockwatch_core::{diff_inventory, AppConfig, PriorState, SnapshotStore};
use stockwatch_notify::Notifier;
use stockwatch_scraper::PageClient;

use crate::report::{
    build_change_message, build_first_run_message, build_full_message, fetch_failure_message,
    format_timestamp, NOTHING_PARSED_MESSAGE,
};

/// Terminal state reached by [`run_once`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunOutcome {
    FetchFailed,
    NothingParsed,
    FirstRun,
    /// No changes in change-only mode; nothing was sent.
    Silent,
    FullReport,
    ChangeReport,
}

pub(crate) async fn run_once<N: Notifier>(
    config: &AppConfig,
    categories: &[String],
    client: &PageClient,
    store: &SnapshotStore,
    notifier: &N,
    now: DateTime<Utc>,
) -> anyhow::Result<RunOutcome> {
    let timestamp = format_timestamp(now);

    let current = match client.fetch_inventory(&config.target_urls).await {
        Ok(inventory) => inventory,
        Err(e) => {
            tracing::error!(error = %e, "inventory fetch failed");
            notifier
                .send(&fetch_failure_message(&e))
                .await
                .context("failed to deliver fetch failure notice")?;
            return Ok(RunOutcome::FetchFailed);
        }
    };

    if current.is_empty() {
        tracing::warn!(
            urls = config.target_urls.len(),
            "no stock parsed from any page; page structure may have changed"
        );
        notifier
            .send(NOTHING_PARSED_MESSAGE)
            .await
            .context("failed to deliver empty inventory notice")?;
        return Ok(RunOutcome::NothingParsed);
    }

    let PriorState::Prior(previous) = store.load() else {
        store
            .save(&current)
            .context("failed to save first snapshot")?;
        tracing::info!(count = current.len(), "first run, sending full stock");
        let message = build_first_run_message(
            &current,
            categories,
            &config.stock_unit,
            &config.mode,
            &timestamp,
        );
        notifier
            .send(&message)
            .await
            .context("failed to deliver first run report")?;
        return Ok(RunOutcome::FirstRun);
    };

    let changes = diff_inventory(&previous, &current);

    store
        .save(&current)
        .context("failed to save current snapshot")?;

    let (message, outcome) = match (changes.is_empty(), config.only_on_change) {
        (true, true) => {
            tracing::info!("no stock changes");
            return Ok(RunOutcome::Silent);
        }
        (true, false) => {
            tracing::info!("no stock changes, sending full stock");
            (
                build_full_message(
                    &current,
                    categories,
                    &config.stock_unit,
                    &config.mode,
                    &timestamp,
                ),
                RunOutcome::FullReport,
            )
        }
        (false, true) => {
            tracing::info!(changed = changes.len(), "stock changed, sending changes");
            (
                build_change_message(&changes, &config.mode, &timestamp),
                RunOutcome::ChangeReport,
            )
        }
        (false, false) => {
            tracing::info!(changed = changes.len(), "stock changed, sending full stock");
            (
                build_full_message(
                    &current,
                    categories,
                    &config.stock_unit,
                    &config.mode,
                    &timestamp,
                ),
                RunOutcome::FullReport,
            )
        }
    };

    notifier
        .send(&message)
        .await
        .context("failed to deliver stock report")?;
    Ok(outcome)
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
