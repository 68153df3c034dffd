// src/cli.rs
use tracing::{error, info};

use crate::{
    config::options::AppOptions,
    core::net::HttpFetcher,
    notify::{Notify, TelegramNotifier},
    progress::LogProgress,
    runner::{self, RunContext, RunOutcome},
    store::SnapshotStore,
};

/// Wire the real collaborators from `options` and run once.
/// Every failure is logged and folded into the outcome.
pub fn run(options: &AppOptions) -> RunOutcome {
    let fetcher = match HttpFetcher::new(options.fetch_strategy) {
        Ok(f) => f,
        Err(e) => {
            error!("❌ {e}");
            return RunOutcome::Aborted;
        }
    };

    let notifier = options.telegram.as_ref().and_then(|creds| match TelegramNotifier::new(creds) {
        Ok(n) => Some(n),
        Err(e) => {
            error!("❌ Telegram client unavailable: {e}");
            None
        }
    });

    let store = SnapshotStore::new(&options.state_file);
    let ctx = RunContext {
        fetcher: &fetcher,
        notifier: notifier.as_ref().map(|n| n as &dyn Notify),
        store: &store,
        sources: &options.sources,
        extraction: options.extraction,
    };

    let outcome = runner::run(&ctx, &mut LogProgress);
    info!("Run finished: {outcome:?}");
    outcome
}
