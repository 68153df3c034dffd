// src/runner.rs
//! One run of the watcher:
//!
//! ```text
//! Fetching → Extracting → Comparing ─┬─ Notifying → Persisting → Done
//!                                    └─ Skipping
//! ```
//!
//! Every collaborator failure degrades to a sentinel value or a no-op. The
//! one early exit is an unresolved 24K rate: with no trustworthy data the run
//! stops at `Comparing` and leaves the state file alone.

use tracing::{error, warn};

use crate::{
    config::options::Sources,
    core::{html::Document, net::{self, Fetch}},
    data::{MetricKey, Snapshot},
    diff,
    notify::{self, Notify},
    progress::{Progress, Stage},
    specs::rates::Extraction,
    store::SnapshotStore,
};

/// Collaborators for one run.
pub struct RunContext<'a> {
    pub fetcher: &'a dyn Fetch,
    /// `None` when delivery credentials are missing.
    pub notifier: Option<&'a dyn Notify>,
    pub store: &'a SnapshotStore,
    pub sources: &'a Sources,
    pub extraction: Extraction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// No credentials configured; the notifier was never called.
    Skipped,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// 24K could not be resolved; nothing was sent or saved.
    Aborted,
    /// Same state as last run; nothing was sent or saved.
    Unchanged,
    /// State changed; a message was attempted and the new state written.
    Updated { delivery: Delivery, persisted: bool },
}

pub fn run(ctx: &RunContext<'_>, progress: &mut dyn Progress) -> RunOutcome {
    let last = ctx.store.load();
    let current = collect_rates(ctx, progress);
    progress.log(&format!("🔎 Extracted Data: {current}"));

    progress.stage(Stage::Comparing);
    if !current.get(MetricKey::Gold24K).is_available() {
        error!("❌ Failed to scrape valid data. Check website layout.");
        return RunOutcome::Aborted;
    }

    if !diff::has_changed(&current, &last.raw) {
        progress.stage(Stage::Skipping);
        progress.log("ℹ️ Prices unchanged.");
        return RunOutcome::Unchanged;
    }

    progress.stage(Stage::Notifying);
    let message = notify::format_message(&current, &last.snapshot, ctx.sources);
    progress.log(&message);
    let delivery = deliver(ctx.notifier, &message, progress);

    // Persist even when delivery failed; the state reflects what was scraped.
    progress.stage(Stage::Persisting);
    let persisted = match ctx.store.save(&current) {
        Ok(()) => true,
        Err(e) => {
            error!("❌ Could not save state: {e}");
            false
        }
    };
    if delivery == Delivery::Sent {
        progress.log("✅ Update sent to Telegram.");
    }

    progress.stage(Stage::Done);
    RunOutcome::Updated { delivery, persisted }
}

/// Fetch each source page and extract its metrics. A failed page or metric
/// leaves the sentinel in place and the loop moves on.
pub fn collect_rates(ctx: &RunContext<'_>, progress: &mut dyn Progress) -> Snapshot {
    let mut current = Snapshot::default();

    for page in ctx.sources.pages() {
        progress.stage(Stage::Fetching);
        progress.log(&format!("📡 Fetching {} from {}...", page.name, page.url));

        let html = match net::fetch_html(ctx.fetcher, page.url) {
            Ok(html) => html,
            Err(e) => {
                error!("❌ {} fetch failed: {e}", page.name);
                continue;
            }
        };

        progress.stage(Stage::Extracting);
        let doc = Document::parse(&html);
        for (key, result) in ctx.extraction.extract_all(&doc, page.metrics) {
            match result {
                Ok(value) => current.set(key, value),
                Err(e) => warn!("Error extracting {key}: {e}"),
            }
        }
    }

    current
}

fn deliver(notifier: Option<&dyn Notify>, message: &str, progress: &mut dyn Progress) -> Delivery {
    let Some(notifier) = notifier else {
        progress.log("ℹ️ Telegram skipped: Missing keys.");
        return Delivery::Skipped;
    };
    match notifier.send(message) {
        Ok(()) => Delivery::Sent,
        Err(e) => {
            error!("❌ Telegram Send Error: {e}");
            Delivery::Failed(e.to_string())
        }
    }
}
