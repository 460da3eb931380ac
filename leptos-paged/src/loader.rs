use std::sync::Arc;

use futures::{FutureExt, future::LocalBoxFuture};
use leptos::prelude::*;

use crate::{FetchFailure, FetchPermit, Page, PageRequest};

type Fetcher<Item> =
    Arc<dyn Fn(PageRequest) -> LocalBoxFuture<'static, Result<Page<Item>, FetchFailure>>>;

/// What a call to [`PagedLoader::load_next`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was fetched and its items appended.
    Loaded {
        /// How many items the page contributed.
        appended: usize,
    },
    /// Another fetch was already outstanding; this call was suppressed.
    InFlight,
    /// The final page was already reached; nothing left to fetch.
    Exhausted,
    /// The fetch failed; state is unchanged and the same page stays retriable.
    Failed,
}

/// The state container of an incrementally loaded list.
///
/// All mutable state lives here as signals: the accumulated items
/// (append-only, arrival order), the next page cursor (1-based), an in-flight
/// flag and an exhaustion flag. The loader issues at most one request at a
/// time — a [`FetchPermit`] is acquired synchronously before the fetch and
/// released unconditionally afterwards, so triggers arriving while a fetch is
/// outstanding are dropped rather than queued.
///
/// Clones share the same state, so the loader can be handed to event
/// listeners and spawned tasks freely.
pub struct PagedLoader<Item: Send + Sync + 'static> {
    fetch: Fetcher<Item>,
    per_page: u32,
    records: RwSignal<Vec<Item>>,
    cursor: RwSignal<u32>,
    fetching: RwSignal<bool>,
    has_more: RwSignal<bool>,
    permit: FetchPermit,
}

impl<Item: Send + Sync + 'static> Clone for PagedLoader<Item> {
    fn clone(&self) -> Self {
        Self {
            fetch: self.fetch.clone(),
            per_page: self.per_page,
            records: self.records,
            cursor: self.cursor,
            fetching: self.fetching,
            has_more: self.has_more,
            permit: self.permit.clone(),
        }
    }
}

impl<Item: Send + Sync + 'static> PagedLoader<Item> {
    /// Create a loader around a fetch closure.
    ///
    /// The closure receives the page to request and the page size, and
    /// returns the parsed page or a [`FetchFailure`]. Futures may be
    /// non-`Send`; on the web everything runs on the one UI thread.
    pub fn new<Fut>(per_page: u32, fetch: impl Fn(PageRequest) -> Fut + 'static) -> Self
    where
        Fut: Future<Output = Result<Page<Item>, FetchFailure>> + 'static,
    {
        Self {
            fetch: Arc::new(move |request| fetch(request).boxed_local()),
            per_page,
            records: RwSignal::new(Vec::new()),
            cursor: RwSignal::new(1),
            fetching: RwSignal::new(false),
            has_more: RwSignal::new(true),
            permit: FetchPermit::new(),
        }
    }

    /// The accumulated items, in arrival order.
    pub fn records(&self) -> ReadSignal<Vec<Item>> {
        self.records.read_only()
    }

    /// Whether a fetch is currently outstanding.
    pub fn fetching(&self) -> ReadSignal<bool> {
        self.fetching.read_only()
    }

    /// Whether the server still reports further pages. Once false, false
    /// forever: the loader is permanently idle.
    pub fn has_more(&self) -> ReadSignal<bool> {
        self.has_more.read_only()
    }

    /// The next page that will be requested, 1-based.
    pub fn next_page(&self) -> ReadSignal<u32> {
        self.cursor.read_only()
    }

    /// Fetch the next page and append its items.
    ///
    /// Returns immediately without touching the network when the loader is
    /// exhausted or a fetch is already outstanding — the permit is taken
    /// before the first await point, so two calls in the same tick still
    /// issue exactly one request.
    ///
    /// On failure the error is logged and absorbed: cursor, items and
    /// exhaustion flag are left as they were, and the next trigger re-issues
    /// the same page. No backoff, no retry cap.
    pub async fn load_next(&self) -> LoadOutcome {
        if !self.has_more.get_untracked() {
            return LoadOutcome::Exhausted;
        }
        let Some(_permit) = self.permit.try_acquire() else {
            return LoadOutcome::InFlight;
        };

        self.fetching.set(true);
        let _reset = ResetFetching(self.fetching);

        let request = PageRequest {
            page: self.cursor.get_untracked(),
            per_page: self.per_page,
        };
        match (self.fetch)(request).await {
            Ok(page) => {
                let appended = page.items.len();
                let more = page.has_more();
                tracing::debug!(page = request.page, appended, more, "page loaded");
                self.records.update(|records| records.extend(page.items));
                self.has_more.set(more);
                self.cursor.set(request.page + 1);
                LoadOutcome::Loaded { appended }
            }
            Err(error) => {
                tracing::warn!(page = request.page, %error, "page fetch failed, will retry on next trigger");
                LoadOutcome::Failed
            }
        }
    }
}

/// Clears the in-flight flag when the fetch scope unwinds, so the flag can
/// never stay stuck on a failure path.
struct ResetFetching(RwSignal<bool>);

impl Drop for ResetFetching {
    fn drop(&mut self) {
        _ = self.0.try_set(false);
    }
}
