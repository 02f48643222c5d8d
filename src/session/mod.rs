//! # Label Queue Session
//!
//! One clerk's working state: the queue, the display overrides, the scan
//! ingestor, the feedback banner and the last manual search.
//!
//! All changes go through [`LabelQueueSession::apply`], which takes a
//! [`Command`] and returns the [`Effect`]s the outside world should carry
//! out. Gateway calls are effects too: the caller runs the
//! [`Effect::Lookup`] and feeds the answer back as
//! [`Command::LookupResolved`]. [`dispatch`] does exactly that against a
//! [`CatalogGateway`](crate::catalog::CatalogGateway).
//!
//! ```
//! use std::time::Instant;
//! use shelfrig::catalog::{CatalogItem, Variation};
//! use shelfrig::session::{Command, LabelQueueSession};
//!
//! let mut session = LabelQueueSession::new();
//! let milk = CatalogItem::new("Milk", vec![Variation::new("1L", 250, "123")]);
//! session.apply(Command::Toggle(milk), Instant::now());
//! session.apply(
//!     Command::SetOverride { name: "Milk".into(), text: "Whole Milk".into() },
//!     Instant::now(),
//! );
//!
//! let sheet = session.layout().unwrap();
//! assert_eq!(sheet.slots().len(), 32);
//! ```

mod dispatch;

pub use dispatch::dispatch;

use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::{CatalogItem, GatewayError};
use crate::layout::{self, LabelSheet, LayoutError};
use crate::overrides::NameOverrideStore;
use crate::queue::{CAPACITY, LabelQueue, ToggleOutcome};
use crate::scan::{
    self, AudioCue, Feedback, FeedbackBanner, MSG_NOT_FOUND, MSG_QUEUE_FULL, MSG_SEARCH_FAILED,
    ScanIngestor, ScanState, ScanVerdict, Severity, Tone,
};

/// Inline message when a manual search fails.
pub const MSG_LOAD_FAILED: &str = "Could not load items";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    Manual,
    Scan,
}

/// A gateway query the session wants run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupRequest {
    pub id: Uuid,
    pub kind: LookupKind,
    pub query: String,
}

#[derive(Debug)]
pub enum Command {
    /// Manual click on a search result.
    Toggle(CatalogItem),
    Remove(String),
    Clear,
    ManualSearch(String),
    /// New contents of the scan input field, keystroke by keystroke.
    ScanInput(String),
    /// A completed scan entry (the scanner's terminating Enter).
    ScanSubmit(String),
    SetScanMode(bool),
    SetOverride { name: String, text: String },
    ResetOverride(String),
    DismissFeedback(u64),
    LookupResolved {
        request: LookupRequest,
        result: Result<Vec<CatalogItem>, GatewayError>,
    },
}

impl Command {
    fn kind(&self) -> &'static str {
        match self {
            Self::Toggle(_) => "toggle",
            Self::Remove(_) => "remove",
            Self::Clear => "clear",
            Self::ManualSearch(_) => "manual_search",
            Self::ScanInput(_) => "scan_input",
            Self::ScanSubmit(_) => "scan_submit",
            Self::SetScanMode(_) => "set_scan_mode",
            Self::SetOverride { .. } => "set_override",
            Self::ResetOverride(_) => "reset_override",
            Self::DismissFeedback(_) => "dismiss_feedback",
            Self::LookupResolved { .. } => "lookup_resolved",
        }
    }
}

/// Something the session asks its host to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    Lookup(LookupRequest),
    PlayCue { cue: AudioCue, tones: [Tone; 2] },
    FocusScanInput,
    Feedback(Feedback),
}

impl Effect {
    pub fn cue(cue: AudioCue) -> Self {
        Self::PlayCue {
            cue,
            tones: cue.tones(),
        }
    }
}

#[derive(Debug, Default)]
pub struct LabelQueueSession {
    queue: LabelQueue,
    overrides: NameOverrideStore,
    scanner: ScanIngestor,
    banner: FeedbackBanner,
    query: String,
    results: Vec<CatalogItem>,
    pending_search: Option<Uuid>,
    message: Option<String>,
}

impl LabelQueueSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &LabelQueue {
        &self.queue
    }

    pub fn overrides(&self) -> &NameOverrideStore {
        &self.overrides
    }

    pub fn scanner(&self) -> &ScanIngestor {
        &self.scanner
    }

    pub fn banner(&self) -> &FeedbackBanner {
        &self.banner
    }

    /// Results of the last completed manual search.
    pub fn results(&self) -> &[CatalogItem] {
        &self.results
    }

    /// Inline message for manual mode.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn layout(&self) -> Result<LabelSheet, LayoutError> {
        layout::build(self.queue.items(), &self.overrides)
    }

    /// Apply one command. `now` drives the feedback timer.
    pub fn apply(&mut self, command: Command, now: Instant) -> Vec<Effect> {
        debug!(command = command.kind(), "apply");
        match command {
            Command::Toggle(item) => self.toggle(item),
            Command::Remove(name) => {
                self.remove(&name);
                Vec::new()
            }
            Command::Clear => {
                let removed = self.queue.clear();
                self.overrides.clear();
                debug!(items = removed.len(), "queue cleared");
                Vec::new()
            }
            Command::ManualSearch(query) => self.start_search(query),
            Command::ScanInput(text) => {
                self.scanner.input(&text);
                Vec::new()
            }
            Command::ScanSubmit(text) => self.scan_submit(&text),
            Command::SetScanMode(enabled) => {
                if self.scanner.set_enabled(enabled) {
                    vec![Effect::FocusScanInput]
                } else {
                    Vec::new()
                }
            }
            Command::SetOverride { name, text } => {
                self.overrides.set_override(&name, &text);
                Vec::new()
            }
            Command::ResetOverride(name) => {
                self.overrides.reset(&name);
                Vec::new()
            }
            Command::DismissFeedback(generation) => {
                self.banner.dismiss(generation);
                Vec::new()
            }
            Command::LookupResolved { request, result } => match request.kind {
                LookupKind::Manual => self.finish_search(request, result),
                LookupKind::Scan => self.finish_scan(request, result, now),
            },
        }
    }

    fn toggle(&mut self, item: CatalogItem) -> Vec<Effect> {
        match self.queue.toggle(item) {
            ToggleOutcome::Added { labels } => {
                debug!(labels, total = self.queue.label_count(), "item queued");
                self.message = None;
            }
            ToggleOutcome::Removed(removed) => {
                self.overrides.reset(&removed.name);
                self.message = None;
            }
            ToggleOutcome::Rejected {
                requested,
                remaining,
            } => {
                debug!(requested, remaining, "toggle rejected");
                self.message = Some(MSG_QUEUE_FULL.to_string());
            }
        }
        Vec::new()
    }

    /// Every removal takes the name's override with it, even when a scanned
    /// duplicate of the same name stays queued.
    fn remove(&mut self, name: &str) {
        if self.queue.remove(name).is_some() {
            self.overrides.reset(name);
        }
    }

    fn start_search(&mut self, query: String) -> Vec<Effect> {
        let request = LookupRequest {
            id: Uuid::new_v4(),
            kind: LookupKind::Manual,
            query: query.trim().to_string(),
        };
        self.query = request.query.clone();
        self.pending_search = Some(request.id);
        self.message = None;
        vec![Effect::Lookup(request)]
    }

    fn finish_search(
        &mut self,
        request: LookupRequest,
        result: Result<Vec<CatalogItem>, GatewayError>,
    ) -> Vec<Effect> {
        if self.pending_search != Some(request.id) {
            debug!(id = %request.id, "stale search result dropped");
            return Vec::new();
        }
        self.pending_search = None;
        match result {
            Ok(items) => {
                self.message = items.is_empty().then(|| MSG_NOT_FOUND.to_string());
                self.results = items;
            }
            Err(e) => {
                warn!(id = %request.id, error = %e, "manual search failed");
                self.results.clear();
                self.message = Some(MSG_LOAD_FAILED.to_string());
            }
        }
        Vec::new()
    }

    fn scan_submit(&mut self, text: &str) -> Vec<Effect> {
        match self.scanner.submit(text) {
            Some(code) => {
                let request = LookupRequest {
                    id: Uuid::new_v4(),
                    kind: LookupKind::Scan,
                    query: code,
                };
                info!(id = %request.id, code = %request.query, "scan lookup");
                vec![Effect::Lookup(request)]
            }
            None => Vec::new(),
        }
    }

    fn finish_scan(
        &mut self,
        request: LookupRequest,
        result: Result<Vec<CatalogItem>, GatewayError>,
        now: Instant,
    ) -> Vec<Effect> {
        self.scanner.resolve();
        let verdict = match result {
            Ok(items) => ScanVerdict::judge(&self.queue, Ok(items)),
            Err(e) => {
                warn!(id = %request.id, error = %e, "scan lookup failed");
                ScanVerdict::judge(&self.queue, Err(&e))
            }
        };

        match verdict {
            ScanVerdict::NotFound => self.scan_error(MSG_NOT_FOUND, now),
            ScanVerdict::Failed => self.scan_error(MSG_SEARCH_FAILED, now),
            ScanVerdict::QueueFull { item } => {
                info!(name = %item.name, remaining = self.queue.remaining(), "scan rejected, queue full");
                self.scan_error(MSG_QUEUE_FULL, now)
            }
            ScanVerdict::Add { item, again } => {
                let text = scan::added_message(&item, again);
                let name = item.name.clone();
                match self.queue.insert(item) {
                    Ok(labels) => {
                        info!(%name, labels, again, "scan queued");
                        let feedback = self.banner.show(text, Severity::Success, now);
                        vec![Effect::Feedback(feedback), Effect::cue(AudioCue::Success)]
                    }
                    Err(_) => self.scan_error(MSG_QUEUE_FULL, now),
                }
            }
        }
    }

    fn scan_error(&mut self, message: &str, now: Instant) -> Vec<Effect> {
        let feedback = self.banner.show(message, Severity::Error, now);
        vec![Effect::Feedback(feedback), Effect::cue(AudioCue::Error)]
    }

    /// Serializable view of the session at `now`.
    pub fn snapshot(&self, now: Instant) -> SessionSnapshot {
        let queue = self
            .queue
            .items()
            .iter()
            .map(|item| QueuedItem {
                name: item.name.clone(),
                display_name: self.overrides.display_name(&item.name).to_string(),
                labels: item.label_count(),
                item: item.clone(),
            })
            .collect();
        let results = self
            .results
            .iter()
            .map(|item| SearchResult {
                queued: self.queue.contains(&item.name),
                fits: self.queue.fits(item),
                item: item.clone(),
            })
            .collect();

        SessionSnapshot {
            queue,
            label_count: self.queue.label_count(),
            capacity: CAPACITY,
            remaining: self.queue.remaining(),
            overrides: self.overrides.clone(),
            scan: ScanSnapshot {
                state: self.scanner.state(),
                buffer: self.scanner.buffer().to_string(),
                in_flight: self.scanner.in_flight(),
            },
            feedback: self.banner.current(now).cloned(),
            query: self.query.clone(),
            searching: self.pending_search.is_some(),
            results,
            message: self.message.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub queue: Vec<QueuedItem>,
    pub label_count: usize,
    pub capacity: usize,
    pub remaining: usize,
    pub overrides: NameOverrideStore,
    pub scan: ScanSnapshot,
    pub feedback: Option<Feedback>,
    pub query: String,
    pub searching: bool,
    pub results: Vec<SearchResult>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueuedItem {
    pub name: String,
    pub display_name: String,
    pub labels: usize,
    pub item: CatalogItem,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScanSnapshot {
    pub state: ScanState,
    pub buffer: String,
    pub in_flight: usize,
}

/// A manual search hit, annotated for the UI's enabled/disabled state.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub item: CatalogItem,
    pub queued: bool,
    pub fits: bool,
}
