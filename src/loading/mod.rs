mod entry;
mod report;

#[cfg(test)]
pub(crate) mod testing;

pub use entry::{EntryId, EntryState, TrackerEntry};
pub use report::LoadReport;

use crate::config::{FailurePolicy, LoadingConfig};
use crate::host::{Host, Modal};
use crate::timer::Timer;
use crate::welcome::ScenarioTexts;
use assets::{LoadBridge, LoadEvent, LoadTask};

/// Runs once, when every tracked entry is done
pub type CompletionAction = Box<dyn FnOnce(&mut Completion<'_>)>;

/// Runs when the modal opened by the completion action is closed
pub type CloseAction = Box<dyn FnOnce(&mut Host)>;

type SuccessCallback<A> = Box<dyn FnOnce(A)>;

/// Context given to the [`CompletionAction`]
pub struct Completion<'a> {
    host: &'a mut Host,
    config: &'a LoadingConfig,
    report: &'a LoadReport,
    on_close: &'a mut Option<CloseAction>,
}

impl Completion<'_> {
    pub fn host(&mut self) -> &mut Host {
        self.host
    }

    pub fn config(&self) -> &LoadingConfig {
        self.config
    }

    pub fn report(&self) -> &LoadReport {
        self.report
    }

    /// Shows `modal` and keeps `on_close` until the modal is closed
    pub fn present_modal<F>(&mut self, modal: Modal, on_close: F)
    where
        F: FnOnce(&mut Host) + 'static,
    {
        self.host.present(&modal);
        *self.on_close = Some(Box::new(on_close));
    }
}

struct PendingLoad<A> {
    entry: EntryId,
    task: LoadTask<A>,
    on_success: Option<SuccessCallback<A>>,
    timeout: Option<Timer>,
}

/// Tracks the loads requested through a [`LoadBridge`] and runs the
/// completion sequence once all of them are finished.
///
/// Everything happens on the thread that calls [`update`](Self::update), the
/// bridge only queues events.
pub struct LoadingCoordinator<B: LoadBridge> {
    bridge: B,
    host: Host,
    config: LoadingConfig,
    pub(crate) texts: ScenarioTexts,
    entries: Vec<TrackerEntry>,
    pending: Vec<PendingLoad<B::Artifact>>,
    completion: Option<CompletionAction>,
    on_close: Option<CloseAction>,
    first_load: bool,
    completed: bool,
}

impl<B> LoadingCoordinator<B>
where
    B: LoadBridge,
    B::Artifact: 'static,
{
    pub fn new(bridge: B, host: Host) -> Self {
        Self::with_config(bridge, host, LoadingConfig::default())
    }

    /// Freezes the host clock, hides the interface and shows the loading screen
    pub fn with_config(bridge: B, mut host: Host, config: LoadingConfig) -> Self {
        host.set_time_scale(0.0);
        host.set_interface_visible(false);
        host.set_loading_screen_visible(true);

        Self {
            bridge,
            host,
            config,
            texts: ScenarioTexts::builtin().clone(),
            entries: vec![],
            pending: vec![],
            completion: None,
            on_close: None,
            first_load: true,
            completed: false,
        }
    }

    /// Replaces the texts used by the welcome modal
    pub fn with_scenario_texts(mut self, texts: ScenarioTexts) -> Self {
        self.texts = texts;
        self
    }

    pub fn config(&self) -> &LoadingConfig {
        &self.config
    }

    pub fn bridge_mut(&mut self) -> &mut B {
        &mut self.bridge
    }

    /// Starts tracking a new entry, the caller is in charge of updating it
    pub fn add_entry(&mut self, path: &str) -> EntryId {
        if self.completed {
            log::warn!("Entry '{path}' added after loading completed, completion won't run again");
        }

        log::debug!("Tracking load '{path}'");
        let id = EntryId(self.entries.len());
        self.entries.push(TrackerEntry::new(path));
        id
    }

    /// Loads `path` through the bridge. `on_success` receives the artifact
    /// right before the entry is marked as finished.
    pub fn request_load<F>(&mut self, path: &str, on_success: F) -> EntryId
    where
        F: FnOnce(B::Artifact) + 'static,
    {
        let entry = self.add_entry(path);
        let task = self.bridge.load(path);
        self.pending.push(PendingLoad {
            entry,
            task,
            on_success: Some(Box::new(on_success)),
            timeout: self.config.timeout.map(Timer::new),
        });
        entry
    }

    pub fn entry(&self, id: EntryId) -> Option<&TrackerEntry> {
        self.entries.get(id.0)
    }

    pub fn entries(&self) -> &[TrackerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sets the progress of a pending entry, the value is clamped to `[0, 1]`
    pub fn set_progress(&mut self, id: EntryId, progress: f32) {
        match self.entries.get_mut(id.0) {
            Some(entry) => {
                entry.set_progress(progress);
            }
            None => log::warn!("Unknown loading entry {}", id.0),
        }
    }

    /// Marks the entry as finished and runs the completion sequence if it was
    /// the last one.
    pub fn mark_finished(&mut self, id: EntryId) {
        let Some(entry) = self.entries.get_mut(id.0) else {
            log::warn!("Unknown loading entry {}", id.0);
            return;
        };

        if entry.finish() {
            log::debug!("Loaded '{}'", entry.path());
        }

        self.check_completion();
    }

    /// Marks the entry as failed. Whether it still counts towards completion
    /// depends on the [`FailurePolicy`]. A load still running for the entry
    /// is cancelled and its result discarded.
    pub fn fail_entry(&mut self, id: EntryId, err: impl Into<String>) {
        let settle = self.config.failure_policy == FailurePolicy::Settle;
        let Some(entry) = self.entries.get_mut(id.0) else {
            log::warn!("Unknown loading entry {}", id.0);
            return;
        };

        let err = err.into();
        if !entry.fail(err.clone(), settle) {
            return;
        }

        log::warn!("Loading '{}' failed: {err}", entry.path());
        self.drop_pending(id);
        if settle {
            self.check_completion();
        } else {
            log::warn!("Loading can't complete with the failure policy set to 'block'");
        }
    }

    /// Stops a requested load, the entry fails with reason "cancelled"
    pub fn cancel(&mut self, id: EntryId) {
        self.drop_pending(id);
        self.fail_entry(id, "cancelled");
    }

    /// Applies every event queued by the bridge
    pub fn update(&mut self) {
        // the callbacks need `&mut self` so the list is taken while it's processed
        let mut pending = std::mem::take(&mut self.pending);
        for load in &mut pending {
            while let Some(evt) = load.task.try_event() {
                self.apply_event(load, evt);
            }
        }

        pending.retain(|load| !load.task.is_done());
        pending.append(&mut self.pending);
        self.pending = pending;
    }

    /// Advances the load timeouts by `delta` seconds
    pub fn tick(&mut self, delta: f32) {
        let mut expired = vec![];
        self.pending.retain_mut(|load| {
            let Some(timer) = load.timeout.as_mut() else {
                return true;
            };

            timer.tick(delta);
            if !timer.finished() {
                return true;
            }

            load.task.cancel();
            expired.push(load.entry);
            false
        });

        for id in expired {
            self.fail_entry(id, "timed out");
        }
    }

    /// True when every entry is finished. Failed entries count too when the
    /// policy is [`FailurePolicy::Settle`]. An empty coordinator is finished.
    pub fn all_finished(&self) -> bool {
        match self.config.failure_policy {
            FailurePolicy::Settle => self.entries.iter().all(TrackerEntry::settled),
            FailurePolicy::Block => self.entries.iter().all(TrackerEntry::finished),
        }
    }

    /// Average progress of all the entries from 0 to 100, `None` without entries
    pub fn aggregate_percent(&self) -> Option<f32> {
        if self.entries.is_empty() {
            return None;
        }

        let sum: f32 = self.entries.iter().map(TrackerEntry::progress).sum();
        Some((sum / self.entries.len() as f32) * 100.0)
    }

    pub fn has_failures(&self) -> bool {
        self.entries.iter().any(|entry| entry.error().is_some())
    }

    pub fn report(&self) -> LoadReport {
        LoadReport {
            total: self.entries.len(),
            failed: self
                .entries
                .iter()
                .filter_map(|entry| {
                    entry
                        .error()
                        .map(|err| (entry.path().to_string(), err.to_string()))
                })
                .collect(),
        }
    }

    /// Informational, true until loading completes for the first time
    pub fn first_load(&self) -> bool {
        self.first_load
    }

    /// Whether the completion sequence already ran
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Sets the action to run on completion instead of revealing the
    /// interface. Only the first call wins, returns false if one was set.
    pub fn set_completion_action<F>(&mut self, action: F) -> bool
    where
        F: FnOnce(&mut Completion<'_>) + 'static,
    {
        if self.completion.is_some() || self.completed {
            return false;
        }

        self.completion = Some(Box::new(action));
        true
    }

    pub fn is_armed(&self) -> bool {
        self.completion.is_some()
    }

    /// Runs the close handler registered by the modal, false if there was none
    pub fn close_modal(&mut self) -> bool {
        match self.on_close.take() {
            Some(cb) => {
                cb(&mut self.host);
                true
            }
            None => false,
        }
    }

    fn drop_pending(&mut self, id: EntryId) {
        if let Some(pos) = self.pending.iter().position(|load| load.entry == id) {
            let load = self.pending.remove(pos);
            load.task.cancel();
        }
    }

    fn apply_event(&mut self, load: &mut PendingLoad<B::Artifact>, evt: LoadEvent<B::Artifact>) {
        match evt {
            LoadEvent::Progress {
                loaded,
                total,
                length_computable,
            } => {
                if length_computable && total > 0 {
                    self.set_progress(load.entry, loaded as f32 / total as f32);
                }
            }
            LoadEvent::Loaded(artifact) => {
                if let Some(cb) = load.on_success.take() {
                    cb(artifact);
                }
                self.mark_finished(load.entry);
            }
            LoadEvent::Failed(err) => self.fail_entry(load.entry, err),
        }
    }

    fn check_completion(&mut self) {
        if self.completed || !self.all_finished() {
            return;
        }

        self.completed = true;
        self.first_load = false;

        let report = self.report();
        log::info!(
            "Loading completed: {} loaded, {} failed",
            report.succeeded(),
            report.failed.len()
        );

        match self.completion.take() {
            Some(action) => {
                let mut ctx = Completion {
                    host: &mut self.host,
                    config: &self.config,
                    report: &report,
                    on_close: &mut self.on_close,
                };
                action(&mut ctx);
            }
            None => self.host.set_interface_visible(true),
        }

        self.host.set_loading_screen_visible(false);
    }
}
