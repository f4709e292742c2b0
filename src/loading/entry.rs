/// Handle to a [`TrackerEntry`] owned by a coordinator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq)]
pub enum EntryState {
    Pending,
    Finished,
    Failed(String),
}

/// Progress of one requested load
#[derive(Debug, Clone)]
pub struct TrackerEntry {
    path: String,
    progress: f32,
    state: EntryState,
}

impl TrackerEntry {
    pub(crate) fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            progress: 0.0,
            state: EntryState::Pending,
        }
    }

    /// Path or id requested
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Value between 0.0 and 1.0
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn state(&self) -> &EntryState {
        &self.state
    }

    pub fn finished(&self) -> bool {
        matches!(self.state, EntryState::Finished)
    }

    /// Failure reason, if the load failed
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            EntryState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Finished or failed, either way it won't change anymore
    pub fn settled(&self) -> bool {
        !matches!(self.state, EntryState::Pending)
    }

    /// Updates the progress, ignored once settled
    pub(crate) fn set_progress(&mut self, progress: f32) -> bool {
        if self.settled() {
            return false;
        }

        // NaN would poison the aggregated percent
        if progress.is_nan() {
            return false;
        }

        self.progress = progress.clamp(0.0, 1.0);
        true
    }

    /// A failed entry can still finish, a finished one stays finished
    pub(crate) fn finish(&mut self) -> bool {
        if self.finished() {
            return false;
        }

        self.progress = 1.0;
        self.state = EntryState::Finished;
        true
    }

    /// `settle` fills the progress so the failed entry stops holding back the percent
    pub(crate) fn fail(&mut self, err: String, settle: bool) -> bool {
        if self.settled() {
            return false;
        }

        if settle {
            self.progress = 1.0;
        }
        self.state = EntryState::Failed(err);
        true
    }
}
