use serde::Deserialize;

/// What a failed load means for completion
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// A failed entry counts as settled, loading still completes and the
    /// failure is listed in the [`LoadReport`](crate::loading::LoadReport)
    #[default]
    Settle,
    /// A failed entry never counts as finished, completion won't fire
    Block,
}

/// Configure how loading is tracked and how the welcome modal behaves
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoadingConfig {
    pub(crate) failure_policy: FailurePolicy,
    pub(crate) timeout: Option<f32>,
    pub(crate) confirm_label: String,
    pub(crate) warmup_step: f32,
    pub(crate) resume_time_scale: f32,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            timeout: None,
            confirm_label: "Play".to_string(),
            warmup_step: 1.0,
            resume_time_scale: 1.0,
        }
    }
}

impl LoadingConfig {
    /// Parses a JSON object, missing fields use the default values
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid loading config: {e}"))
    }

    /// Changes how failed loads affect completion
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Fails any requested load still pending after `secs` seconds of ticks
    pub fn timeout(mut self, secs: f32) -> Self {
        self.timeout = Some(secs);
        self
    }

    /// Label used for the welcome modal button
    pub fn confirm_label(mut self, label: &str) -> Self {
        self.confirm_label = label.to_string();
        self
    }

    /// Delta used to advance the host once before the welcome modal shows
    pub fn warmup_step(mut self, delta: f32) -> Self {
        self.warmup_step = delta;
        self
    }

    /// Time scale restored when the welcome modal closes
    pub fn resume_time_scale(mut self, scale: f32) -> Self {
        self.resume_time_scale = scale;
        self
    }

    #[inline]
    pub fn get_failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    #[inline]
    pub fn get_timeout(&self) -> Option<f32> {
        self.timeout
    }

    #[inline]
    pub fn get_confirm_label(&self) -> &str {
        &self.confirm_label
    }

    #[inline]
    pub fn get_warmup_step(&self) -> f32 {
        self.warmup_step
    }

    #[inline]
    pub fn get_resume_time_scale(&self) -> f32 {
        self.resume_time_scale
    }
}
