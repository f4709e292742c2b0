/// Summary handed to the completion action
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub total: usize,
    /// `(path, reason)` of every failed load
    pub failed: Vec<(String, String)>,
}

impl LoadReport {
    #[inline]
    pub fn succeeded(&self) -> usize {
        self.total - self.failed.len()
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
