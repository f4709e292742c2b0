use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared flag used to ask a running load to stop.
///
/// Every clone observes the same flag, so the coordinator can keep one copy
/// while the worker polls another one between reads.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_token_state() {
        let token = CancelToken::default();
        assert!(
            !token.is_cancelled(),
            "Token should not be cancelled at creation"
        );
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let token = CancelToken::default();
        let clone = token.clone();

        clone.cancel();
        assert!(
            token.is_cancelled(),
            "Cancelling a clone should be visible from the original"
        );

        drop(clone);
        assert!(
            token.is_cancelled(),
            "Dropping the clone should not reset the flag"
        );
    }
}
