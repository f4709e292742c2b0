use assets::{LoadBridge, LoadSender, LoadTask, load_channel};
use std::cell::RefCell;
use std::rc::Rc;

/// Bridge that keeps the senders so a test decides when and how loads end
#[derive(Clone, Default)]
pub(crate) struct ManualBridge(Rc<RefCell<Vec<LoadSender<String>>>>);

impl ManualBridge {
    /// Takes the sender of the first pending load for `path`
    pub(crate) fn sender(&self, path: &str) -> LoadSender<String> {
        let mut senders = self.0.borrow_mut();
        let pos = senders
            .iter()
            .position(|tx| tx.id() == path)
            .unwrap_or_else(|| panic!("No load requested for '{path}'"));
        senders.remove(pos)
    }

    pub(crate) fn requested(&self) -> Vec<String> {
        self.0.borrow().iter().map(|tx| tx.id().to_string()).collect()
    }
}

impl LoadBridge for ManualBridge {
    type Artifact = String;

    fn load(&mut self, path: &str) -> LoadTask<String> {
        let (tx, task) = load_channel(path);
        self.0.borrow_mut().push(tx);
        task
    }
}
