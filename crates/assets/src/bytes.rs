use crate::{LoadBridge, LoadTask, load_channel};
use rustc_hash::FxHashMap;

/// Serves loads from bytes already in memory. Every load resolves as soon as
/// it is requested.
#[derive(Default)]
pub struct BytesBridge {
    data: FxHashMap<String, Vec<u8>>,
}

impl BytesBridge {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_bytes<B>(mut self, id: &str, bytes: B) -> Self
    where
        B: Into<Vec<u8>>,
    {
        self.insert(id, bytes);
        self
    }

    pub fn insert<B>(&mut self, id: &str, bytes: B)
    where
        B: Into<Vec<u8>>,
    {
        self.data.insert(id.to_string(), bytes.into());
    }
}

impl LoadBridge for BytesBridge {
    type Artifact = Vec<u8>;

    fn load(&mut self, path: &str) -> LoadTask<Vec<u8>> {
        let (tx, task) = load_channel(path);
        match self.data.get(path) {
            Some(bytes) => {
                let len = bytes.len() as u64;
                tx.progress(len, Some(len));
                tx.loaded(bytes.clone());
            }
            None => tx.failed(format!("Cannot load '{path}': no bytes registered")),
        }
        task
    }
}
