use crate::{LoadBridge, LoadSender, LoadTask, load_channel};
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::fs::File;
use std::io::Read;

const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Loads files from disk on a thread pool, reporting progress per chunk read.
pub struct FileBridge {
    thread_pool: ThreadPool,
    chunk_size: usize,
}

impl FileBridge {
    pub fn new() -> Result<Self, String> {
        let thread_pool = ThreadPoolBuilder::default()
            .thread_name(|i| format!("file-bridge-{i}"))
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Self {
            thread_pool,
            chunk_size: DEFAULT_CHUNK_SIZE,
        })
    }

    /// Bytes read between progress events
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }
}

impl LoadBridge for FileBridge {
    type Artifact = Vec<u8>;

    fn load(&mut self, path: &str) -> LoadTask<Vec<u8>> {
        log::debug!("Loading file '{path}'");
        let (tx, task) = load_channel(path);
        let path = path.to_owned();
        let chunk_size = self.chunk_size;
        self.thread_pool
            .spawn(move || send_file(&path, chunk_size, tx));
        task
    }
}

fn send_file(path: &str, chunk_size: usize, tx: LoadSender<Vec<u8>>) {
    match read_file(path, chunk_size, &tx) {
        Ok(buff) => tx.loaded(buff),
        Err(err) => tx.failed(format!("Cannot load file: {path}: {err}")),
    }
}

fn read_file(path: &str, chunk_size: usize, tx: &LoadSender<Vec<u8>>) -> Result<Vec<u8>, String> {
    let mut file = File::open(path).map_err(|e| e.to_string())?;
    let total = file.metadata().ok().map(|m| m.len());

    let mut buff = Vec::with_capacity(total.unwrap_or_default() as usize);
    let mut chunk = vec![0; chunk_size];
    loop {
        if tx.is_cancelled() {
            return Err("cancelled".to_string());
        }

        let read = file.read(&mut chunk).map_err(|e| e.to_string())?;
        if read == 0 {
            break;
        }

        buff.extend_from_slice(&chunk[..read]);
        tx.progress(buff.len() as u64, total);
    }

    Ok(buff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LoadEvent;
    use futures::StreamExt;
    use futures::executor::block_on;
    use std::io::Write;

    #[test]
    fn test_load_file_in_chunks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[7u8; 10]).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let mut bridge = FileBridge::new().unwrap().with_chunk_size(4);
        let events = block_on(bridge.load(&path).collect::<Vec<_>>());

        let progress = events
            .iter()
            .filter_map(|evt| match evt {
                LoadEvent::Progress {
                    loaded,
                    total,
                    length_computable,
                } => {
                    assert!(*length_computable, "File size is known");
                    assert_eq!(*total, 10);
                    Some(*loaded)
                }
                _ => None,
            })
            .collect::<Vec<_>>();

        assert_eq!(progress, vec![4, 8, 10]);
        assert_eq!(events.last(), Some(&LoadEvent::Loaded(vec![7u8; 10])));
    }

    #[test]
    fn test_cancelled_read_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[7u8; 16]).unwrap();
        let path = file.path().to_string_lossy().to_string();

        let (tx, task) = load_channel(&path);
        task.cancel();
        send_file(&path, 4, tx);

        let events = block_on(task.collect::<Vec<_>>());
        assert!(
            !events.iter().any(|evt| matches!(evt, LoadEvent::Loaded(_))),
            "A cancelled read never loads"
        );
        match events.last() {
            Some(LoadEvent::Failed(err)) => assert!(err.contains("cancelled"), "Got '{err}'"),
            other => panic!("Expected a failure, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.mesh");

        let mut bridge = FileBridge::new().unwrap();
        let events = block_on(bridge.load(&path.to_string_lossy()).collect::<Vec<_>>());

        assert_eq!(events.len(), 1, "Only the failure is expected");
        match &events[0] {
            LoadEvent::Failed(err) => assert!(err.contains("missing.mesh")),
            other => panic!("Expected a failure, got {other:?}"),
        }
    }
}
