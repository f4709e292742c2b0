mod bytes;
mod cancel;
mod events;
#[cfg(not(target_arch = "wasm32"))]
mod load_file;

pub use bytes::BytesBridge;
pub use cancel::CancelToken;
pub use events::{LoadEvent, LoadSender, LoadTask, load_channel};
#[cfg(not(target_arch = "wasm32"))]
pub use load_file::FileBridge;

/// Something able to start asynchronous loads.
///
/// Each call returns a [`LoadTask`] that yields progress events followed by
/// exactly one terminal event (`Loaded` or `Failed`).
pub trait LoadBridge {
    type Artifact;

    fn load(&mut self, path: &str) -> LoadTask<Self::Artifact>;
}
