pub use crate::config::{FailurePolicy, LoadingConfig};
pub use crate::host::{Host, HostClock, InterfaceVisibility, Modal, ModalPresenter};
pub use crate::loading::{
    Completion, EntryId, EntryState, LoadReport, LoadingCoordinator, TrackerEntry,
};
pub use crate::welcome::{DisplayText, Scenario, ScenarioTexts};
pub use assets::{BytesBridge, LoadBridge, LoadEvent};

#[cfg(not(target_arch = "wasm32"))]
pub use assets::FileBridge;

#[cfg(feature = "logs")]
pub use crate::logger::{LogConfig, init_logs};
