//! Tracks a set of asset loads and runs a single completion action once all
//! of them are done, optionally showing a welcome modal for a scenario before
//! the host simulation resumes.

pub mod config;
pub mod host;
pub mod loading;
pub mod prelude;
pub mod timer;
pub mod welcome;

#[cfg(feature = "logs")]
pub mod logger;

#[doc(inline)]
pub use assets;
