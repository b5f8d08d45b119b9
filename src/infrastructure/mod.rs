//! Infrastructure Layer
//!
//! Concrete implementations of domain ports. All I/O lives here.
//!
//! - `events/` - console and NDJSON event sinks
//! - `fs/` - atomic local writes
//! - `generators/` - artifact generators
//! - `process/` - blocking external process runner

pub mod events;
pub mod fs;
pub mod generators;
pub mod process;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use generators::all_generators;
pub use process::SystemCommandRunner;
