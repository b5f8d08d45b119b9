//! Process Execution
//!
//! Concrete implementation of the CommandRunner port.

mod system;

pub use system::SystemCommandRunner;
