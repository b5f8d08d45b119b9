//! Domain Layer
//!
//! Pure types and interfaces, no I/O.
//!
//! - `entities/` - `DeploymentSpec`, `Artifact`, `Step`
//! - `value_objects/` - `Language`, `PortValue`
//! - `ports/` - `ArtifactGenerator`, `CommandRunner`, `EventSink`

pub mod entities;
pub mod ports;
pub mod value_objects;
