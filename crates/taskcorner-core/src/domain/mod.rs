//! Domain entities for TaskCorner.
//!
//! Pure business rules with no infrastructure dependencies.  Code in the
//! application and infrastructure layers depends on these types; the domain
//! never depends on them.

pub mod gesture;
pub mod input;
pub mod taskbar;
pub mod trigger;
