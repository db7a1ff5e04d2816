//! Storage infrastructure: configuration file loading.
//!
//! TaskCorner only ever *reads* its configuration.  Nothing the user does
//! while it runs is persisted; the one piece of state that outlives a run is
//! the taskbar setting it restores on exit.

pub mod config;
