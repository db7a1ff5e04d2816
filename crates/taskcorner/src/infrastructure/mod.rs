//! Infrastructure layer.
//!
//! Contains OS-facing adapters: global input hooks, key injection, the
//! taskbar settings backend, user notification, and configuration storage.
//! Every adapter has an in-memory mock used by the tests.

pub mod gesture;
pub mod input_hook;
pub mod notify;
pub mod platform;
pub mod shell;
pub mod storage;
