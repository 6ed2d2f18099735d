//! Bridge between the UI thread and the async prediction worker.

pub mod commands;
pub mod runtime;
