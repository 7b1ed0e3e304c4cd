//! Concurrent "all" combinator plus small async timing utilities

pub mod combinator;
pub mod config;
pub mod format;
pub mod logging;
pub mod retry;
pub mod scenario;
pub mod timing;

pub use combinator::{all, all_futures, all_with, All, AllError, AllOptions, Input};
