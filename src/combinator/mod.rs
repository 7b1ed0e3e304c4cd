//! Concurrent "all" combinator

pub mod all;
pub mod error;
pub mod input;

pub use all::{all, all_futures, all_with, All, AllOptions};
pub use error::AllError;
pub use input::Input;
