//! Rate-limiting wrappers around plain callbacks

pub mod debounce;
pub mod throttle;

pub use debounce::Debouncer;
pub use throttle::Throttle;
