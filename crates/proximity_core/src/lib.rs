pub mod config;
pub mod error;
pub mod focus;
pub mod geo;
pub mod location;
pub mod matching;
pub mod zone;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;
