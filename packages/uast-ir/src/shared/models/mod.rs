//! Shared models used across features

mod span;

pub use span::{Location, Position};
