//! Terminal output and logging

pub mod log;

pub use log::*;
