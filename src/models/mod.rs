//! Core data models for the ground-handling cost engine.
//!
//! This module contains all the domain models used throughout the engine.

mod quote;
mod route;
mod stop;

pub use quote::{BreakdownLine, Quote};
pub use route::Route;
pub use stop::{LegType, Stop};
