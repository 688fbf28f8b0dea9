//! Utility helpers: generational storage, logging, and profiling counters.

pub mod allocator;
pub mod logging;
pub mod profiling;

pub use allocator::{Arena, Handle};
pub use profiling::SpaceStats;
