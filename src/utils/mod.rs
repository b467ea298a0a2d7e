//! Shared helpers for statistics and report rendering

pub mod math;
pub mod time;
