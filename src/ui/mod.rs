//! Per-screen output. Every function writes plain lines to a `Write` so
//! the menu loop can run against stdout or a test buffer.

pub mod practice;
pub mod quiz;
pub mod result;
pub mod welcome;
