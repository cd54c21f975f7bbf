//! Nabu engine crate.
//!
//! Host-independent building blocks shared by the widget framework:
//! geometry, platform-agnostic input, logging setup and the recorded
//! draw stream produced by headless hosts.

pub mod coords;
pub mod input;
pub mod logging;
pub mod scene;
