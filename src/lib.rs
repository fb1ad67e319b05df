//! Charts for the performance test CSV files written by the collabora-online test suite.
//!
//! The pipeline is [`locate`] → [`parse`] → [`chart`] → [`render`], driven by
//! [`orchestrator::run`]. Rendering is behind the [`render::ChartRenderer`] trait so
//! everything up to the screen can run headless.

pub mod chart;
pub mod cli;
pub mod error;
pub mod locate;
pub mod logging;
pub mod metrics;
pub mod model;
pub mod orchestrator;
pub mod parse;
pub mod render;
mod text_summary;
#[cfg(feature = "tui")]
pub mod tui;

pub use error::{PerfError, Result};
