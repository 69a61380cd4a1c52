//! The voting dashboard: a single page listing the candidates and voters
//! of a voting event.

pub mod app;
pub mod config;
pub mod load;
#[cfg(feature = "cli")]
pub mod log;
pub mod pages;
pub mod render;
