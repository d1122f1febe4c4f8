//! Domain - colors, stage configuration and page-driven mode selection

pub mod palette;
pub mod config;
pub mod selection;
