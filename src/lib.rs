//! View model for exploring how strongly AI affects occupations and college
//! majors: replacement risk ("negative" exposure) against enhancement
//! potential ("positive" exposure).
//!
//! The rendering shell lives in the binary; everything here is plain data and
//! pure transitions so it can be tested without a window.

pub mod color;
pub mod config;
pub mod data;
pub mod state;
