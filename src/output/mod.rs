//! Tree formatting and display
//!
//! - `render` - turns a tree into styled lines
//! - `tree` - writes those lines to a terminal or buffer
//! - `json` - JSON output
//! - `config` - output configuration types

mod config;
mod json;
mod render;
mod tree;

pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use render::{RenderedLine, StyleTag, render};
pub use tree::TreeFormatter;
