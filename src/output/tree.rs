//! Tree formatter for console output
//!
//! This module provides `TreeFormatter` which writes a built `TreeNode`
//! tree as text, colored or plain.

use std::io::{self, Write};

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::render::{RenderedLine, render};

/// Formatter for tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Plain text, one line per node, newline terminated.
    pub fn format(&self, node: &TreeNode) -> String {
        render(node)
            .iter()
            .map(|line| format!("{}\n", line.plain()))
            .collect()
    }

    pub fn print(&self, node: &TreeNode) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write(node, &mut stdout)?;
        stdout.flush()
    }

    /// Write every line of `node` to `out`, styling text when the writer
    /// supports color. Branch glyphs are never styled.
    pub fn write<W: WriteColor>(&self, node: &TreeNode, out: &mut W) -> io::Result<()> {
        for line in render(node) {
            self.write_line(&line, out)?;
        }
        Ok(())
    }

    fn write_line<W: WriteColor>(&self, line: &RenderedLine, out: &mut W) -> io::Result<()> {
        write!(out, "{}", line.prefix)?;
        if self.config.use_color {
            out.set_color(&line.style.color_spec())?;
        }
        write!(out, "{}", line.text)?;
        if self.config.use_color {
            out.reset()?;
        }
        writeln!(out)
    }
}
