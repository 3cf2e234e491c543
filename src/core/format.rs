//! Record formatting
//!
//! One record becomes one line: severity name, a tab, the tag in square
//! brackets, a tab, the message, a line terminator. The shape is fixed; it
//! does not vary by sink or by the dynamic type of tag and message.

use super::error::Result;
use super::render::Render;
use super::severity::Severity;
use super::sink::{Sink, LINE_TERMINATOR};

/// Render one record into `sink`.
///
/// Tag and message render themselves, so this runs once per sink rather than
/// reusing a pre-rendered string: a self-rendering value may be a
/// side-effecting stream writer, not a buffer.
///
/// Expects a non-sentinel severity; the level filter has already run by the
/// time dispatch reaches a sink.
pub fn write_record(
    sink: &mut dyn Sink,
    severity: Severity,
    tag: &dyn Render,
    message: &dyn Render,
) -> Result<()> {
    sink.write_str(severity.as_str())?;
    sink.write_char('\t')?;
    sink.write_char('[')?;
    tag.render(sink)?;
    sink.write_char(']')?;
    sink.write_char('\t')?;
    message.render(sink)?;
    sink.write_str(LINE_TERMINATOR)
}
