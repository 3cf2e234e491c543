//! Self-rendering capability for tags and messages
//!
//! A tag or message may be a plain text value or any user type that knows how
//! to write itself into a sink, possibly across several write calls. The
//! logger never takes ownership of the data; it renders through a shared
//! borrow, once per attached sink.

use super::error::Result;
use super::sink::Sink;
use std::fmt;

/// A value that can render itself into a sink.
///
/// Returns the number of bytes written. Implementations are free to issue
/// any number of write calls; the formatter places the rendered output
/// verbatim between its own delimiters.
pub trait Render {
    fn render(&self, sink: &mut dyn Sink) -> Result<usize>;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, sink: &mut dyn Sink) -> Result<usize> {
        (**self).render(sink)
    }
}

impl Render for str {
    fn render(&self, sink: &mut dyn Sink) -> Result<usize> {
        sink.write_str(self)?;
        Ok(self.len())
    }
}

impl Render for String {
    fn render(&self, sink: &mut dyn Sink) -> Result<usize> {
        self.as_str().render(sink)
    }
}

impl Render for char {
    fn render(&self, sink: &mut dyn Sink) -> Result<usize> {
        sink.write_char(*self)?;
        Ok(self.len_utf8())
    }
}

macro_rules! impl_render_for_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, sink: &mut dyn Sink) -> Result<usize> {
                    let text = self.to_string();
                    sink.write_str(&text)?;
                    Ok(text.len())
                }
            }
        )+
    };
}

impl_render_for_display!(
    bool, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

/// Adapter rendering any [`Display`](fmt::Display) type as plain text.
///
/// For types that have a textual form but no [`Render`] implementation of
/// their own.
pub struct Plain<T: fmt::Display>(pub T);

impl<T: fmt::Display> Render for Plain<T> {
    fn render(&self, sink: &mut dyn Sink) -> Result<usize> {
        let text = self.0.to_string();
        sink.write_str(&text)?;
        Ok(text.len())
    }
}
