//! Output targets shared by the escaper and the unescaper.
//!
//! Both transforms are written once against [`Sink`] and then run into an
//! owned `String`, a caller-provided byte buffer, or a length counter.

use alloc::string::String;

/// Destination for transformed text. Returns `None` when the destination is full.
pub(crate) trait Sink {
    fn push_str(&mut self, s: &str) -> Option<()>;
}

impl Sink for String {
    fn push_str(&mut self, s: &str) -> Option<()> {
        String::push_str(self, s);
        Some(())
    }
}

/// A cursor-based writer into a caller-provided byte buffer.
pub(crate) struct SliceWriter<'buf> {
    buf: &'buf mut [u8],
    pos: usize,
}

impl<'buf> SliceWriter<'buf> {
    pub(crate) fn new(buf: &'buf mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Returns the number of bytes written so far.
    pub(crate) fn written(&self) -> usize {
        self.pos
    }
}

impl Sink for SliceWriter<'_> {
    fn push_str(&mut self, s: &str) -> Option<()> {
        let data = s.as_bytes();
        let end = self.pos.checked_add(data.len())?;
        if end > self.buf.len() {
            return None;
        }
        self.buf[self.pos..end].copy_from_slice(data);
        self.pos = end;
        Some(())
    }
}

/// Counts output bytes without storing them.
#[derive(Default)]
pub(crate) struct LenCounter(pub(crate) usize);

impl Sink for LenCounter {
    fn push_str(&mut self, s: &str) -> Option<()> {
        self.0 += s.len();
        Some(())
    }
}

/// Copies `s` into `out`, replacing the ASCII bytes for which `map` returns a
/// substitute. Unmapped stretches are pushed as whole slices.
///
/// `map` receives the byte offset and the byte. Only ASCII bytes are offered,
/// so every split point is a char boundary.
pub(crate) fn write_mapped<S, F>(s: &str, out: &mut S, mut map: F) -> Option<()>
where
    S: Sink,
    F: FnMut(usize, u8) -> Option<&'static str>,
{
    let mut run = 0;
    for (i, &b) in s.as_bytes().iter().enumerate() {
        if !b.is_ascii() {
            continue;
        }
        if let Some(sub) = map(i, b) {
            out.push_str(&s[run..i])?;
            out.push_str(sub)?;
            run = i + 1;
        }
    }
    out.push_str(&s[run..])
}
