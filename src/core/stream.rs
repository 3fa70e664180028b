// Forward-only cursor over the plot byte stream

use crate::core::error::{NexError, Result};
use crate::core::format::FixedStr;
use std::io::{self, ErrorKind, Read};

/// Reinterpret the bits of a wire integer as an IEEE-754 float.
pub fn interpret_float(raw: i32) -> f32 {
    f32::from_bits(raw as u32)
}

/// Wraps a reader and tracks how many bytes have been consumed, so every
/// short read can report where it happened. Never seeks backwards.
pub struct PlotStream<R> {
    inner: R,
    offset: u64,
}

impl<R: Read> PlotStream<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, offset: 0 }
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn read_bytes<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N]> {
        let mut buf = [0u8; N];
        self.fill(&mut buf, context)?;
        Ok(buf)
    }

    pub fn read_str<const N: usize>(&mut self, context: &'static str) -> Result<FixedStr<N>> {
        self.read_bytes::<N>(context).map(FixedStr::new)
    }

    pub fn read_i32(&mut self, context: &'static str) -> Result<i32> {
        self.read_bytes::<4>(context).map(i32::from_be_bytes)
    }

    pub fn read_i32_array<const N: usize>(&mut self, context: &'static str) -> Result<[i32; N]> {
        let mut out = [0i32; N];
        for slot in out.iter_mut() {
            *slot = self.read_i32(context)?;
        }
        Ok(out)
    }

    /// Reads `count` big-endian integers. Allocation grows with the data
    /// actually present, so a corrupted count fails on EOF instead of
    /// reserving memory up front.
    pub fn read_i32_vec(&mut self, count: usize, context: &'static str) -> Result<Vec<i32>> {
        let mut out = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            out.push(self.read_i32(context)?);
        }
        Ok(out)
    }

    pub fn read_str_vec<const N: usize>(
        &mut self,
        count: usize,
        context: &'static str,
    ) -> Result<Vec<FixedStr<N>>> {
        let mut out = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            out.push(self.read_str::<N>(context)?);
        }
        Ok(out)
    }

    pub fn skip(&mut self, len: u64, context: &'static str) -> Result<()> {
        let start = self.offset;
        let skipped = io::copy(&mut (&mut self.inner).take(len), &mut io::sink())
            .map_err(|e| eof_or_io(e, start, context))?;
        self.offset += skipped;
        if skipped < len {
            return Err(NexError::UnexpectedEof {
                offset: start,
                context,
            });
        }
        Ok(())
    }

    fn fill(&mut self, buf: &mut [u8], context: &'static str) -> Result<()> {
        let start = self.offset;
        self.inner
            .read_exact(buf)
            .map_err(|e| eof_or_io(e, start, context))?;
        self.offset += buf.len() as u64;
        Ok(())
    }
}

// Truncated compressed input also surfaces as ErrorKind::UnexpectedEof.
fn eof_or_io(e: io::Error, offset: u64, context: &'static str) -> NexError {
    if e.kind() == ErrorKind::UnexpectedEof {
        NexError::UnexpectedEof { offset, context }
    } else {
        NexError::Io(e)
    }
}
