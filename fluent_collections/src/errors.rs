use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error, Diagnostic)]
#[error("fill range {start}..{end} is out of bounds for a sequence of length {len}")]
pub struct FillRangeError {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

impl FillRangeError {
    pub fn new(start: usize, end: usize, len: usize) -> Self {
        Self { start, end, len }
    }

    /// Checks that writing to every index of `[start, end)` stays inside a
    /// sequence of length `len`. Empty ranges always pass.
    pub fn check(start: usize, end: usize, len: usize) -> Result<(), Self> {
        if start < end && end > len {
            return Err(Self::new(start, end, len));
        }
        Ok(())
    }
}
