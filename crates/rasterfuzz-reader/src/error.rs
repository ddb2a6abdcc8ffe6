/// Errors produced by [`ByteCursor`](crate::ByteCursor) reads.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Input ended before a complete value could be read.
    ///
    /// The offset is the cursor position at the time of the failed read.
    /// The cursor does not advance on failure, so the offset also
    /// identifies the first byte the value would have occupied.
    #[error("input truncated at offset {offset}: needed {needed} bytes, {available} remain")]
    Truncated {
        needed: usize,
        available: usize,
        offset: usize,
    },
}
