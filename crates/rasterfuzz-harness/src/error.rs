use rasterfuzz_reader::ReadError;

/// Reasons a raw input fails to become a dispatch.
///
/// Every variant here is an *expected, frequent, non-fault* outcome: a
/// fuzzer feeds this pipeline millions of mostly-garbage inputs, and a
/// rejected input simply means the byte sequence was uninteresting. The
/// iteration entry point absorbs these into a silent skip; they are
/// never reported as bugs and never retried.
///
/// ```text
///   DecodeError
///   ├── Truncated(ReadError)  ← input ended mid-field
///   ├── OutputTooLarge        ← declared output length at/over the cap
///   └── PayloadTooLarge       ← trailing payload at/over the cap
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The input ended before the field sequence completed.
    #[error(transparent)]
    Truncated(#[from] ReadError),

    /// The declared output-buffer length reaches the allocation cap.
    ///
    /// Checked before any buffer is sized from the value: the whole
    /// point of the guard is that the untrusted length never reaches an
    /// allocator.
    #[error("declared output length {declared} exceeds cap {limit}")]
    OutputTooLarge { declared: u32, limit: u32 },

    /// The payload remaining after the fixed fields reaches the cap.
    #[error("payload length {actual} exceeds cap {limit}")]
    PayloadTooLarge { actual: usize, limit: usize },
}
