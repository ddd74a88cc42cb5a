use thiserror::Error;

/// Structural errors reported by the checked removal operations.
///
/// Checked operations verify their position arguments before touching any
/// link, so a returned error always leaves the sequence exactly as it was.
///
/// # Examples
///
/// ```
/// use linked_sequence::{Error, LinkedSequence};
///
/// let mut seq: LinkedSequence<i32> = LinkedSequence::new();
/// assert_eq!(seq.erase(0), Err(Error::Empty));
///
/// seq.push_back(1);
/// assert_eq!(seq.erase(1), Err(Error::InvalidPosition));
/// assert_eq!(seq.erase(0), Ok(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The operation needs a removable element, but the given position is
    /// the end of the sequence, which never holds one.
    #[error("the end position does not hold a removable element")]
    InvalidPosition,
    /// Removal was attempted on a sequence with no elements.
    #[error("the sequence is empty")]
    Empty,
}
