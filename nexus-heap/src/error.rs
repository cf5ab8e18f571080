//! Error types for heap operations.

use core::fmt;

/// Error returned when an element cannot be enqueued.
///
/// The only rejected argument is an element whose key is already queued:
/// the position index holds one slot per key. The element is handed back
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidArgument<T>(pub T);

impl<T> InvalidArgument<T> {
    /// Returns the element that was rejected.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for InvalidArgument<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element key is already queued")
    }
}

impl<T: fmt::Debug> std::error::Error for InvalidArgument<T> {}

/// Error returned when popping from an empty heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyQueue;

impl fmt::Display for EmptyQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot pop, queue is empty")
    }
}

impl std::error::Error for EmptyQueue {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(InvalidArgument(5).to_string(), "element key is already queued");
        assert_eq!(EmptyQueue.to_string(), "cannot pop, queue is empty");
    }

    #[test]
    fn invalid_argument_returns_element() {
        let err = InvalidArgument(String::from("rejected"));
        assert_eq!(err.into_inner(), "rejected");
    }

    #[test]
    fn boxes_as_std_error() {
        let errors: Vec<Box<dyn std::error::Error>> =
            vec![Box::new(InvalidArgument(1u8)), Box::new(EmptyQueue)];
        assert_eq!(errors.len(), 2);
    }
}
