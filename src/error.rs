use thiserror::Error;

/// Everything that can go wrong when a caller asks for something that must
/// exist. Probing operations (`contains`, `get`, `remove`) report absence
/// through `bool`/`Option` instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// An index outside `[0, len)` was used for get, set, insert or removal.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A keyed lookup that requires the key to be present didn't find it.
    #[error("key not found")]
    KeyNotFound,
}

pub type Result<T> = std::result::Result<T, CollectionError>;

/// Fails with [`CollectionError::IndexOutOfRange`] unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(CollectionError::IndexOutOfRange { index, len })
    }
}

/// Fails unless `len` elements fit in a buffer of `capacity` starting at
/// `offset`.
pub(crate) fn check_copy_bounds(
    offset: usize,
    len: usize,
    capacity: usize,
) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(CollectionError::IndexOutOfRange {
            index: offset.saturating_add(len),
            len: capacity,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::{check_copy_bounds, check_index, CollectionError};

    #[test]
    fn test_check_index() {
        assert_eq!(Ok(()), check_index(0, 1));
        assert_eq!(
            Err(CollectionError::IndexOutOfRange { index: 1, len: 1 }),
            check_index(1, 1)
        );
        assert!(check_index(0, 0).is_err());
        assert!(check_index(usize::MAX, 10).is_err());
    }

    #[test]
    fn test_check_copy_bounds() {
        assert!(check_copy_bounds(0, 3, 3).is_ok());
        assert!(check_copy_bounds(5, 3, 10).is_ok());
        assert!(check_copy_bounds(0, 0, 0).is_ok());
        assert_eq!(
            Err(CollectionError::IndexOutOfRange { index: 11, len: 10 }),
            check_copy_bounds(8, 3, 10)
        );
        assert!(check_copy_bounds(usize::MAX, 1, 10).is_err());
    }

    #[test]
    fn test_display() {
        let e = CollectionError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!("index 4 is out of range for length 2", e.to_string());
        assert_eq!("key not found", CollectionError::KeyNotFound.to_string());
    }
}
