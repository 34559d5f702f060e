//! Bounds-checked sequential reader over an in-memory buffer

use crate::error::{OeMeshError, Result};

/// Sequential reader over a borrowed byte slice
///
/// Every read either yields exactly the requested bytes and advances, or
/// fails with [`OeMeshError::Truncated`] and leaves the position untouched.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current read offset from the start of the buffer
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }

    /// Read the next `n` bytes
    pub fn read(&mut self, n: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(OeMeshError::Truncated {
                offset: self.pos,
                needed: n,
                remaining,
            });
        }
        let bytes = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Allocate a vector for `count` stream records of at least `min_record_size` bytes each
    ///
    /// Capacity is capped by what the remaining bytes could hold, so a corrupt
    /// count surfaces as `Truncated` on the read rather than a giant allocation.
    pub fn alloc_records<T>(&self, count: usize, min_record_size: usize) -> Result<Vec<T>> {
        let fits = self
            .remaining()
            .checked_div(min_record_size)
            .unwrap_or(count);
        let capacity = count.min(fits);

        let mut records = Vec::new();
        records
            .try_reserve_exact(capacity)
            .map_err(|_| OeMeshError::AllocationFailure {
                requested: capacity,
            })?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_advances() {
        let data = [1u8, 2, 3, 4, 5];
        let mut cursor = ByteCursor::new(&data);

        assert_eq!(cursor.read(2).unwrap(), &[1, 2]);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.remaining(), 3);
        assert_eq!(cursor.read(3).unwrap(), &[3, 4, 5]);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_zero_length_read() {
        let mut cursor = ByteCursor::new(&[]);
        assert_eq!(cursor.read(0).unwrap(), &[] as &[u8]);
        assert_eq!(cursor.position(), 0);

        let data = [7u8];
        let mut cursor = ByteCursor::new(&data);
        cursor.read(1).unwrap();
        assert!(cursor.read(0).is_ok());
    }

    #[test]
    fn test_exact_final_read() {
        let data = [0u8; 8];
        let mut cursor = ByteCursor::new(&data);
        cursor.read(4).unwrap();
        assert!(cursor.read(4).is_ok());
        assert_eq!(cursor.position(), 8);
    }

    #[test]
    fn test_overrun_leaves_cursor_unmodified() {
        let data = [0u8; 6];
        let mut cursor = ByteCursor::new(&data);
        cursor.read(4).unwrap();

        let err = cursor.read(3).unwrap_err();
        assert!(matches!(
            err,
            OeMeshError::Truncated {
                offset: 4,
                needed: 3,
                remaining: 2
            }
        ));
        assert_eq!(cursor.position(), 4);

        // A smaller read still succeeds after the failed one
        assert_eq!(cursor.read(2).unwrap().len(), 2);
    }

    #[test]
    fn test_huge_read_does_not_overflow() {
        let data = [0u8; 4];
        let mut cursor = ByteCursor::new(&data);
        cursor.read(1).unwrap();
        assert!(cursor.read(usize::MAX).is_err());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_alloc_records_capped_by_remaining() {
        let data = [0u8; 40];
        let cursor = ByteCursor::new(&data);

        let records: Vec<u32> = cursor.alloc_records(u32::MAX as usize, 8).unwrap();
        assert!(records.capacity() >= 5);
        assert!(records.capacity() < 1024);

        let small: Vec<u32> = cursor.alloc_records(3, 8).unwrap();
        assert!(small.capacity() >= 3);
    }

    #[test]
    fn test_alloc_records_zero_size_uses_count() {
        let cursor = ByteCursor::new(&[]);
        let records: Vec<u8> = cursor.alloc_records(16, 0).unwrap();
        assert!(records.capacity() >= 16);
    }
}
