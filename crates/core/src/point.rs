use thiserror::Error;

use crate::radix::{DecodeError, EncodedValue};

/// A decoded interpolation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct DataPoint {
    /// The 1-based point index.
    pub x: u64,
    /// The decoded value at `x`.
    pub y: u64,
}

/// A point whose value could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to decode point {index}")]
pub struct PointError {
    pub index: u64,
    #[source]
    pub source: DecodeError,
}

impl DataPoint {
    /// Creates a point from an index and an already decoded value.
    #[must_use]
    pub fn new(x: u64, y: u64) -> Self {
        Self { x, y }
    }

    /// Creates a point by decoding an encoded value at index `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoded value cannot be decoded.
    pub fn from_encoded(x: u64, encoded: &EncodedValue) -> Result<Self, PointError> {
        let y = encoded
            .decode()
            .map_err(|source| PointError { index: x, source })?;
        Ok(Self { x, y })
    }
}

/// Decodes `(index, value)` entries into points ordered by index.
///
/// Entries may arrive in any order.
///
/// # Errors
///
/// Returns the first entry, in index order, whose value cannot be decoded.
pub fn decode_points<I>(entries: I) -> Result<Vec<DataPoint>, PointError>
where
    I: IntoIterator<Item = (u64, EncodedValue)>,
{
    let mut entries: Vec<_> = entries.into_iter().collect();
    entries.sort_by_key(|(index, _)| *index);

    entries
        .iter()
        .map(|(index, encoded)| DataPoint::from_encoded(*index, encoded))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_reference_points() {
        let points = decode_points([
            (1, EncodedValue::new(10, "4")),
            (2, EncodedValue::new(2, "111")),
            (3, EncodedValue::new(10, "12")),
        ])
        .unwrap();

        assert_eq!(
            points,
            vec![
                DataPoint::new(1, 4),
                DataPoint::new(2, 7),
                DataPoint::new(3, 12),
            ]
        );
    }

    #[test]
    fn sorts_entries_by_index() {
        let points = decode_points([
            (6, EncodedValue::new(4, "213")),
            (2, EncodedValue::new(16, "a")),
            (3, EncodedValue::new(8, "7")),
        ])
        .unwrap();

        let xs: Vec<u64> = points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2, 3, 6]);
        assert_eq!(points[2].y, 2 * 16 + 4 + 3);
    }

    #[test]
    fn reports_index_of_bad_entry() {
        let error = decode_points([
            (1, EncodedValue::new(10, "4")),
            (2, EncodedValue::new(2, "121")),
        ])
        .unwrap_err();

        assert_eq!(error.index, 2);
        assert!(matches!(
            error.source,
            DecodeError::DigitOutOfRange { ch: '2', .. }
        ));
    }

    #[test]
    fn empty_input_gives_no_points() {
        let points = decode_points(std::iter::empty()).unwrap();
        assert!(points.is_empty());
    }
}
