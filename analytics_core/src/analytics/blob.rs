//! Persisted-form helpers for the dense analytics array.
//!
//! The storage layer persists the array as an opaque blob keyed by
//! (control, model, season window). These helpers give it a deterministic
//! change-detection checksum and the shape check it must run before reading
//! a loaded blob positionally.

use sha2::{Digest, Sha256};

use crate::analytics::dense::ensure_array_size;
use crate::error::AnalyticsResult;

/// SHA-256 checksum of the canonical cell encoding (little-endian f64).
///
/// Deterministic across platforms for identical cell contents, so equal
/// checksums mean an unchanged blob.
pub fn blob_checksum(cells: &[f64]) -> String {
    let mut hasher = Sha256::new();
    for cell in cells {
        hasher.update(cell.to_le_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Validate a loaded blob's shape for its declared state count.
///
/// A mismatch is the distinct corrupt/stale-data condition; recovery
/// (typically re-zeroing) belongs to the aggregation layer, never here.
pub fn validate_blob(cells: &[f64], num_states: u8) -> AnalyticsResult<()> {
    ensure_array_size(cells, num_states)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::dense::create_dense_array;

    #[test]
    fn test_checksum_is_deterministic() {
        let blob = create_dense_array(2).unwrap();
        assert_eq!(blob_checksum(&blob), blob_checksum(&blob));
    }

    #[test]
    fn test_checksum_detects_single_cell_change() {
        let blob = create_dense_array(2).unwrap();
        let mut changed = blob.clone();
        changed[17] += 300_000.0;
        assert_ne!(blob_checksum(&blob), blob_checksum(&changed));
    }

    #[test]
    fn test_validate_blob_rejects_wrong_shape() {
        let blob = create_dense_array(3).unwrap();
        assert!(validate_blob(&blob, 3).is_ok());
        assert!(validate_blob(&blob, 4).is_err());
    }
}
