//! Index arithmetic for the flat per-control analytics array.
//!
//! One array per (control, model, season window), length `N² × 10080` for a
//! control with N states. Layout, in order: N holding-time groups (one per
//! state), then N×(N−1) transition-count groups (from-major, to ascending
//! with the diagonal skipped). Every 10080-cell group is five clock blocks
//! of 2016 buckets in canonical clock order. This layout is the persisted
//! contract (downstream consumers address it positionally), so the
//! arithmetic here is deliberately flat and must not change.
//!
//! All functions are pure integer math. Out-of-range inputs fail fast;
//! nothing is clamped or silently wrapped.

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{ClockKind, WeekBucket, CLOCK_COUNT, MAX_SELECTOR_STATES, MIN_SELECTOR_STATES, WEEK_BUCKETS};

/// Cells in one (state or transition-pair) group: 2016 buckets × 5 clocks.
pub const CELLS_PER_GROUP: usize = WEEK_BUCKETS as usize * CLOCK_COUNT;

/// Cells in one clock block within a group.
pub const CELLS_PER_CLOCK_BLOCK: usize = WEEK_BUCKETS as usize;

fn check_state_count(num_states: u8) -> AnalyticsResult<()> {
    if !(MIN_SELECTOR_STATES..=MAX_SELECTOR_STATES).contains(&num_states) {
        return Err(AnalyticsError::invalid_argument(format!(
            "state count must be between {} and {}, got {}",
            MIN_SELECTOR_STATES, MAX_SELECTOR_STATES, num_states
        )));
    }
    Ok(())
}

fn check_state(name: &'static str, state: u8, num_states: u8) -> AnalyticsResult<()> {
    if state >= num_states {
        return Err(AnalyticsError::out_of_range(
            name,
            state as i64,
            0,
            num_states as i64 - 1,
        ));
    }
    Ok(())
}

/// Total cell count for a control with `num_states` states: `N² × 10080`.
pub fn array_size(num_states: u8) -> AnalyticsResult<usize> {
    check_state_count(num_states)?;
    let n = num_states as usize;
    Ok(n * n * CELLS_PER_GROUP)
}

/// Cell index of the holding-time counter for `(state, clock, bucket)`.
pub fn hold_index(
    state: u8,
    clock: ClockKind,
    bucket: WeekBucket,
    num_states: u8,
) -> AnalyticsResult<usize> {
    check_state_count(num_states)?;
    check_state("state", state, num_states)?;
    Ok(state as usize * CELLS_PER_GROUP
        + clock.ordinal() * CELLS_PER_CLOCK_BLOCK
        + bucket.index())
}

/// Position of the `(from, to)` pair in the dense enumeration of the
/// N×(N−1) ordered state pairs (`from`-major, diagonal skipped).
///
/// Self-transitions are never stored, so `from == to` is an error.
pub fn trans_group_index(from: u8, to: u8, num_states: u8) -> AnalyticsResult<usize> {
    check_state_count(num_states)?;
    check_state("from", from, num_states)?;
    check_state("to", to, num_states)?;
    if from == to {
        return Err(AnalyticsError::invalid_argument(format!(
            "self-transition {} -> {} cannot be indexed",
            from, to
        )));
    }
    let offset = if to < from { to } else { to - 1 } as usize;
    Ok(from as usize * (num_states as usize - 1) + offset)
}

/// Cell index of the transition counter for `(from, to, clock, bucket)`.
///
/// The transition section starts after the N holding groups.
pub fn trans_index(
    from: u8,
    to: u8,
    clock: ClockKind,
    bucket: WeekBucket,
    num_states: u8,
) -> AnalyticsResult<usize> {
    let group = trans_group_index(from, to, num_states)?;
    Ok(num_states as usize * CELLS_PER_GROUP
        + group * CELLS_PER_GROUP
        + clock.ordinal() * CELLS_PER_CLOCK_BLOCK
        + bucket.index())
}

/// Zero-filled array of the correct size for `num_states`.
pub fn create_dense_array(num_states: u8) -> AnalyticsResult<Vec<f64>> {
    Ok(vec![0.0; array_size(num_states)?])
}

/// True iff `array` has exactly the length `array_size(num_states)`
/// requires. An array of any other length is corrupt for that state count
/// and must not be read positionally.
pub fn validate_array_size(array: &[f64], num_states: u8) -> bool {
    match array_size(num_states) {
        Ok(expected) => array.len() == expected,
        Err(_) => false,
    }
}

/// Like [`validate_array_size`], but surfaces the mismatch as the distinct
/// corrupt-data error for callers that propagate.
pub fn ensure_array_size(array: &[f64], num_states: u8) -> AnalyticsResult<()> {
    let expected = array_size(num_states)?;
    if array.len() != expected {
        return Err(AnalyticsError::corrupt_array(
            num_states,
            expected,
            array.len(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyticsError;

    fn bucket(value: u16) -> WeekBucket {
        WeekBucket::new(value).unwrap()
    }

    #[test]
    fn test_array_size() {
        assert_eq!(array_size(2).unwrap(), 4 * 10_080);
        assert_eq!(array_size(6).unwrap(), 36 * 10_080);
        assert_eq!(array_size(10).unwrap(), 100 * 10_080);
        assert!(array_size(1).is_err());
        assert!(array_size(11).is_err());
    }

    #[test]
    fn test_hold_index_known_values() {
        assert_eq!(hold_index(0, ClockKind::Utc, bucket(0), 6).unwrap(), 0);
        assert_eq!(hold_index(0, ClockKind::Local, bucket(0), 6).unwrap(), 2016);
        assert_eq!(hold_index(1, ClockKind::Utc, bucket(0), 6).unwrap(), 10_080);
        assert_eq!(
            hold_index(5, ClockKind::UnequalHours, bucket(2015), 6).unwrap(),
            5 * 10_080 + 4 * 2016 + 2015
        );
    }

    #[test]
    fn test_hold_index_rejects_bad_state() {
        assert!(matches!(
            hold_index(6, ClockKind::Utc, bucket(0), 6),
            Err(AnalyticsError::OutOfRange { name: "state", .. })
        ));
    }

    #[test]
    fn test_trans_group_index_dense_enumeration() {
        assert_eq!(trans_group_index(0, 1, 6).unwrap(), 0);
        assert_eq!(trans_group_index(0, 5, 6).unwrap(), 4);
        assert_eq!(trans_group_index(1, 0, 6).unwrap(), 5);
        assert_eq!(trans_group_index(5, 4, 6).unwrap(), 29);

        // Every ordered pair gets a distinct group in 0..N(N-1).
        let mut seen = std::collections::BTreeSet::new();
        for from in 0..6u8 {
            for to in 0..6u8 {
                if from == to {
                    continue;
                }
                let group = trans_group_index(from, to, 6).unwrap();
                assert!(group < 30);
                assert!(seen.insert(group));
            }
        }
        assert_eq!(seen.len(), 30);
    }

    #[test]
    fn test_trans_group_index_rejects_self_and_out_of_range() {
        assert!(matches!(
            trans_group_index(3, 3, 6),
            Err(AnalyticsError::InvalidArgument(_))
        ));
        assert!(trans_group_index(6, 0, 6).is_err());
        assert!(trans_group_index(0, 6, 6).is_err());
    }

    #[test]
    fn test_trans_index_layout() {
        // First transition cell sits right after the N holding groups.
        assert_eq!(
            trans_index(0, 1, ClockKind::Utc, bucket(0), 6).unwrap(),
            6 * 10_080
        );
        // Last transition cell is the last cell of the array.
        assert_eq!(
            trans_index(5, 4, ClockKind::UnequalHours, bucket(2015), 6).unwrap(),
            array_size(6).unwrap() - 1
        );
    }

    #[test]
    fn test_hold_and_trans_sections_do_not_overlap() {
        let max_hold = hold_index(5, ClockKind::UnequalHours, bucket(2015), 6).unwrap();
        let min_trans = trans_index(0, 1, ClockKind::Utc, bucket(0), 6).unwrap();
        assert_eq!(max_hold + 1, min_trans);
    }

    #[test]
    fn test_create_and_validate() {
        let array = create_dense_array(6).unwrap();
        assert_eq!(array.len(), 6 * 6 * 10_080);
        assert!(array.iter().all(|&cell| cell == 0.0));
        assert!(validate_array_size(&array, 6));
        assert!(!validate_array_size(&array, 5));
        assert!(!validate_array_size(&array[1..], 6));
        assert!(ensure_array_size(&array, 6).is_ok());
        assert!(matches!(
            ensure_array_size(&array[1..], 6),
            Err(AnalyticsError::CorruptArray { .. })
        ));
    }
}
