//! Committed-change ingestion.
//!
//! The mutation layer (out of scope here) hands the core one committed
//! change at a time: the state that was held, when it was committed, the
//! state it changed to, when, and who initiated it. The core allocates the
//! holding time onto buckets once per clock, and for human-initiated
//! changes increments one transition cell per clock where the commit
//! instant is defined.
//!
//! Everything is validated before the first cell is touched, so a returned
//! error means the array was not modified at all.

use serde::{Deserialize, Serialize};

use crate::algorithms::split_hold_interval;
use crate::analytics::{ensure_array_size, hold_index, trans_index};
use crate::clocks::map_to_bucket;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{ClockConfig, ClockKind, HoldInterval};
use crate::solar::SolarEphemeris;

/// Who committed a state change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangeInitiator {
    /// A person adjusted the control; counts toward transition statistics.
    Human,
    /// An automation model adjusted the control; holding time only.
    Automation,
}

/// One committed state change of one control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommittedChange {
    /// State held over `[previous_commit_ms, new_commit_ms)`.
    pub previous_state: u8,
    /// State the control changed to at `new_commit_ms`.
    pub new_state: u8,
    /// When `previous_state` was committed (epoch ms).
    pub previous_commit_ms: i64,
    /// When `new_state` was committed (epoch ms).
    pub new_commit_ms: i64,
    pub initiator: ChangeInitiator,
    /// Automation model the change is attributed to, if any.
    pub model_id: Option<String>,
}

impl CommittedChange {
    /// The holding interval this change closes.
    pub fn hold_interval(&self) -> HoldInterval {
        HoldInterval::new(self.previous_commit_ms, self.new_commit_ms)
    }
}

/// Apply one committed change to a control's dense array.
///
/// Holding time for `previous_state` is split over
/// `[previous_commit_ms, new_commit_ms)` once per clock (an empty interval
/// allocates nothing and is not an error). For a human-initiated change to
/// a different state, exactly one transition cell per clock is incremented,
/// in the bucket containing the new commit instant; skipped for any clock
/// undefined at that instant. A re-commit of the same state allocates
/// holding time but never touches a transition cell.
pub fn apply_committed_change(
    array: &mut [f64],
    num_states: u8,
    change: &CommittedChange,
    config: &ClockConfig,
    ephemeris: &dyn SolarEphemeris,
) -> AnalyticsResult<()> {
    ensure_array_size(array, num_states)?;
    for (name, state) in [
        ("previous_state", change.previous_state),
        ("new_state", change.new_state),
    ] {
        if state >= num_states {
            return Err(AnalyticsError::out_of_range(
                name,
                state as i64,
                0,
                num_states as i64 - 1,
            ));
        }
    }

    let counts_as_transition =
        change.initiator == ChangeInitiator::Human && change.previous_state != change.new_state;

    for clock in ClockKind::ALL {
        let allocation = split_hold_interval(
            change.previous_commit_ms,
            change.new_commit_ms,
            clock,
            config,
            ephemeris,
        );
        for (bucket, elapsed_ms) in allocation {
            let cell = hold_index(change.previous_state, clock, bucket, num_states)?;
            array[cell] += elapsed_ms as f64;
        }

        if counts_as_transition {
            if let Some(bucket) = map_to_bucket(clock, change.new_commit_ms, config, ephemeris) {
                let cell = trans_index(
                    change.previous_state,
                    change.new_state,
                    clock,
                    bucket,
                    num_states,
                )?;
                array[cell] += 1.0;
            }
        }
    }

    log::debug!(
        "applied committed change {} -> {} over {} ms (initiator {:?}, model {:?})",
        change.previous_state,
        change.new_state,
        change.hold_interval().duration_ms(),
        change.initiator,
        change.model_id
    );
    Ok(())
}
