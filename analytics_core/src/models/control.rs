//! Control kinds and slider discretization.
//!
//! A control is a small user-adjustable input: an on/off switch, a
//! multi-position selector, or a continuous slider discretized into six
//! states. The discrete state id is what the splitter and the dense array
//! key on; this module owns how many states a control has and how a raw
//! slider position collapses into one of them.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Number of discrete states of a slider control.
pub const SLIDER_STATES: u8 = 6;

/// Smallest and largest legal state counts for a selector control.
pub const MIN_SELECTOR_STATES: u8 = 2;
pub const MAX_SELECTOR_STATES: u8 = 10;

/// The kind of a measured control, fixing its discrete state count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlKind {
    /// Two-state on/off switch.
    Switch,
    /// Radiobutton-style selector with a fixed number of positions.
    Selector { num_states: u8 },
    /// Continuous slider, always discretized into six states.
    Slider,
}

impl ControlKind {
    /// Create a selector kind, validating the state count (`2..=10`).
    pub fn selector(num_states: u8) -> AnalyticsResult<Self> {
        if !(MIN_SELECTOR_STATES..=MAX_SELECTOR_STATES).contains(&num_states) {
            return Err(AnalyticsError::invalid_argument(format!(
                "selector state count must be between {} and {}, got {}",
                MIN_SELECTOR_STATES, MAX_SELECTOR_STATES, num_states
            )));
        }
        Ok(ControlKind::Selector { num_states })
    }

    /// Number of discrete states this control can occupy.
    pub fn num_states(&self) -> u8 {
        match self {
            ControlKind::Switch => 2,
            ControlKind::Selector { num_states } => *num_states,
            ControlKind::Slider => SLIDER_STATES,
        }
    }
}

/// How an exact quartile-boundary slider value resolves between its two
/// adjacent states.
///
/// Interior values are policy-independent; the policy only matters at the
/// exact boundaries 0.25, 0.5 and 0.75, each of which is equidistant from
/// the centers of its two neighboring state intervals
/// (centers: 0, 0.125, 0.375, 0.625, 0.875, 1).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoundaryPolicy {
    /// Boundary resolves to the lower adjacent state.
    RoundDown,
    /// Boundary resolves to the higher adjacent state.
    RoundUp,
    /// Nearest state center; the exact tie resolves to the lower state.
    RoundNearest,
    /// Nearest state center; the exact tie resolves to the higher state.
    RoundNearestTiesUp,
}

/// A slider position, validated into `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SliderValue(f64);

impl SliderValue {
    /// Create a slider value, failing outside `[0, 1]` (NaN included).
    pub fn new(value: f64) -> AnalyticsResult<Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(AnalyticsError::invalid_argument(format!(
                "slider value must be between 0 and 1, got {}",
                value
            )));
        }
        Ok(SliderValue(value))
    }

    /// Raw position in `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Collapse this position into one of the six slider states.
    ///
    /// Exactly 0 is state 0 and exactly 1 is state 5 regardless of policy.
    /// The open quartiles (0,.25), (.25,.5), (.5,.75), (.75,1) map to states
    /// 1..=4 regardless of policy. Only the exact boundaries .25/.5/.75
    /// consult the policy.
    pub fn discretize(&self, policy: BoundaryPolicy) -> u8 {
        let v = self.0;
        if v == 0.0 {
            return 0;
        }
        if v == 1.0 {
            return 5;
        }
        // 0.25, 0.5 and 0.75 are exact in binary, so equality is reliable.
        if v == 0.25 || v == 0.5 || v == 0.75 {
            let lower = (v / 0.25) as u8;
            return match policy {
                BoundaryPolicy::RoundDown | BoundaryPolicy::RoundNearest => lower,
                BoundaryPolicy::RoundUp | BoundaryPolicy::RoundNearestTiesUp => lower + 1,
            };
        }
        (v / 0.25) as u8 + 1
    }
}

impl TryFrom<f64> for SliderValue {
    type Error = AnalyticsError;

    fn try_from(value: f64) -> AnalyticsResult<Self> {
        SliderValue::new(value)
    }
}

impl From<SliderValue> for f64 {
    fn from(value: SliderValue) -> f64 {
        value.0
    }
}
