//! Splitting a real-time holding interval into per-bucket allocations.
//!
//! The splitter walks a half-open interval `[t0, t1)` under one clock,
//! discovering bucket boundaries by querying the mapper: a coarse forward
//! scan brackets the first instant that leaves the current bucket, then a
//! millisecond bisection pins it down. Unequal-hours buckets can be far
//! shorter than five real minutes, so the scan shrinks its step whenever a
//! probe lands more than one bucket away. Undefined stretches are skipped
//! via a bounded forward search.
//!
//! Guarantee: over any sub-interval where the clock stays defined, the
//! allocations sum to exactly the elapsed milliseconds; boundaries are
//! half-open, so every instant belongs to exactly one bucket.

use std::collections::BTreeMap;

use crate::clocks::map_to_bucket;
use crate::models::{cyclic_distance, ClockConfig, ClockKind, WeekBucket};
use crate::solar::SolarEphemeris;

/// Milliseconds allocated to each bucket from one holding interval.
pub type BucketAllocation = BTreeMap<WeekBucket, i64>;

/// How far past an undefined instant the splitter looks for the clock to
/// become defined again before giving up.
const UNDEFINED_LOOKAHEAD_MS: i64 = 86_400_000;

/// Probe spacing of the undefined-region search. Undefined stretches are
/// polar-scale (hours to months), so five minutes resolves them cheaply.
const UNDEFINED_PROBE_STEP_MS: i64 = 300_000;

/// Initial probe spacing of the boundary scan.
const COARSE_STEP_MS: i64 = 60_000;

/// Smallest step the adaptive scan shrinks to before bisecting anyway.
const ADAPTIVE_MIN_STEP_MS: i64 = 250;

/// Hard cap on probes within one boundary scan.
const MAX_BOUNDARY_PROBES: usize = 4_096;

/// Hard cap on emitted segments per call.
const MAX_SEGMENTS: usize = 1 << 20;

/// Split `[t0_ms, t1_ms)` into per-bucket elapsed milliseconds under one
/// clock.
///
/// An empty or inverted interval returns an empty allocation. Sub-intervals
/// where the clock is undefined are skipped; if the clock never becomes
/// defined again within the bounded lookahead, whatever was already
/// collected is returned.
pub fn split_hold_interval(
    t0_ms: i64,
    t1_ms: i64,
    clock: ClockKind,
    config: &ClockConfig,
    ephemeris: &dyn SolarEphemeris,
) -> BucketAllocation {
    let mut allocations = BucketAllocation::new();
    if t0_ms >= t1_ms {
        return allocations;
    }

    let map = |t: i64| map_to_bucket(clock, t, config, ephemeris);
    let mut current = t0_ms;
    let mut segments = 0usize;

    while current < t1_ms {
        segments += 1;
        if segments > MAX_SEGMENTS {
            log::warn!(
                "split_hold_interval: segment cap {} reached on {} clock with {} ms unprocessed; returning partial allocation",
                MAX_SEGMENTS,
                clock,
                t1_ms - current
            );
            break;
        }

        let bucket = match map(current) {
            Some(bucket) => bucket,
            None => match seek_defined_start(&map, current, t1_ms) {
                Some(defined_at) => {
                    current = defined_at;
                    continue;
                }
                None => break,
            },
        };

        let boundary = match find_bucket_end(&map, bucket, current, t1_ms, clock) {
            Some(boundary) => boundary,
            None => break,
        };
        *allocations.entry(bucket).or_insert(0) += boundary - current;
        current = boundary;
    }
    allocations
}

/// First instant in `(from_ms, limit_ms)` where the mapping is defined,
/// searched in bounded steps up to 24 h ahead, then refined by bisection.
///
/// `None` when the clock stays undefined through the whole window; the
/// caller stops and keeps what it has.
fn seek_defined_start<F>(map: &F, from_ms: i64, limit_ms: i64) -> Option<i64>
where
    F: Fn(i64) -> Option<WeekBucket>,
{
    let horizon = limit_ms.min(from_ms.saturating_add(UNDEFINED_LOOKAHEAD_MS));
    let mut last_undefined = from_ms;
    loop {
        let probe = (last_undefined + UNDEFINED_PROBE_STEP_MS).min(horizon);
        if map(probe).is_some() {
            // Refine to the first defined millisecond in (last_undefined, probe].
            let mut lo = last_undefined;
            let mut hi = probe;
            while hi - lo > 1 {
                let mid = lo + (hi - lo) / 2;
                if map(mid).is_some() {
                    hi = mid;
                } else {
                    lo = mid;
                }
            }
            return Some(hi);
        }
        if probe >= horizon {
            if horizon < limit_ms {
                log::warn!(
                    "seek_defined_start: no defined instant within {} ms lookahead; stopping",
                    UNDEFINED_LOOKAHEAD_MS
                );
            }
            return None;
        }
        last_undefined = probe;
    }
}

/// End of `bucket`'s validity within `(start_ms, limit_ms]`: the first
/// instant whose mapping differs (or becomes undefined), found by a coarse
/// scan plus bisection; `limit_ms` when the bucket extends through it.
///
/// On the unequal-hours clock a probe can land several buckets ahead; the
/// scan then shrinks its step before bisecting so very short buckets are
/// never skipped over. `None` only when the probe cap is hit.
fn find_bucket_end<F>(
    map: &F,
    bucket: WeekBucket,
    start_ms: i64,
    limit_ms: i64,
    clock: ClockKind,
) -> Option<i64>
where
    F: Fn(i64) -> Option<WeekBucket>,
{
    let adaptive = clock == ClockKind::UnequalHours;
    let mut step = COARSE_STEP_MS;
    let mut last_same = start_ms;
    let mut probes = 0usize;

    loop {
        probes += 1;
        if probes > MAX_BOUNDARY_PROBES {
            log::warn!(
                "find_bucket_end: probe cap {} reached near bucket {} on {} clock; stopping",
                MAX_BOUNDARY_PROBES,
                bucket,
                clock
            );
            return None;
        }

        let probe = (last_same + step).min(limit_ms);
        match map(probe) {
            Some(mapped) if mapped == bucket => {
                if probe >= limit_ms {
                    return Some(limit_ms);
                }
                last_same = probe;
            }
            outcome => {
                let skipped_buckets = matches!(
                    outcome,
                    Some(mapped) if cyclic_distance(bucket, mapped).abs() > 1
                );
                if adaptive && skipped_buckets && step > ADAPTIVE_MIN_STEP_MS {
                    step = (step / 4).max(ADAPTIVE_MIN_STEP_MS);
                    continue;
                }
                return Some(bisect_departure(map, bucket, last_same, probe));
            }
        }
    }
}

/// First instant in `(lo_ms, hi_ms]` that no longer maps to `bucket`.
/// Precondition: `lo_ms` maps to `bucket` and `hi_ms` does not.
fn bisect_departure<F>(map: &F, bucket: WeekBucket, mut lo_ms: i64, mut hi_ms: i64) -> i64
where
    F: Fn(i64) -> Option<WeekBucket>,
{
    while hi_ms - lo_ms > 1 {
        let mid = lo_ms + (hi_ms - lo_ms) / 2;
        if map(mid) == Some(bucket) {
            lo_ms = mid;
        } else {
            hi_ms = mid;
        }
    }
    hi_ms
}
