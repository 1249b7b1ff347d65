//! Sine LUT
//!
//! Ten-entry amplitude table indexed by scroll phase. Despite the name the
//! values trace a triangular wave, and they are kept literal so rendered
//! frames stay bit-exact with the recorded verification vectors.

use crate::common::Amplitude;

/// Number of phases in one period of the table
pub const SINE_PERIOD: usize = 10;

/// Bar amplitude per phase
pub const SINE_TABLE: [Amplitude; SINE_PERIOD] = [50, 40, 30, 20, 10, 0, 10, 20, 30, 40];

/// Look up the bar amplitude for a phase in `0..10`
///
/// Callers derive the phase with `% SINE_PERIOD`, so an out-of-range index
/// is a wiring bug: it trips an assertion in debug builds and is clamped to
/// the last entry otherwise.
#[inline]
pub fn lookup(phase: usize) -> Amplitude {
    debug_assert!(phase < SINE_PERIOD, "sine phase {} out of range", phase);
    SINE_TABLE[phase.min(SINE_PERIOD - 1)]
}
