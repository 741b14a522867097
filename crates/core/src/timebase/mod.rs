use crate::{Result, TapeConvError};

/// Spacing between marker samples in the normalised tick domain.
pub const TICKS_PER_MARKER: i64 = 24;

/// Raw marker units per normalised tick.
pub const MARKER_SCALE: f64 = 48.0;

/// Immutable mapping from tick values to beat indices, built once per song
/// from the music track's marker table.
///
/// The table stores one beat index per `TICKS_PER_MARKER` ticks; arbitrary
/// tick values are resolved by linear interpolation between the two nearest
/// samples.
#[derive(Debug, Clone)]
pub struct TimeMapper {
    beats: Vec<i64>,
}

impl TimeMapper {
    /// Builds the mapper from raw marker values, normalising each one by
    /// [`MARKER_SCALE`].
    pub fn from_markers(markers: &[i64]) -> Result<Self> {
        if markers.len() < 2 {
            return Err(TapeConvError::InvalidInput(
                "time mapping requires at least two markers",
            ));
        }

        let beats = markers
            .iter()
            .map(|marker| (*marker as f64 / MARKER_SCALE).round() as i64)
            .collect();

        Ok(Self { beats })
    }

    /// The normalised beat table backing the interpolation. Sample `i`
    /// corresponds to tick `i * TICKS_PER_MARKER`.
    pub fn beats(&self) -> &[i64] {
        &self.beats
    }

    /// Linearly interpolated beat index at tick `t`, rounded to nearest.
    ///
    /// Ticks outside the sampled domain extrapolate along the nearest edge
    /// segment, so lookups at the song boundary never fail.
    pub fn beat_at(&self, t: f64) -> i64 {
        let step = TICKS_PER_MARKER as f64;
        let last_segment = self.beats.len() as isize - 2;
        let segment = ((t / step).floor() as isize).clamp(0, last_segment) as usize;

        let x0 = segment as f64 * step;
        let y0 = self.beats[segment] as f64;
        let y1 = self.beats[segment + 1] as f64;

        (y0 + (y1 - y0) * (t - x0) / step).round() as i64
    }
}
