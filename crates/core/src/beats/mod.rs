use crate::timebase::TimeMapper;
use crate::{Result, TapeConvError};

/// Beat sequence re-anchored to the playback start, plus the signed video
/// offset that was applied to get there.
#[derive(Debug, Clone)]
pub struct BeatTrack {
    beats: Vec<i64>,
    video_offset: i64,
}

impl BeatTrack {
    /// Derives the final beat sequence from the mapper's table and the music
    /// track's `startBeat`/`endBeat` bounds.
    ///
    /// The video offset is looked up against the pre-extension table; range
    /// normalisation happens afterwards and does not feed back into it.
    pub fn new(mapper: &TimeMapper, start_beat: i64, end_beat: i64) -> Result<Self> {
        let original = mapper.beats();
        let video_offset = video_offset(original, start_beat)?;
        let normalized = normalize_range(original, end_beat);
        let beats = anchor(original, &normalized, start_beat, video_offset);

        Ok(Self {
            beats,
            video_offset,
        })
    }

    /// The finalised, offset-adjusted beat sequence.
    pub fn beats(&self) -> &[i64] {
        &self.beats
    }

    pub fn video_offset(&self) -> i64 {
        self.video_offset
    }
}

/// Signed correction re-anchoring all derived times: `beats[-start_beat]`
/// when `start_beat` is negative, `-beats[start_beat]` otherwise.
pub fn video_offset(beats: &[i64], start_beat: i64) -> Result<i64> {
    let index = start_beat.unsigned_abs() as usize;
    let beat = beats
        .get(index)
        .copied()
        .ok_or(TapeConvError::InvalidInput(
            "start beat lies outside the marker table",
        ))?;

    Ok(if start_beat < 0 { beat } else { -beat })
}

/// Extends the table with the last observed stride, or truncates it, until
/// its last index equals `end_beat`. The extension models constant tempo past
/// the last marker.
pub fn normalize_range(beats: &[i64], end_beat: i64) -> Vec<i64> {
    let mut beats = beats.to_vec();
    let last_index = beats.len() as i64 - 1;

    if last_index < end_beat {
        let stride = beats[beats.len() - 1] - beats[beats.len() - 2];
        for _ in 0..(end_beat - last_index) {
            beats.push(beats[beats.len() - 1] + stride);
        }
    } else if last_index > end_beat {
        beats.truncate(end_beat.max(0) as usize + 1);
    }

    beats
}

/// Combines the pre-normalisation prefix with the offset-adjusted normalised
/// suffix, per the sign of `start_beat`. Out-of-range bounds degrade to a
/// shorter prefix or an empty suffix instead of panicking.
fn anchor(original: &[i64], normalized: &[i64], start_beat: i64, video_offset: i64) -> Vec<i64> {
    if start_beat < 0 {
        original
            .iter()
            .take(start_beat.unsigned_abs() as usize)
            .copied()
            .chain(normalized.iter().map(|beat| beat + video_offset))
            .collect()
    } else {
        normalized
            .iter()
            .skip(start_beat as usize)
            .map(|beat| beat - video_offset)
            .collect()
    }
}
