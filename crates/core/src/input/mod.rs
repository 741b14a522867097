use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clips::Clip;
use crate::color::Color;
use crate::{Result, TapeConvError};

/// A dance or karaoke tape document: a flat list of clips.
#[derive(Debug, Deserialize)]
pub struct TapeDocument {
    #[serde(rename = "Clips")]
    pub clips: Vec<Clip>,
}

/// The music track document, holding the tempo-grid structure block.
#[derive(Debug, Deserialize)]
pub struct MusicTrackDocument {
    #[serde(rename = "COMPONENTS")]
    components: Vec<MusicTrackComponent>,
}

#[derive(Debug, Deserialize)]
struct MusicTrackComponent {
    #[serde(rename = "trackData")]
    track_data: TrackData,
}

#[derive(Debug, Deserialize)]
struct TrackData {
    structure: TrackStructure,
}

/// Marker block describing the song's tempo grid and preview anchors.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackStructure {
    #[serde(rename = "startBeat")]
    pub start_beat: i64,
    pub markers: Vec<i64>,
    #[serde(rename = "endBeat")]
    pub end_beat: i64,
    #[serde(rename = "previewEntry")]
    pub preview_entry: i64,
    #[serde(rename = "previewLoopStart")]
    pub preview_loop_start: i64,
}

impl MusicTrackDocument {
    /// Structure block of the first component; the converter handles one
    /// track per run.
    pub fn structure(&self) -> Result<&TrackStructure> {
        self.components
            .first()
            .map(|component| &component.track_data.structure)
            .ok_or(TapeConvError::InvalidInput(
                "music track document has no components",
            ))
    }
}

/// The song description document.
#[derive(Debug, Deserialize)]
pub struct SongDescDocument {
    #[serde(rename = "COMPONENTS")]
    components: Vec<SongInfo>,
}

impl SongDescDocument {
    /// Metadata component of the first entry.
    pub fn info(&self) -> Result<&SongInfo> {
        self.components
            .first()
            .ok_or(TapeConvError::InvalidInput(
                "song description document has no components",
            ))
    }
}

/// Song metadata carried over verbatim into the output record.
#[derive(Debug, Clone, Deserialize)]
pub struct SongInfo {
    #[serde(rename = "MapName")]
    pub map_name: String,
    #[serde(rename = "JDVersion")]
    pub jd_version: i64,
    #[serde(rename = "OriginalJDVersion")]
    pub original_jd_version: i64,
    #[serde(rename = "Artist")]
    pub artist: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Credits")]
    pub credits: String,
    #[serde(rename = "NumCoach")]
    pub num_coach: i64,
    #[serde(rename = "CountInProgression")]
    pub count_in_progression: i64,
    #[serde(rename = "DancerName")]
    pub dancer_name: String,
    #[serde(rename = "LocaleID")]
    pub locale_id: i64,
    #[serde(rename = "MojoValue")]
    pub mojo_value: i64,
    #[serde(rename = "Mode")]
    pub mode: i64,
    #[serde(rename = "Status")]
    pub status: i64,
    #[serde(rename = "LyricsType")]
    pub lyrics_type: i64,
    // The description document spells this one with a lower-case `b`.
    #[serde(rename = "backgroundType")]
    pub background_type: i64,
    #[serde(rename = "Difficulty")]
    pub difficulty: i64,
    #[serde(rename = "DefaultColors")]
    pub default_colors: DefaultColorsInput,
}

/// Palette block as spelled in the description document (lower-case keys).
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultColorsInput {
    pub lyrics: Color,
    pub theme: Color,
    pub songcolor_1a: Color,
    pub songcolor_1b: Color,
    pub songcolor_2a: Color,
    pub songcolor_2b: Color,
}

/// Reads and parses one input document, stripping stray NUL bytes before
/// handing the text to the JSON parser.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| TapeConvError::InputRead {
        path: path.display().to_string(),
        source,
    })?;

    let sanitized = raw.replace('\u{0}', "");

    serde_json::from_str(&sanitized).map_err(|source| TapeConvError::InputParse {
        path: path.display().to_string(),
        source,
    })
}
