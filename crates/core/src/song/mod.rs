use std::collections::BTreeMap;

use serde::Serialize;

use crate::beats::BeatTrack;
use crate::clips::{GoldMove, LyricLine, Move, Picto, RemappedClips};
use crate::input::{SongInfo, TrackStructure};

/// Output palette with the opaque-alpha `0xFF` prefix applied to every entry.
#[derive(Debug, Clone, Serialize)]
pub struct DefaultColors {
    pub lyrics: String,
    pub theme: String,
    #[serde(rename = "songColor_1A")]
    pub song_color_1a: String,
    #[serde(rename = "songColor_1B")]
    pub song_color_1b: String,
    #[serde(rename = "songColor_2A")]
    pub song_color_2a: String,
    #[serde(rename = "songColor_2B")]
    pub song_color_2b: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PreviewAnchor {
    #[serde(rename = "startBeat")]
    pub start_beat: i64,
}

/// Preview anchors shifted onto the re-anchored beat grid.
#[derive(Debug, Clone, Serialize)]
pub struct AudioPreview {
    pub coverflow: PreviewAnchor,
    pub prelobby: PreviewAnchor,
}

impl AudioPreview {
    /// Both anchors shift by the signed `startBeat`, mirroring the sign rule
    /// of the video offset.
    pub fn from_structure(structure: &TrackStructure) -> Self {
        Self {
            coverflow: PreviewAnchor {
                start_beat: structure.preview_entry - structure.start_beat,
            },
            prelobby: PreviewAnchor {
                start_beat: structure.preview_loop_start - structure.start_beat,
            },
        }
    }
}

/// Flattened song record consumed by the player runtime.
///
/// Field order matches the document layout the runtime expects: metadata,
/// palette, offset and beat grid, preview anchors, then the flat clip
/// sequences.
#[derive(Debug, Serialize)]
pub struct Song {
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
    #[serde(rename = "BackgroundType")]
    pub background_type: i64,
    #[serde(rename = "Difficulty")]
    pub difficulty: i64,
    #[serde(rename = "DefaultColors")]
    pub default_colors: DefaultColors,
    #[serde(rename = "lyricsColor")]
    pub lyrics_color: String,
    #[serde(rename = "videoOffset")]
    pub video_offset: i64,
    pub beats: Vec<i64>,
    #[serde(rename = "AudioPreview")]
    pub audio_preview: AudioPreview,
    pub pictos: Vec<Picto>,
    #[serde(rename = "goldMoves")]
    pub gold_moves: Vec<GoldMove>,
    pub lyrics: Vec<LyricLine>,
}

impl Song {
    /// Merges metadata, colors, the anchored beat grid and the remapped clip
    /// sequences into the final record.
    ///
    /// The per-performer move sequences are handed back separately since they
    /// are written to their own documents.
    pub fn assemble(
        info: &SongInfo,
        structure: &TrackStructure,
        beat_track: &BeatTrack,
        clips: RemappedClips,
    ) -> (Song, BTreeMap<i64, Vec<Move>>) {
        let colors = &info.default_colors;
        let RemappedClips {
            pictos,
            gold_moves,
            lyrics,
            moves,
        } = clips;

        let song = Song {
            map_name: info.map_name.clone(),
            jd_version: info.jd_version,
            original_jd_version: info.original_jd_version,
            artist: info.artist.clone(),
            title: info.title.clone(),
            credits: info.credits.clone(),
            num_coach: info.num_coach,
            count_in_progression: info.count_in_progression,
            dancer_name: info.dancer_name.clone(),
            locale_id: info.locale_id,
            mojo_value: info.mojo_value,
            mode: info.mode,
            status: info.status,
            lyrics_type: info.lyrics_type,
            background_type: info.background_type,
            difficulty: info.difficulty,
            default_colors: DefaultColors {
                lyrics: colors.lyrics.palette_entry(),
                theme: colors.theme.palette_entry(),
                song_color_1a: colors.songcolor_1a.palette_entry(),
                song_color_1b: colors.songcolor_1b.palette_entry(),
                song_color_2a: colors.songcolor_2a.palette_entry(),
                song_color_2b: colors.songcolor_2b.palette_entry(),
            },
            lyrics_color: colors.lyrics.lyrics_entry(),
            video_offset: beat_track.video_offset(),
            beats: beat_track.beats().to_vec(),
            audio_preview: AudioPreview::from_structure(structure),
            pictos,
            gold_moves,
            lyrics,
        };

        (song, moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::input::DefaultColorsInput;
    use crate::timebase::TimeMapper;

    fn song_info() -> SongInfo {
        SongInfo {
            map_name: "TestSong".to_string(),
            jd_version: 2017,
            original_jd_version: 2017,
            artist: "Artist".to_string(),
            title: "Title".to_string(),
            credits: "Credits".to_string(),
            num_coach: 2,
            count_in_progression: 1,
            dancer_name: "Dancer".to_string(),
            locale_id: 4514,
            mojo_value: 0,
            mode: 6,
            status: 3,
            lyrics_type: 0,
            background_type: 0,
            difficulty: 2,
            default_colors: DefaultColorsInput {
                lyrics: Color::new(255, 0, 128),
                theme: Color::new(1, 2, 3),
                songcolor_1a: Color::new(10, 20, 30),
                songcolor_1b: Color::new(40, 50, 60),
                songcolor_2a: Color::new(70, 80, 90),
                songcolor_2b: Color::new(100, 110, 120),
            },
        }
    }

    fn structure() -> TrackStructure {
        TrackStructure {
            start_beat: 0,
            markers: vec![0, 1152, 2304, 3456],
            end_beat: 3,
            preview_entry: 10,
            preview_loop_start: 12,
        }
    }

    #[test]
    fn assembles_colors_with_both_wrappers() {
        let structure = structure();
        let mapper = TimeMapper::from_markers(&structure.markers).unwrap();
        let beat_track = BeatTrack::new(&mapper, 0, 3).unwrap();
        let (song, _) = Song::assemble(
            &song_info(),
            &structure,
            &beat_track,
            RemappedClips::default(),
        );

        assert_eq!(song.default_colors.lyrics, "0xFFFF0080");
        assert_eq!(song.default_colors.song_color_2b, "0xFF646E78");
        assert_eq!(song.lyrics_color, "#FF0080");
    }

    #[test]
    fn shifts_preview_anchors_by_the_start_beat() {
        let mut structure = structure();
        structure.start_beat = -2;
        let preview = AudioPreview::from_structure(&structure);
        assert_eq!(preview.coverflow.start_beat, 12);
        assert_eq!(preview.prelobby.start_beat, 14);

        structure.start_beat = 3;
        let preview = AudioPreview::from_structure(&structure);
        assert_eq!(preview.coverflow.start_beat, 7);
        assert_eq!(preview.prelobby.start_beat, 9);
    }

    #[test]
    fn serializes_the_runtime_field_names() {
        let structure = structure();
        let mapper = TimeMapper::from_markers(&structure.markers).unwrap();
        let beat_track = BeatTrack::new(&mapper, 0, 3).unwrap();
        let (song, _) = Song::assemble(
            &song_info(),
            &structure,
            &beat_track,
            RemappedClips::default(),
        );

        let value = serde_json::to_value(&song).unwrap();
        assert_eq!(value["MapName"], "TestSong");
        assert_eq!(value["videoOffset"], 0);
        assert_eq!(value["beats"][1], 24);
        assert_eq!(value["AudioPreview"]["coverflow"]["startBeat"], 10);
        assert_eq!(value["DefaultColors"]["songColor_1A"], "0xFF0A141E");
        assert!(value["goldMoves"].is_array());
    }
}
