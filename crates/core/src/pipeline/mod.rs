use std::path::PathBuf;

use crate::beats::BeatTrack;
use crate::clips::RemappedClips;
use crate::config::ConverterConfig;
use crate::input::{self, MusicTrackDocument, SongDescDocument, TapeDocument};
use crate::output;
use crate::song::Song;
use crate::timebase::TimeMapper;
use crate::Result;

/// Outcome of a conversion run, surfaced by the CLI's success log.
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub map_name: String,
    pub artist: String,
    pub title: String,
    pub written: Vec<PathBuf>,
}

/// Runs the whole single-pass conversion: read the four input documents,
/// build the time base, remap the clips and write the output documents.
pub fn convert_song(config: &ConverterConfig) -> Result<ConversionSummary> {
    let dtape: TapeDocument = input::read_json(&config.dtape_path())?;
    let ktape: TapeDocument = input::read_json(&config.ktape_path())?;
    let musictrack: MusicTrackDocument = input::read_json(&config.musictrack_path())?;
    let songdesc: SongDescDocument = input::read_json(&config.songdesc_path())?;

    let info = songdesc.info()?;
    let structure = musictrack.structure()?;

    let mapper = TimeMapper::from_markers(&structure.markers)?;
    let beat_track = BeatTrack::new(&mapper, structure.start_beat, structure.end_beat)?;

    tracing::debug!(
        markers = structure.markers.len(),
        video_offset = beat_track.video_offset(),
        "time base ready"
    );

    let clips = RemappedClips::remap(
        dtape.clips.iter().chain(ktape.clips.iter()),
        &mapper,
        beat_track.video_offset(),
    );

    let (song, moves) = Song::assemble(info, structure, &beat_track, clips);
    let written = output::write_outputs(&config.output_folder, &song, &moves, config.jsonp)?;

    tracing::debug!(files = written.len(), map_name = %song.map_name, "outputs written");

    Ok(ConversionSummary {
        map_name: song.map_name.clone(),
        artist: song.artist.clone(),
        title: song.title.clone(),
        written,
    })
}
