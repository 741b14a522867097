//! Core library for the dance tape converter.
//!
//! The crate turns a song's four tape documents (dance tape, karaoke tape,
//! music track and song description) into the flattened JSON documents the
//! player runtime consumes. Each module owns one stage of the pipeline:
//! input parsing, time-base construction, beat range normalisation, clip
//! remapping, song assembly and output writing.

pub mod beats;
pub mod clips;
pub mod color;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod song;
pub mod timebase;

pub use beats::BeatTrack;
pub use clips::{Clip, GoldMove, LyricLine, Move, Picto, RemappedClips};
pub use color::Color;
pub use config::ConverterConfig;
pub use error::{Result, TapeConvError};
pub use input::{MusicTrackDocument, SongDescDocument, SongInfo, TapeDocument, TrackStructure};
pub use pipeline::{convert_song, ConversionSummary};
pub use song::{AudioPreview, Song};
pub use timebase::TimeMapper;
