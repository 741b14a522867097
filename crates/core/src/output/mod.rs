use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::clips::Move;
use crate::song::Song;
use crate::Result;

/// Writes the song record and the per-performer move documents under
/// `<output_folder>/<MapName>/`, creating the directory when absent.
///
/// Every performer index in `0..NumCoach` gets a file, even when no motion
/// clip referenced it; move buckets outside that range are not written.
/// Returns the paths written, in order.
pub fn write_outputs(
    output_folder: &str,
    song: &Song,
    moves: &BTreeMap<i64, Vec<Move>>,
    jsonp: bool,
) -> Result<Vec<PathBuf>> {
    let song_dir = Path::new(output_folder).join(&song.map_name);
    fs::create_dir_all(&song_dir)?;

    let mut written = Vec::new();

    let main_path = song_dir.join(format!("{}.json", song.map_name));
    write_document(&main_path, song, jsonp.then(|| song.map_name.clone()))?;
    written.push(main_path);

    for coach in 0..song.num_coach {
        let body: &[Move] = moves.get(&coach).map(Vec::as_slice).unwrap_or(&[]);
        let path = song_dir.join(format!("{}_moves{coach}.json", song.map_name));
        write_document(&path, &body, jsonp.then(|| format!("{}{coach}", song.map_name)))?;
        written.push(path);
    }

    Ok(written)
}

/// Pretty JSON, optionally wrapped in a `name(...)` call for jsonp consumers.
fn write_document<T: Serialize>(path: &Path, value: &T, wrapper: Option<String>) -> Result<()> {
    let body = serde_json::to_string_pretty(value)?;
    let text = match wrapper {
        Some(name) => format!("{name}({body})"),
        None => body,
    };
    fs::write(path, text)?;
    Ok(())
}
