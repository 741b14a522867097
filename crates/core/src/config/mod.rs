use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Fixed file names of the four input documents inside the input folder.
pub const DTAPE_FILE: &str = "dtape-input.json";
pub const KTAPE_FILE: &str = "ktape-input.json";
pub const MUSICTRACK_FILE: &str = "musictrack-input.json";
pub const SONGDESC_FILE: &str = "songdesc-input.json";

/// Configuration for a single conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConverterConfig {
    /// Base path holding the four input documents.
    pub input_folder: String,
    /// Base path that receives the per-song output directory.
    pub output_folder: String,
    /// When set, each output body is wrapped in a `MapName(...)` call.
    pub jsonp: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_folder: "input".to_string(),
            output_folder: "output".to_string(),
            jsonp: false,
        }
    }
}

impl ConverterConfig {
    pub fn dtape_path(&self) -> PathBuf {
        Path::new(&self.input_folder).join(DTAPE_FILE)
    }

    pub fn ktape_path(&self) -> PathBuf {
        Path::new(&self.input_folder).join(KTAPE_FILE)
    }

    pub fn musictrack_path(&self) -> PathBuf {
        Path::new(&self.input_folder).join(MUSICTRACK_FILE)
    }

    pub fn songdesc_path(&self) -> PathBuf {
        Path::new(&self.input_folder).join(SONGDESC_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_inputs_under_the_input_folder() {
        let config = ConverterConfig {
            input_folder: "songs/in".to_string(),
            ..Default::default()
        };

        assert_eq!(config.dtape_path(), Path::new("songs/in/dtape-input.json"));
        assert_eq!(
            config.songdesc_path(),
            Path::new("songs/in/songdesc-input.json")
        );
    }

    #[test]
    fn config_round_trips_with_camel_case_keys() {
        let json = r#"{"inputFolder":"a","outputFolder":"b","jsonp":true}"#;
        let config: ConverterConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.input_folder, "a");
        assert_eq!(config.output_folder, "b");
        assert!(config.jsonp);
    }
}
