use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::timebase::TimeMapper;

/// One timed record from a tape document, discriminated by its `__class` tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "__class")]
pub enum Clip {
    #[serde(rename = "PictogramClip")]
    Pictogram {
        #[serde(rename = "StartTime")]
        start_time: i64,
        #[serde(rename = "Duration")]
        duration: i64,
        #[serde(rename = "PictoPath")]
        picto_path: String,
    },
    #[serde(rename = "GoldEffectClip")]
    GoldEffect {
        #[serde(rename = "StartTime")]
        start_time: i64,
        #[serde(rename = "Duration")]
        duration: i64,
        #[serde(rename = "EffectType")]
        effect_type: i64,
    },
    #[serde(rename = "MotionClip")]
    Motion {
        #[serde(rename = "StartTime")]
        start_time: i64,
        #[serde(rename = "Duration")]
        duration: i64,
        #[serde(rename = "ClassifierPath")]
        classifier_path: String,
        #[serde(rename = "GoldMove")]
        gold_move: i64,
        #[serde(rename = "CoachId")]
        coach_id: i64,
    },
    #[serde(rename = "KaraokeClip")]
    Karaoke {
        #[serde(rename = "StartTime")]
        start_time: i64,
        #[serde(rename = "Duration")]
        duration: i64,
        #[serde(rename = "Lyrics")]
        lyrics: String,
        #[serde(rename = "IsEndOfLine")]
        is_end_of_line: i64,
    },
    /// Forward-compatible clip kinds deserialize here and are skipped.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Picto {
    pub time: i64,
    pub duration: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoldMove {
    pub time: i64,
    pub duration: i64,
    #[serde(rename = "effectType")]
    pub effect_type: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Move {
    pub time: i64,
    pub duration: i64,
    pub name: String,
    #[serde(rename = "goldMove")]
    pub gold_move: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LyricLine {
    pub time: i64,
    pub duration: i64,
    pub text: String,
    #[serde(rename = "isLineEnding")]
    pub is_line_ending: i64,
}

/// Flat, time-ordered output sequences produced from the tape documents.
///
/// Motion clips land in a map keyed by performer index so that ids outside
/// the expected `0..NumCoach` range still get a bucket of their own.
#[derive(Debug, Default)]
pub struct RemappedClips {
    pub pictos: Vec<Picto>,
    pub gold_moves: Vec<GoldMove>,
    pub lyrics: Vec<LyricLine>,
    pub moves: BTreeMap<i64, Vec<Move>>,
}

impl RemappedClips {
    /// Remaps every clip onto the song's time base and sorts each output
    /// sequence by ascending time.
    ///
    /// The sort is stable, so clips that land on the same time keep their
    /// input order.
    pub fn remap<'a, I>(clips: I, mapper: &TimeMapper, video_offset: i64) -> Self
    where
        I: IntoIterator<Item = &'a Clip>,
    {
        let mut remapped = Self::default();
        for clip in clips {
            remapped.push(clip, mapper, video_offset);
        }
        remapped.sort_by_time();
        remapped
    }

    fn push(&mut self, clip: &Clip, mapper: &TimeMapper, video_offset: i64) {
        match clip {
            Clip::Pictogram {
                start_time,
                duration,
                picto_path,
            } => {
                let (time, duration) = derive_timing(*start_time, *duration, mapper, video_offset);
                self.pictos.push(Picto {
                    time,
                    duration,
                    name: base_name(picto_path).to_string(),
                });
            }
            Clip::GoldEffect {
                start_time,
                duration,
                effect_type,
            } => {
                let (time, duration) = derive_timing(*start_time, *duration, mapper, video_offset);
                self.gold_moves.push(GoldMove {
                    time,
                    duration,
                    effect_type: *effect_type,
                });
            }
            Clip::Motion {
                start_time,
                duration,
                classifier_path,
                gold_move,
                coach_id,
            } => {
                let (time, duration) = derive_timing(*start_time, *duration, mapper, video_offset);
                self.moves.entry(*coach_id).or_default().push(Move {
                    time,
                    duration,
                    name: base_name(classifier_path).to_string(),
                    gold_move: *gold_move,
                });
            }
            Clip::Karaoke {
                start_time,
                duration,
                lyrics,
                is_end_of_line,
            } => {
                let (time, duration) = derive_timing(*start_time, *duration, mapper, video_offset);
                self.lyrics.push(LyricLine {
                    time,
                    duration,
                    text: lyrics.clone(),
                    is_line_ending: *is_end_of_line,
                });
            }
            Clip::Unknown => {}
        }
    }

    fn sort_by_time(&mut self) {
        self.pictos.sort_by_key(|picto| picto.time);
        self.gold_moves.sort_by_key(|gold| gold.time);
        self.lyrics.sort_by_key(|line| line.time);
        for moves in self.moves.values_mut() {
            moves.sort_by_key(|entry| entry.time);
        }
    }
}

/// Time/duration derivation shared by every clip kind.
fn derive_timing(start: i64, duration: i64, mapper: &TimeMapper, video_offset: i64) -> (i64, i64) {
    let begin = mapper.beat_at(start as f64);
    let end = mapper.beat_at((start + duration) as f64);
    (begin + video_offset, end - begin)
}

/// Final path segment, truncated before its first `.`.
pub fn base_name(path: &str) -> &str {
    let segment = path.rsplit('/').next().unwrap_or(path);
    segment.split('.').next().unwrap_or(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Markers divide down to [0, 24, 48, 72], making the mapper an identity
    // over ticks.
    fn identity_mapper() -> TimeMapper {
        TimeMapper::from_markers(&[0, 1152, 2304, 3456]).unwrap()
    }

    fn picto(start_time: i64, path: &str) -> Clip {
        Clip::Pictogram {
            start_time,
            duration: 24,
            picto_path: path.to_string(),
        }
    }

    #[test]
    fn extracts_names_from_path_like_strings() {
        assert_eq!(base_name("a/b/c/MoveName.ext"), "MoveName");
        assert_eq!(base_name("MoveName.msm"), "MoveName");
        assert_eq!(base_name("a/b/NoExtension"), "NoExtension");
        assert_eq!(base_name("Gold.Move.tpl"), "Gold");
    }

    #[test]
    fn applies_the_shared_time_and_duration_rule() {
        let mapper = identity_mapper();
        let clips = [picto(24, "world/pictos/Clap.png")];
        let remapped = RemappedClips::remap(&clips, &mapper, -4);

        assert_eq!(
            remapped.pictos,
            vec![Picto {
                time: 20,
                duration: 24,
                name: "Clap".to_string(),
            }]
        );
    }

    #[test]
    fn skips_unknown_clip_kinds() {
        let clip: Clip = serde_json::from_str(
            r#"{"__class":"VibrationClip","StartTime":0,"Duration":8}"#,
        )
        .unwrap();
        assert!(matches!(clip, Clip::Unknown));

        let mapper = identity_mapper();
        let remapped = RemappedClips::remap([&clip], &mapper, 0);
        assert!(remapped.pictos.is_empty());
        assert!(remapped.gold_moves.is_empty());
        assert!(remapped.lyrics.is_empty());
        assert!(remapped.moves.is_empty());
    }

    #[test]
    fn buckets_motion_clips_by_performer_id() {
        let mapper = identity_mapper();
        let clips = [
            Clip::Motion {
                start_time: 0,
                duration: 24,
                classifier_path: "moves/Left.msm".to_string(),
                gold_move: 0,
                coach_id: 1,
            },
            // An id outside 0..NumCoach still gets its own bucket.
            Clip::Motion {
                start_time: 24,
                duration: 24,
                classifier_path: "moves/Right.msm".to_string(),
                gold_move: 1,
                coach_id: 7,
            },
        ];

        let remapped = RemappedClips::remap(&clips, &mapper, 0);
        assert_eq!(remapped.moves[&1][0].name, "Left");
        assert_eq!(remapped.moves[&7][0].name, "Right");
        assert_eq!(remapped.moves[&7][0].gold_move, 1);
    }

    #[test]
    fn sorts_by_time_preserving_input_order_for_ties() {
        let mapper = identity_mapper();
        let clips = [
            picto(48, "b/Second.png"),
            picto(24, "a/TieOne.png"),
            picto(24, "a/TieTwo.png"),
        ];

        let remapped = RemappedClips::remap(&clips, &mapper, 0);
        let names: Vec<&str> = remapped
            .pictos
            .iter()
            .map(|picto| picto.name.as_str())
            .collect();
        assert_eq!(names, vec!["TieOne", "TieTwo", "Second"]);
    }

    #[test]
    fn remaps_karaoke_lines() {
        let mapper = identity_mapper();
        let clips = [Clip::Karaoke {
            start_time: 24,
            duration: 48,
            lyrics: "never gonna ".to_string(),
            is_end_of_line: 1,
        }];

        let remapped = RemappedClips::remap(&clips, &mapper, 0);
        assert_eq!(
            remapped.lyrics,
            vec![LyricLine {
                time: 24,
                duration: 48,
                text: "never gonna ".to_string(),
                is_line_ending: 1,
            }]
        );
    }
}
