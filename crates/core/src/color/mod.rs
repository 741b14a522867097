use serde::{Deserialize, Serialize};

/// RGB triplet as it appears in the song description's `DefaultColors` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Six upper-case hex digits, two per channel.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Palette entry format used by the main song record, with an opaque
    /// alpha byte prefixed.
    pub fn palette_entry(&self) -> String {
        format!("0xFF{}", self.hex())
    }

    /// Format of the standalone lyrics color field.
    pub fn lyrics_entry(&self) -> String {
        format!("#{}", self.hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_six_hex_digits() {
        assert_eq!(Color::new(255, 0, 128).hex(), "FF0080");
        assert_eq!(Color::new(0, 0, 0).hex(), "000000");
        assert_eq!(Color::new(1, 2, 3).hex(), "010203");
    }

    #[test]
    fn wraps_palette_and_lyrics_entries() {
        let color = Color::new(255, 0, 128);
        assert_eq!(color.palette_entry(), "0xFFFF0080");
        assert_eq!(color.lyrics_entry(), "#FF0080");
    }

    #[test]
    fn deserializes_from_a_triplet_object() {
        let color: Color = serde_json::from_str(r#"{"r":12,"g":34,"b":56}"#).unwrap();
        assert_eq!(color, Color::new(12, 34, 56));
    }
}
