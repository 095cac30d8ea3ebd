use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// An opaque RGB color. Serialized in the container's "r g b" notation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;

        let component = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16).map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        match hex.len() {
            3 => Ok(Color {
                r: component(&hex[0..1].repeat(2), "red")?,
                g: component(&hex[1..2].repeat(2), "green")?,
                b: component(&hex[2..3].repeat(2), "blue")?,
            }),
            6 => Ok(Color {
                r: component(&hex[0..2], "red")?,
                g: component(&hex[2..4], "green")?,
                b: component(&hex[4..6], "blue")?,
            }),
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }

    /// Parse the space separated "r g b" notation.
    pub fn parse_components(s: &str) -> Result<Color, String> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(format!("Expected 3 color components, got {}", parts.len()));
        }
        let parse = |p: &str| {
            p.parse::<u8>()
                .map_err(|e| format!("Invalid color component '{}': {}", p, e))
        };
        Ok(Color {
            r: parse(parts[0])?,
            g: parse(parts[1])?,
            b: parse(parts[2])?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) if s.trim_start().starts_with('#') => {
                Self::parse_hex(&s).map_err(de::Error::custom)
            }
            ColorDef::Str(s) => Self::parse_components(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}
