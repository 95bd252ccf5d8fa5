//! Record separator choices.

use std::fmt;
use std::str::FromStr;

/// How records are laid out in the export file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    /// `address,key`
    #[default]
    Comma,
    /// `address;key`
    Semicolon,
    /// `address|key`
    Pipe,
    /// `address<TAB>key`
    Tab,
    /// `address key`
    Space,
    /// JSON array of `{ "wallet", "key" }` objects
    Json,
}

impl Separator {
    /// Every choice, in the order the front end lists them.
    pub const ALL: [Separator; 6] = [
        Separator::Comma,
        Separator::Semicolon,
        Separator::Pipe,
        Separator::Tab,
        Separator::Space,
        Separator::Json,
    ];

    /// Returns the field delimiter, or `None` for JSON.
    pub fn delimiter(self) -> Option<char> {
        match self {
            Separator::Comma => Some(','),
            Separator::Semicolon => Some(';'),
            Separator::Pipe => Some('|'),
            Separator::Tab => Some('\t'),
            Separator::Space => Some(' '),
            Separator::Json => None,
        }
    }

    #[inline]
    pub fn is_json(self) -> bool {
        matches!(self, Separator::Json)
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Separator::Comma => "Comma (,)",
            Separator::Semicolon => "Semicolon (;)",
            Separator::Pipe => "Pipe (|)",
            Separator::Tab => "Tab",
            Separator::Space => "Space",
            Separator::Json => "JSON",
        }
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Literal single characters first; whitespace must not be trimmed away.
        match s {
            "," => return Ok(Separator::Comma),
            ";" => return Ok(Separator::Semicolon),
            "|" => return Ok(Separator::Pipe),
            "\t" | "\\t" => return Ok(Separator::Tab),
            " " => return Ok(Separator::Space),
            _ => {}
        }

        match s.trim().to_lowercase().as_str() {
            "comma" => Ok(Separator::Comma),
            "semicolon" => Ok(Separator::Semicolon),
            "pipe" => Ok(Separator::Pipe),
            "tab" => Ok(Separator::Tab),
            "space" => Ok(Separator::Space),
            "json" => Ok(Separator::Json),
            _ => Err(format!("Unknown separator: {:?}", s)),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Comma => write!(f, "comma"),
            Separator::Semicolon => write!(f, "semicolon"),
            Separator::Pipe => write!(f, "pipe"),
            Separator::Tab => write!(f, "tab"),
            Separator::Space => write!(f, "space"),
            Separator::Json => write!(f, "json"),
        }
    }
}
