//! Compression algorithm vocabulary.
//!
//! btrfs accepts `zlib`, `zstd` and `lzo` as values of the `btrfs.compression`
//! property. Writing an empty value neutralizes the property. `no` and `none`
//! are accepted as spellings of the empty value for compatibility with
//! `btrfs property set`.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidAlgorithm;

/// Tokens that mean "disable compression" besides the empty string.
pub const DISABLE_ALIASES: [&str; 2] = ["no", "none"];

/// Target state of the compression property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionSetting {
    Disabled,
    Zlib,
    Zstd,
    Lzo,
}

impl CompressionSetting {
    /// Every setting, in the order they are listed in the usage text.
    pub const ALL: [CompressionSetting; 4] = [
        CompressionSetting::Zlib,
        CompressionSetting::Lzo,
        CompressionSetting::Zstd,
        CompressionSetting::Disabled,
    ];

    /// Maps a user token to a setting.
    ///
    /// Matching is exact: no case folding, no trimming.
    pub fn normalize(token: &str) -> Result<Self, InvalidAlgorithm> {
        let token = if DISABLE_ALIASES.contains(&token) { "" } else { token };
        match token {
            "" => Ok(CompressionSetting::Disabled),
            "zlib" => Ok(CompressionSetting::Zlib),
            "zstd" => Ok(CompressionSetting::Zstd),
            "lzo" => Ok(CompressionSetting::Lzo),
            other => Err(InvalidAlgorithm::Unknown(other.to_owned())),
        }
    }

    /// Attribute payload; empty for `Disabled`.
    pub fn as_str(self) -> &'static str {
        match self {
            CompressionSetting::Disabled => "",
            CompressionSetting::Zlib => "zlib",
            CompressionSetting::Zstd => "zstd",
            CompressionSetting::Lzo => "lzo",
        }
    }

    pub fn as_bytes(self) -> &'static [u8] {
        self.as_str().as_bytes()
    }

    pub fn is_disabled(self) -> bool {
        self == CompressionSetting::Disabled
    }

    /// Verb used in verbose output.
    pub fn action(self) -> &'static str {
        if self.is_disabled() {
            "disable"
        } else {
            "enable"
        }
    }
}

impl FromStr for CompressionSetting {
    type Err = InvalidAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompressionSetting::normalize(s)
    }
}

impl fmt::Display for CompressionSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionSetting::Disabled => f.write_str("none"),
            other => f.write_str(other.as_str()),
        }
    }
}
