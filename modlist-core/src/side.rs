use serde::{Deserialize, Serialize};

/// Where a mod has to be installed, as reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Client only
    Client,
    /// Dedicated server only
    Server,
    /// Both client and server
    Both,
    /// Not reported, or a value the catalog introduced after this was written
    Unknown,
}

impl Side {
    /// The string written to the manifest's `Side` field.
    ///
    /// Known sides keep the catalog's lower-case spelling; `Unknown` matches
    /// the default a record carries before any catalog match.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Server => "server",
            Self::Both => "both",
            Self::Unknown => crate::record::UNKNOWN_SIDE,
        }
    }

    /// Lenient conversion used for catalog responses: anything unrecognized
    /// becomes `Unknown` instead of failing the whole entry.
    pub fn from_catalog(s: &str) -> Self {
        s.parse().unwrap_or(Self::Unknown)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string cannot be parsed into a `Side`.
#[derive(Debug, Clone)]
pub struct SideParseError(pub String);

impl std::fmt::Display for SideParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown side: '{}'", self.0)
    }
}

impl std::error::Error for SideParseError {}

impl std::str::FromStr for Side {
    type Err = SideParseError;

    /// Parse a side name (case-insensitive, surrounding whitespace ignored).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "client" => Ok(Self::Client),
            "server" => Ok(Self::Server),
            "both" | "universal" => Ok(Self::Both),
            "unknown" => Ok(Self::Unknown),
            _ => Err(SideParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_spellings() {
        assert_eq!("both".parse::<Side>().unwrap(), Side::Both);
        assert_eq!("Client".parse::<Side>().unwrap(), Side::Client);
        assert_eq!(" server ".parse::<Side>().unwrap(), Side::Server);
        assert_eq!("universal".parse::<Side>().unwrap(), Side::Both);
    }

    #[test]
    fn unrecognized_side_is_an_error() {
        assert!("everywhere".parse::<Side>().is_err());
    }

    #[test]
    fn from_catalog_falls_back_to_unknown() {
        assert_eq!(Side::from_catalog("everywhere"), Side::Unknown);
        assert_eq!(Side::from_catalog(""), Side::Unknown);
    }

    #[test]
    fn display_matches_manifest_spelling() {
        assert_eq!(Side::Both.to_string(), "both");
        assert_eq!(Side::Unknown.to_string(), "Unknown");
    }
}
