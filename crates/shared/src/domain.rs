use serde::{Deserialize, Serialize};

/// Job-title payload returned by the remote generator service.
///
/// All three fields arrive as non-empty strings from the server; no further
/// validation is performed on this side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleRecord {
    pub seniority: String,
    pub field: String,
    pub role: String,
}

/// Selects the normal or artificially slow generator endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestVariant {
    Normal,
    Slow,
}

impl RequestVariant {
    /// Path segment appended to the base endpoint for this variant.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Self::Normal => "/api",
            Self::Slow => "/slow-api",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Slow => "slow",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_distinct_endpoint_paths() {
        assert_eq!(RequestVariant::Normal.endpoint_path(), "/api");
        assert_eq!(RequestVariant::Slow.endpoint_path(), "/slow-api");
    }
}
