//! Requested feed page.

use serde::Serialize;
use std::fmt;

/// A 1-based page number.
///
/// Missing, empty or unparseable input resolves to page 1, and so does any
/// value below 1. Values above `u32::MAX` saturate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageRequest(u32);

impl PageRequest {
    pub const FIRST: PageRequest = PageRequest(1);

    /// Build from a page number, clamping to at least 1.
    pub fn new(page: i64) -> Self {
        Self(page.clamp(1, i64::from(u32::MAX)) as u32)
    }

    /// Parse the raw `currentpage` query value.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or(Self::FIRST)
    }

    /// The page number (always >= 1).
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
