use std::collections::HashMap;
use std::fmt;

/// Platform routing values for Riot API (League-v4) served by the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    NA1,
    JP1,
    KR,
    EUN1,
    EUW1,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NA1 => "na1",
            Self::JP1 => "jp1",
            Self::KR => "kr",
            Self::EUN1 => "eun1",
            Self::EUW1 => "euw1",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Regional routing values for Riot API (Account-v1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Americas,
    Asia,
    Europe,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Friendly server codes mapped to both routing values the API needs.
///
/// A code is only accepted when it appears in both maps. Keys are stored
/// lowercase and lookups lowercase their input.
#[derive(Debug, Clone)]
pub struct RegionTable {
    continental: HashMap<String, Region>,
    platform: HashMap<String, Platform>,
}

impl RegionTable {
    pub fn new<C, P>(continental: C, platform: P) -> Self
    where
        C: IntoIterator<Item = (&'static str, Region)>,
        P: IntoIterator<Item = (&'static str, Platform)>,
    {
        Self {
            continental: continental
                .into_iter()
                .map(|(code, region)| (code.to_lowercase(), region))
                .collect(),
            platform: platform
                .into_iter()
                .map(|(code, platform)| (code.to_lowercase(), platform))
                .collect(),
        }
    }

    pub fn resolve(&self, code: &str) -> Option<(Region, Platform)> {
        let code = code.to_lowercase();
        let region = self.continental.get(&code)?;
        let platform = self.platform.get(&code)?;

        Some((*region, *platform))
    }

    /// Codes present in both maps, sorted.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self
            .continental
            .keys()
            .filter(|code| self.platform.contains_key(*code))
            .map(String::as_str)
            .collect();
        codes.sort_unstable();
        codes
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::new(
            [
                ("euw", Region::Europe),
                ("na", Region::Americas),
                ("eune", Region::Europe),
                ("kr", Region::Asia),
                ("jp", Region::Asia),
            ],
            [
                ("euw", Platform::EUW1),
                ("na", Platform::NA1),
                ("eune", Platform::EUN1),
                ("kr", Platform::KR),
                ("jp", Platform::JP1),
            ],
        )
    }
}
