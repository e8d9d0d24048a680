//! Provider league code to canonical sport mapping.
//!
//! PrizePicks splits one sport across several league codes (season-long
//! markets, first-half markets) and abbreviates esports titles. This table
//! folds those codes onto a single canonical identifier. Codes not in the
//! table pass through unchanged so new leagues never break ingestion.

/// Provider league code -> canonical sport identifier.
pub const SPORT_CODES: &[(&str, &str)] = &[
    // ===== Basketball =====
    ("NBA", "NBA"),
    ("NBASZN", "NBA"),
    ("NBA1H", "NBA"),
    ("NBA1Q", "NBA"),
    ("NBA2H", "NBA"),
    ("WNBA", "WNBA"),
    ("CBB", "NCAAB"),
    ("WCBB", "NCAAWB"),
    // ===== Football =====
    ("NFL", "NFL"),
    ("NFLSZN", "NFL"),
    ("NFL1H", "NFL"),
    ("NFL1Q", "NFL"),
    ("NFL2H", "NFL"),
    ("CFB", "NCAAF"),
    ("CFB1H", "NCAAF"),
    // ===== Baseball / hockey =====
    ("MLB", "MLB"),
    ("MLBSZN", "MLB"),
    ("MLBLIVE", "MLB"),
    ("NHL", "NHL"),
    ("NHL1P", "NHL"),
    // ===== Other =====
    ("PGA", "GOLF"),
    ("LIVGOLF", "GOLF"),
    ("TENNIS", "TENNIS"),
    ("MMA", "MMA"),
    ("UFC", "MMA"),
    ("SOCCER", "SOCCER"),
    ("EPL", "SOCCER"),
    // ===== Esports =====
    ("LoL", "LEAGUE_OF_LEGENDS"),
    ("CS2", "COUNTER_STRIKE"),
    ("CSGO", "COUNTER_STRIKE"),
    ("VAL", "VALORANT"),
    ("DOTA2", "DOTA"),
];

/// Look up the canonical sport for a provider league code.
///
/// Exact matches win; otherwise the code is compared case-insensitively.
pub fn canonical_sport(code: &str) -> Option<&'static str> {
    let code = code.trim();

    SPORT_CODES
        .iter()
        .find(|(provider, _)| *provider == code)
        .or_else(|| {
            SPORT_CODES
                .iter()
                .find(|(provider, _)| provider.eq_ignore_ascii_case(code))
        })
        .map(|(_, sport)| *sport)
}

/// Map a provider league code to a canonical sport identifier.
///
/// Unknown codes are returned unchanged.
pub fn map_sport_code(code: &str) -> String {
    canonical_sport(code)
        .map(str::to_string)
        .unwrap_or_else(|| code.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_codes() {
        assert_eq!(map_sport_code("NBA"), "NBA");
        assert_eq!(map_sport_code("NFL"), "NFL");
        assert_eq!(map_sport_code("NHL"), "NHL");
    }

    #[test]
    fn test_seasonal_variants_fold() {
        assert_eq!(map_sport_code("NBASZN"), "NBA");
        assert_eq!(map_sport_code("NFL1H"), "NFL");
        assert_eq!(map_sport_code("MLBLIVE"), "MLB");
        assert_eq!(map_sport_code("CFB"), "NCAAF");
        assert_eq!(map_sport_code("CBB"), "NCAAB");
    }

    #[test]
    fn test_esports_expansion() {
        assert_eq!(map_sport_code("LoL"), "LEAGUE_OF_LEGENDS");
        assert_eq!(map_sport_code("LOL"), "LEAGUE_OF_LEGENDS"); // Case insensitive
        assert_eq!(map_sport_code("CSGO"), "COUNTER_STRIKE");
        assert_eq!(map_sport_code("CS2"), "COUNTER_STRIKE");
    }

    #[test]
    fn test_unknown_code_passes_through() {
        assert_eq!(map_sport_code("XYZ"), "XYZ");
        assert_eq!(map_sport_code("xyz"), "xyz");
        assert_eq!(map_sport_code(""), "");
        assert_eq!(canonical_sport("XYZ"), None);
    }
}
