//! Region profiles
//!
//! A [`RegionProfile`] bundles everything region-specific the classifier
//! needs: the place-name keyword list, the label for each tier, and the
//! placeholder shown when no address carries a name. Adding a region means
//! adding one more constant here.

use crate::classify::{Address, Tier};

/// Immutable, region-specific classification data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionProfile {
    /// Human-readable region name
    pub name: &'static str,
    /// Lowercase place-name substrings
    pub keywords: &'static [&'static str],
    pub labels: TierLabels,
    /// Display name used when no address has a usable name
    pub placeholder_name: &'static str,
}

/// One label per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLabels {
    pub fully_regional: &'static str,
    pub regional_with_exceptions: &'static str,
    pub occasional_regional: &'static str,
    pub non_regional: &'static str,
}

impl TierLabels {
    pub fn get(&self, tier: Tier) -> &'static str {
        match tier {
            Tier::FullyRegional => self.fully_regional,
            Tier::RegionalWithExceptions => self.regional_with_exceptions,
            Tier::OccasionalRegional => self.occasional_regional,
            Tier::NonRegional => self.non_regional,
        }
    }
}

/// Kerala: major cities and districts.
pub const KERALA: RegionProfile = RegionProfile {
    name: "Kerala",
    keywords: &[
        "kerala",
        "kochi",
        "ernakulam",
        "kozhikode",
        "thrissur",
        "trivandrum",
        "thiruvananthapuram",
        "kottayam",
        "idukki",
        "pathanamthitta",
        "palakkad",
        "malappuram",
        "kollam",
        "alappuzha",
    ],
    labels: TierLabels {
        fully_regional: "Pure-Bred Malayali™",
        regional_with_exceptions: "Mallu Explorer",
        occasional_regional: "Weekend Mallu",
        non_regional: "Non-Mallu Civilian",
    },
    placeholder_name: "Unknown Mallu",
};

impl RegionProfile {
    /// Case-insensitive substring match of any keyword against `text`.
    pub fn matches_text(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        self.keywords.iter().any(|kw| lower.contains(kw))
    }

    /// An address is regional if its street line or its city matches.
    pub fn is_regional(&self, address: &Address) -> bool {
        self.matches_text(&address.address)
            || address
                .city
                .as_deref()
                .is_some_and(|city| self.matches_text(city))
    }

    pub fn label(&self, tier: Tier) -> &'static str {
        self.labels.get(tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kerala_has_fourteen_lowercase_keywords() {
        assert_eq!(KERALA.keywords.len(), 14);
        for kw in KERALA.keywords {
            assert_eq!(*kw, kw.to_lowercase());
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert!(KERALA.matches_text("KOCHI METRO"));
        assert!(KERALA.matches_text("near kochi junction"));
        assert!(KERALA.matches_text("Thiruvananthapuram"));
    }

    #[test]
    fn matching_is_substring_not_token() {
        // "kollam" inside a longer word still counts
        assert!(KERALA.matches_text("Kollamkode Road"));
        assert!(!KERALA.matches_text("Mumbai"));
        assert!(!KERALA.matches_text(""));
    }

    #[test]
    fn city_only_match_counts() {
        let addr = Address::new("1", "Flat 4B, Sea View").with_city("Ernakulam");
        assert!(KERALA.is_regional(&addr));

        let addr = Address::new("2", "Flat 4B, Sea View");
        assert!(!KERALA.is_regional(&addr));
    }

    #[test]
    fn labels_cover_every_tier() {
        for tier in Tier::ALL {
            assert!(!KERALA.label(tier).is_empty());
        }
        assert_eq!(KERALA.label(Tier::FullyRegional), "Pure-Bred Malayali™");
        assert_eq!(KERALA.label(Tier::NonRegional), "Non-Mallu Civilian");
    }
}
