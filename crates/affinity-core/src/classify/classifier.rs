//! Regional affinity classifier
//!
//! Maps an address list onto one of four tiers. Rules are evaluated in
//! priority order and the first match wins:
//!
//! 1. Regional primary, every address regional → [`Tier::FullyRegional`]
//! 2. Regional primary, some addresses elsewhere → [`Tier::RegionalWithExceptions`]
//! 3. No regional primary, at least one regional → [`Tier::OccasionalRegional`]
//! 4. Otherwise → [`Tier::NonRegional`]
//!
//! The primary address is the first one with `addressCategory == 1`.

use super::types::{Address, AddressList, ClassificationResult, Tier};
use crate::region::{RegionProfile, KERALA};

impl RegionProfile {
    /// Classify a non-empty address list against this region.
    pub fn classify(&self, addresses: &AddressList) -> ClassificationResult {
        let primary = addresses.iter().find(|a| a.is_primary());
        let has_primary_regional = primary.is_some_and(|p| self.is_regional(p));

        let regional: Vec<&Address> = addresses.iter().filter(|a| self.is_regional(a)).collect();
        let regional_count = regional.len();
        let total_count = addresses.len();

        let tier = determine_tier(has_primary_regional, regional_count, total_count);

        let display_name = primary
            .filter(|_| has_primary_regional)
            .and_then(Address::display_name)
            .or_else(|| regional.first().and_then(|a| a.display_name()))
            .or_else(|| addresses.first().display_name())
            .unwrap_or(self.placeholder_name)
            .to_string();

        ClassificationResult {
            is_regional: tier.is_regional(),
            score: tier.score(),
            tier_code: tier,
            tier_label: self.label(tier).to_string(),
            display_name,
            regional_address_count: regional_count,
            total_address_count: total_count,
        }
    }
}

fn determine_tier(has_primary_regional: bool, regional: usize, total: usize) -> Tier {
    match (has_primary_regional, regional) {
        (true, n) if n == total => Tier::FullyRegional,
        (true, _) => Tier::RegionalWithExceptions,
        (false, n) if n > 0 => Tier::OccasionalRegional,
        (false, _) => Tier::NonRegional,
    }
}

/// Classify against the built-in region.
pub fn classify(addresses: &AddressList) -> ClassificationResult {
    KERALA.classify(addresses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(addresses: Vec<Address>) -> AddressList {
        AddressList::new(addresses).unwrap()
    }

    #[test]
    fn lone_regional_primary_is_fully_regional() {
        let result = classify(&list(vec![Address::new("1", "MG Road")
            .with_city("Kochi")
            .with_category(1)
            .with_name("Arun")]));

        assert_eq!(
            result,
            ClassificationResult {
                is_regional: true,
                score: 100,
                tier_code: Tier::FullyRegional,
                tier_label: "Pure-Bred Malayali™".to_string(),
                display_name: "Arun".to_string(),
                regional_address_count: 1,
                total_address_count: 1,
            }
        );
    }

    #[test]
    fn regional_primary_with_outsider() {
        let result = classify(&list(vec![
            Address::new("1", "").with_city("Kochi").with_category(1),
            Address::new("2", "").with_city("Mumbai"),
        ]));

        assert_eq!(result.tier_code, Tier::RegionalWithExceptions);
        assert_eq!(result.score, 70);
        assert!(result.is_regional);
        assert_eq!(result.regional_address_count, 1);
        assert_eq!(result.total_address_count, 2);
    }

    #[test]
    fn no_primary_category_is_occasional() {
        let result = classify(&list(vec![
            Address::new("1", "").with_city("Mumbai").with_category(2),
            Address::new("2", "").with_city("Thrissur"),
        ]));

        assert_eq!(result.tier_code, Tier::OccasionalRegional);
        assert_eq!(result.score, 20);
        assert!(result.is_regional);
    }

    #[test]
    fn all_regional_without_primary_is_still_occasional() {
        let result = classify(&list(vec![
            Address::new("1", "").with_city("Kochi").with_category(2),
            Address::new("2", "").with_city("Kollam").with_category(3),
        ]));

        assert_eq!(result.tier_code, Tier::OccasionalRegional);
        assert_eq!(result.regional_address_count, 2);
        assert_eq!(result.total_address_count, 2);
    }

    #[test]
    fn non_regional_primary_only() {
        let result = classify(&list(vec![Address::new("1", "")
            .with_city("Mumbai")
            .with_category(1)]));

        assert_eq!(result.tier_code, Tier::NonRegional);
        assert_eq!(result.score, 0);
        assert!(!result.is_regional);
        assert_eq!(result.regional_address_count, 0);
        assert_eq!(result.tier_label, "Non-Mallu Civilian");
        assert_eq!(result.display_name, "Unknown Mallu");
    }

    #[test]
    fn non_regional_primary_with_regional_others() {
        // primary exists but is outside the region: rule C
        let result = classify(&list(vec![
            Address::new("1", "").with_city("Pune").with_category(1),
            Address::new("2", "").with_city("Kottayam"),
        ]));

        assert_eq!(result.tier_code, Tier::OccasionalRegional);
    }

    #[test]
    fn first_primary_wins() {
        let result = classify(&list(vec![
            Address::new("1", "").with_city("Delhi").with_category(1),
            Address::new("2", "").with_city("Kochi").with_category(1),
        ]));

        assert_eq!(result.tier_code, Tier::OccasionalRegional);
    }

    #[test]
    fn empty_primary_name_falls_through_to_regional_then_first() {
        let result = classify(&list(vec![
            Address::new("1", "").with_city("Delhi").with_category(2).with_name("A"),
            Address::new("2", "").with_city("Kochi").with_category(1).with_name(""),
        ]));

        // primary (the only regional address) has no name, so the first address wins
        assert_eq!(result.tier_code, Tier::RegionalWithExceptions);
        assert_eq!(result.display_name, "A");
    }

    #[test]
    fn display_name_prefers_regional_primary() {
        let result = classify(&list(vec![
            Address::new("1", "").with_city("Thrissur").with_name("First"),
            Address::new("2", "").with_city("Kochi").with_category(1).with_name("Home"),
        ]));

        assert_eq!(result.display_name, "Home");
    }

    #[test]
    fn display_name_skips_non_regional_primary() {
        let result = classify(&list(vec![
            Address::new("1", "").with_city("Delhi").with_category(1).with_name("Office"),
            Address::new("2", "").with_city("Kochi").with_name("Amma"),
        ]));

        assert_eq!(result.display_name, "Amma");
    }

    #[test]
    fn display_name_first_address_even_if_not_regional() {
        let result = classify(&list(vec![
            Address::new("1", "").with_city("Delhi").with_name("Delhi Flat"),
            Address::new("2", "").with_city("Kochi"),
        ]));

        assert_eq!(result.display_name, "Delhi Flat");
    }

    #[test]
    fn determine_tier_is_exhaustive() {
        assert_eq!(determine_tier(true, 3, 3), Tier::FullyRegional);
        assert_eq!(determine_tier(true, 1, 3), Tier::RegionalWithExceptions);
        assert_eq!(determine_tier(false, 3, 3), Tier::OccasionalRegional);
        assert_eq!(determine_tier(false, 0, 3), Tier::NonRegional);
    }
}
