//! Card styling per tier
//!
//! The card itself is rendered client-side. This table only tells the
//! renderer which background asset to use and what colour the name overlay
//! should be so it stays legible on that background.

use serde::Serialize;

use crate::classify::Tier;
use crate::region::RegionProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyle {
    /// Asset path of the tier background
    pub background: &'static str,
    /// Hex colour of the display-name overlay
    pub text_color: &'static str,
}

const DARK_TEXT: &str = "#000000";
const LIGHT_TEXT: &str = "#FFFFFF";

impl Tier {
    pub fn card_style(&self) -> CardStyle {
        match self {
            Self::FullyRegional => CardStyle {
                background: "/memes/card-100.png",
                text_color: DARK_TEXT,
            },
            Self::RegionalWithExceptions => CardStyle {
                background: "/memes/card-70.png",
                text_color: DARK_TEXT,
            },
            Self::OccasionalRegional => CardStyle {
                background: "/memes/card-40.png",
                text_color: LIGHT_TEXT,
            },
            Self::NonRegional => CardStyle {
                background: "/memes/card-0.png",
                text_color: LIGHT_TEXT,
            },
        }
    }
}

/// One row of a region's tier table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDescriptor {
    pub tier_code: Tier,
    pub tier_label: &'static str,
    pub score: u32,
    pub card: CardStyle,
}

impl RegionProfile {
    /// Every tier of this region, highest score first.
    pub fn tier_table(&self) -> Vec<TierDescriptor> {
        Tier::ALL
            .iter()
            .map(|&tier| TierDescriptor {
                tier_code: tier,
                tier_label: self.label(tier),
                score: tier.score(),
                card: tier.card_style(),
            })
            .collect()
    }
}
