//! Classification types

use serde::{Deserialize, Deserializer, Serialize};

/// Address category marking the user's primary (home) address.
pub const PRIMARY_CATEGORY: i64 = 1;

/// One saved address record from the attested public data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Opaque identifier, unique within one result set
    #[serde(default, deserialize_with = "identifier")]
    pub id: String,
    /// Street/area line
    #[serde(default, deserialize_with = "string_or_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// 1 = home, 2 = work, 3/4 = other
    #[serde(default, deserialize_with = "category", skip_serializing_if = "Option::is_none")]
    pub address_category: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Address {
    pub fn new(id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            ..Self::default()
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_category(mut self, category: i64) -> Self {
        self.address_category = Some(category);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether this record is flagged as the primary address.
    pub fn is_primary(&self) -> bool {
        self.address_category == Some(PRIMARY_CATEGORY)
    }

    /// The display name, if present and non-empty.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// `null` reads as an empty string; any other non-string is an error.
fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Identifiers are never interpreted: numbers are stringified, anything
/// else that is not a string reads as empty.
fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Categories compare numerically, so `1.0` is the same category as `1`.
/// Strings and fractional numbers read as absent.
fn category<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let serde_json::Value::Number(n) = serde_json::Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(i) = n.as_i64() {
        return Ok(Some(i));
    }
    Ok(n.as_f64()
        .filter(|f| f.fract() == 0.0)
        .map(|f| f as i64))
}

/// Optional fields from the proof provider are loosely typed. A value of the
/// wrong type is treated as absent rather than failing the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Non-empty, ordered list of addresses. The only way to feed the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressList(Vec<Address>);

impl AddressList {
    /// Wrap a vector, returning `None` when it is empty.
    pub fn new(addresses: Vec<Address>) -> Option<Self> {
        if addresses.is_empty() {
            None
        } else {
            Some(Self(addresses))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First element. Infallible because the list is never empty.
    pub fn first(&self) -> &Address {
        &self.0[0]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.0.iter()
    }
}

/// The four affinity tiers, highest score first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    /// Primary address regional and every address regional
    FullyRegional,
    /// Primary address regional, some addresses elsewhere
    RegionalWithExceptions,
    /// No regional primary, but at least one regional address
    OccasionalRegional,
    /// Nothing regional at all
    NonRegional,
}

impl Tier {
    pub const ALL: [Tier; 4] = [
        Self::FullyRegional,
        Self::RegionalWithExceptions,
        Self::OccasionalRegional,
        Self::NonRegional,
    ];

    pub fn score(&self) -> u32 {
        match self {
            Self::FullyRegional => 100,
            Self::RegionalWithExceptions => 70,
            Self::OccasionalRegional => 20,
            Self::NonRegional => 0,
        }
    }

    pub fn is_regional(&self) -> bool {
        !matches!(self, Self::NonRegional)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::FullyRegional => "fully-regional",
            Self::RegionalWithExceptions => "regional-with-exceptions",
            Self::OccasionalRegional => "occasional-regional",
            Self::NonRegional => "non-regional",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of classifying one address list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub is_regional: bool,
    pub score: u32,
    pub tier_code: Tier,
    pub tier_label: String,
    /// Never empty; falls back to the region's placeholder
    pub display_name: String,
    pub regional_address_count: usize,
    pub total_address_count: usize,
}
