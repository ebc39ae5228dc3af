use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Product,
    Painting,
    Print,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Product => "product",
            ItemKind::Painting => "painting",
            ItemKind::Print => "print",
        }
    }
}

/// Identifies one catalog entry across every collection.
///
/// Rendered as `kind:code` (`product:1001`, `painting:OP3`). The bare legacy
/// forms (`1001`, `OP3`, `PR12`, `art-OP3`) are still accepted when parsing so
/// snapshots written before the tagged form load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawItemKey", into = "String")]
pub struct ItemKey {
    kind: ItemKind,
    code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseItemKeyError {
    #[error("item key is empty")]
    Empty,
    #[error("unknown item kind `{0}`")]
    UnknownKind(String),
    #[error("product id must be numeric, got `{0}`")]
    InvalidProductId(String),
    #[error("cannot infer item kind from `{0}`")]
    Unrecognised(String),
}

impl ItemKey {
    pub fn product(id: u32) -> Self {
        Self {
            kind: ItemKind::Product,
            code: id.to_string(),
        }
    }

    pub fn painting(code: &str) -> Self {
        Self {
            kind: ItemKind::Painting,
            code: code.trim().to_ascii_uppercase(),
        }
    }

    pub fn print(code: &str) -> Self {
        Self {
            kind: ItemKind::Print,
            code: code.trim().to_ascii_uppercase(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Numeric id for product keys.
    pub fn product_id(&self) -> Option<u32> {
        match self.kind {
            ItemKind::Product => self.code.parse().ok(),
            _ => None,
        }
    }

    fn tagged(kind: &str, code: &str) -> Result<Self, ParseItemKeyError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ParseItemKeyError::Empty);
        }
        match kind {
            "product" => code
                .parse::<u32>()
                .map(Self::product)
                .map_err(|_| ParseItemKeyError::InvalidProductId(code.to_owned())),
            "painting" => Ok(Self::painting(code)),
            "print" => Ok(Self::print(code)),
            other => Err(ParseItemKeyError::UnknownKind(other.to_owned())),
        }
    }

    fn legacy(raw: &str) -> Result<Self, ParseItemKeyError> {
        let raw = raw.strip_prefix("art-").unwrap_or(raw);
        if let Ok(id) = raw.parse::<u32>() {
            return Ok(Self::product(id));
        }
        let upper = raw.to_ascii_uppercase();
        if upper.starts_with("OP") {
            Ok(Self::painting(&upper))
        } else if upper.starts_with("PR") {
            Ok(Self::print(&upper))
        } else {
            Err(ParseItemKeyError::Unrecognised(raw.to_owned()))
        }
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.code)
    }
}

impl FromStr for ItemKey {
    type Err = ParseItemKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseItemKeyError::Empty);
        }
        match s.split_once(':') {
            Some((kind, code)) => Self::tagged(kind, code),
            None => Self::legacy(s),
        }
    }
}

/// Old cart snapshots stored product ids as JSON numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawItemKey {
    Number(u32),
    Text(String),
}

impl TryFrom<RawItemKey> for ItemKey {
    type Error = ParseItemKeyError;

    fn try_from(raw: RawItemKey) -> Result<Self, Self::Error> {
        match raw {
            RawItemKey::Number(id) => Ok(Self::product(id)),
            RawItemKey::Text(text) => text.parse(),
        }
    }
}

impl TryFrom<String> for ItemKey {
    type Error = ParseItemKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemKey> for String {
    fn from(key: ItemKey) -> Self {
        key.to_string()
    }
}

/// Lightweight copy of a catalog entry, stored in cart lines and recents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    #[serde(alias = "id")]
    pub key: ItemKey,
    pub name: String,
    pub price: u64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
}

fn one() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: ItemSummary,
    #[serde(default = "one")]
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: ItemSummary) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn line_total(&self) -> u64 {
        self.item.price.saturating_mul(u64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentItem {
    #[serde(flatten)]
    pub item: ItemSummary,
    #[serde(default)]
    pub viewed_at_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: u64,
    pub shipping: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub notes: String,
}

impl ContactDetails {
    pub const REQUIRED: [&'static str; 5] = ["first_name", "last_name", "phone", "address", "city"];

    /// Required fields that are blank. Presence only; no format checks.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let values = [
            &self.first_name,
            &self.last_name,
            &self.phone,
            &self.address,
            &self.city,
        ];
        Self::REQUIRED
            .iter()
            .zip(values)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }
}

// ── Service DTOs ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub product_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintPriceResponse {
    pub code: String,
    pub size: String,
    pub size_label: String,
    pub glass: String,
    pub frame: String,
    pub price: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteLineRequest {
    pub key: String,
    #[serde(default = "one")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutQuoteRequest {
    pub lines: Vec<QuoteLineRequest>,
    #[serde(default)]
    pub details: Option<ContactDetails>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutQuoteResponse {
    pub lines: Vec<CartLine>,
    pub unknown_keys: Vec<String>,
    pub totals: OrderTotals,
    #[serde(default)]
    pub missing_fields: Vec<String>,
    pub reference: Option<String>,
    pub message: Option<String>,
    pub whatsapp_url: Option<String>,
}
