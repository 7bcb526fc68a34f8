//! Service categories a visitor can enquire about.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ContactError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InquiryType {
    Ecommerce,
    B2b,
    Vas,
    Transportation,
    Wms,
}

impl InquiryType {
    /// All categories in display order.
    pub const ALL: [Self; 5] = [
        Self::Ecommerce,
        Self::B2b,
        Self::Vas,
        Self::Transportation,
        Self::Wms,
    ];

    /// Identifier submitted as `inquiryType`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Ecommerce => "ecommerce",
            Self::B2b => "b2b",
            Self::Vas => "vas",
            Self::Transportation => "transportation",
            Self::Wms => "wms",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id.trim())
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ecommerce => "Ecommerce Fulfillment",
            Self::B2b => "B2B Distribution",
            Self::Vas => "Value-Added Services",
            Self::Transportation => "Trucking & Transportation",
            Self::Wms => "Warehouse Management",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Ecommerce => "D2C pick/pack across key verticals",
            Self::B2b => "Retail/wholesale routing and compliance",
            Self::Vas => "Kitting, custom packaging, returns",
            Self::Transportation => "LTL, FTL, last mile",
            Self::Wms => "Inventory control, order processing",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Ecommerce | Self::Wms => "/icons/warehousing.svg",
            Self::B2b => "/icons/supply-chain.svg",
            Self::Vas => "/icons/data-analytics.svg",
            Self::Transportation => "/icons/fleet-management.svg",
        }
    }

    /// Glyph shown when [`icon`](Self::icon) is not available.
    pub fn icon_fallback(self) -> &'static str {
        match self {
            Self::Ecommerce => "📦",
            Self::B2b => "🏷️",
            Self::Vas => "🧰",
            Self::Transportation => "🚚",
            Self::Wms => "🏭",
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for InquiryType {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ContactError::UnknownInquiry(s.to_string()))
    }
}
