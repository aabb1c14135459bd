//! Categorical labels from the service mapped to display classes.
//!
//! RULE: each mapping is a closed enum parsed by a total function with one
//! explicit fallback variant. Unknown or missing labels resolve to that
//! variant, never to an error. Labels are matched exactly (case-sensitive).

use serde::{Deserialize, Serialize};

/// Colour family of a style class set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Gray,
    Blue,
    Purple,
    Amber,
    Green,
    Red,
    Orange,
}

/// A set of utility classes plus the tone they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleClass {
    pub tone: Tone,
    pub classes: &'static str,
}

// ── Segment ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentTier {
    Mass,
    MassAffluent,
    Affluent,
    HighNetWorth,
}

impl SegmentTier {
    pub const FALLBACK: SegmentTier = SegmentTier::Mass;

    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("mass") => SegmentTier::Mass,
            Some("mass_affluent") => SegmentTier::MassAffluent,
            Some("affluent") => SegmentTier::Affluent,
            Some("high_net_worth") => SegmentTier::HighNetWorth,
            _ => Self::FALLBACK,
        }
    }

    /// Background, text and border classes, in that order.
    pub fn badge_style(self) -> StyleClass {
        match self {
            SegmentTier::Mass => StyleClass {
                tone: Tone::Gray,
                classes: "bg-gray-100 text-gray-800 border-gray-300",
            },
            SegmentTier::MassAffluent => StyleClass {
                tone: Tone::Blue,
                classes: "bg-blue-100 text-blue-800 border-blue-300",
            },
            SegmentTier::Affluent => StyleClass {
                tone: Tone::Purple,
                classes: "bg-purple-100 text-purple-800 border-purple-300",
            },
            SegmentTier::HighNetWorth => StyleClass {
                tone: Tone::Amber,
                classes: "bg-amber-100 text-amber-800 border-amber-300",
            },
        }
    }
}

pub fn segment_badge_color(segment: Option<&str>) -> StyleClass {
    SegmentTier::from_label(segment).badge_style()
}

// ── Product status ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    Active,
    Inactive,
    Closed,
    Blocked,
    Overdue,
    Current,
}

impl ProductStatus {
    pub const FALLBACK: ProductStatus = ProductStatus::Inactive;

    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("active") => ProductStatus::Active,
            Some("inactive") => ProductStatus::Inactive,
            Some("closed") => ProductStatus::Closed,
            Some("blocked") => ProductStatus::Blocked,
            Some("overdue") => ProductStatus::Overdue,
            Some("current") => ProductStatus::Current,
            _ => Self::FALLBACK,
        }
    }

    /// Text and background classes.
    pub fn style(self) -> StyleClass {
        match self {
            ProductStatus::Active | ProductStatus::Current => StyleClass {
                tone: Tone::Green,
                classes: "text-green-600 bg-green-50",
            },
            ProductStatus::Inactive => StyleClass {
                tone: Tone::Gray,
                classes: "text-gray-600 bg-gray-50",
            },
            ProductStatus::Closed | ProductStatus::Blocked => StyleClass {
                tone: Tone::Red,
                classes: "text-red-600 bg-red-50",
            },
            ProductStatus::Overdue => StyleClass {
                tone: Tone::Orange,
                classes: "text-orange-600 bg-orange-50",
            },
        }
    }
}

pub fn product_status_color(status: Option<&str>) -> StyleClass {
    ProductStatus::from_label(status).style()
}

// ── Account type ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    Savings,
    Current,
    Deposit,
    Payroll,
}

impl AccountType {
    pub const FALLBACK: AccountType = AccountType::Savings;

    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("savings") => AccountType::Savings,
            Some("current") => AccountType::Current,
            Some("deposit") => AccountType::Deposit,
            Some("payroll") => AccountType::Payroll,
            _ => Self::FALLBACK,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AccountType::Savings => "💰",
            AccountType::Current => "💳",
            AccountType::Deposit => "🏦",
            AccountType::Payroll => "💼",
        }
    }
}

pub fn account_type_icon(account_type: Option<&str>) -> &'static str {
    AccountType::from_label(account_type).icon()
}

// ── Fixed badges ───────────────────────────────────────────────────

pub const OVERDUE_BADGE: StyleClass = StyleClass {
    tone: Tone::Red,
    classes: "bg-red-100 text-red-800",
};

/// Investment return badge: green for zero and gains, red for losses.
pub fn return_style(percentage: f64) -> StyleClass {
    if percentage >= 0.0 {
        StyleClass {
            tone: Tone::Green,
            classes: "bg-green-100 text-green-800",
        }
    } else {
        StyleClass {
            tone: Tone::Red,
            classes: "bg-red-100 text-red-800",
        }
    }
}

pub fn consent_style(granted: Option<bool>) -> StyleClass {
    if granted.unwrap_or(false) {
        StyleClass {
            tone: Tone::Green,
            classes: "bg-green-100 text-green-800",
        }
    } else {
        StyleClass {
            tone: Tone::Gray,
            classes: "bg-gray-100 text-gray-600",
        }
    }
}

/// Active-channel badge: primary fill when active, secondary otherwise.
pub fn channel_style(active: Option<bool>) -> StyleClass {
    if active.unwrap_or(false) {
        StyleClass {
            tone: Tone::Green,
            classes: "bg-primary text-primary-foreground",
        }
    } else {
        StyleClass {
            tone: Tone::Gray,
            classes: "bg-secondary text-secondary-foreground",
        }
    }
}
