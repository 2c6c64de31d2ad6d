//! Itemized annual expense projection.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Expense categories in the projection.
///
/// The serialized key set is part of the client contract — clients branch on
/// these names — so the variants map 1:1 onto the wire keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ExpenseCategory {
    /// Annualized debt service on the amortized loan.
    Mortgage,
    /// Property tax on the purchase price.
    PropertyTax,
    /// Short-term-rental insurance.
    Insurance,
    /// Homeowners-association dues.
    Hoa,
    /// Utilities.
    Utilities,
    /// Turnover cleaning.
    Cleaning,
    /// Booking platform host fees.
    PlatformFees,
    /// Upkeep and repairs.
    Maintenance,
    /// Transient occupancy tax.
    OccupancyTax,
    /// Short-term-rental permit renewal.
    Permit,
    /// Professional property management.
    PropertyManagement,
}

impl ExpenseCategory {
    /// Every category, in serialization order. A computed breakdown contains
    /// exactly this set.
    pub const ALL: [ExpenseCategory; 11] = [
        ExpenseCategory::Mortgage,
        ExpenseCategory::PropertyTax,
        ExpenseCategory::Insurance,
        ExpenseCategory::Hoa,
        ExpenseCategory::Utilities,
        ExpenseCategory::Cleaning,
        ExpenseCategory::PlatformFees,
        ExpenseCategory::Maintenance,
        ExpenseCategory::OccupancyTax,
        ExpenseCategory::Permit,
        ExpenseCategory::PropertyManagement,
    ];

    /// The wire-level key for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            ExpenseCategory::Mortgage => "mortgage",
            ExpenseCategory::PropertyTax => "propertyTax",
            ExpenseCategory::Insurance => "insurance",
            ExpenseCategory::Hoa => "hoa",
            ExpenseCategory::Utilities => "utilities",
            ExpenseCategory::Cleaning => "cleaning",
            ExpenseCategory::PlatformFees => "platformFees",
            ExpenseCategory::Maintenance => "maintenance",
            ExpenseCategory::OccupancyTax => "occupancyTax",
            ExpenseCategory::Permit => "permit",
            ExpenseCategory::PropertyManagement => "propertyManagement",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One projected expense line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    /// Projected value, USD, rounded to cents.
    pub value: Decimal,
    /// Whether `value` is monthly-denominated. Annual in every computed
    /// breakdown; the flag is part of the wire contract.
    pub monthly: bool,
    /// Human-readable provenance: user-supplied, external benchmark, or
    /// derived — and from what.
    pub source: String,
}

/// The full annual expense projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBreakdown {
    /// Sum of all category values, USD.
    pub annual_total: Decimal,
    /// `annual_total / 12`, rounded to cents.
    pub monthly: Decimal,
    /// Per-category line items.
    pub breakdown: BTreeMap<ExpenseCategory, ExpenseItem>,
}

impl ExpenseBreakdown {
    /// Returns the line item for `category`, if present.
    pub fn get(&self, category: ExpenseCategory) -> Option<&ExpenseItem> {
        self.breakdown.get(&category)
    }

    /// Annual value for `category`, zero when the category is absent.
    pub fn annual_value(&self, category: ExpenseCategory) -> Decimal {
        self.breakdown
            .get(&category)
            .map_or(Decimal::ZERO, |item| item.value)
    }
}
