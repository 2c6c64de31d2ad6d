//! In-memory market data store.
//!
//! Serves comparable statistics from a JSON snapshot loaded at startup.
//! Stands in for a production database behind the same
//! [`MarketDataSource`] seam; lookups are case-insensitive on market and
//! neighborhood, matching the upstream pipeline's collation.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use casita_core::error::SourceError;
use casita_core::traits::MarketDataSource;
use casita_core::types::{
    ComparableStatistics, ConfigurationInfo, MarketInfo, NeighborhoodInfo, PercentileStatistics,
    SupportedCombination,
};

/// One seeded market/neighborhood/bed/bath combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketEntry {
    /// Market identifier, e.g. `"san-diego"`.
    pub market: String,
    /// Neighborhood name.
    pub neighborhood: String,
    /// Number of bedrooms.
    pub bedrooms: u8,
    /// Number of bathrooms.
    pub bathrooms: Decimal,
    /// Aggregated comparable statistics for the combination.
    pub statistics: ComparableStatistics,
    /// Percentile sample, when one exists.
    #[serde(default)]
    pub percentiles: Option<PercentileStatistics>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ComboKey {
    market: String,
    neighborhood: String,
    bedrooms: u8,
    bathrooms: Decimal,
}

impl ComboKey {
    fn new(market: &str, neighborhood: &str, bedrooms: u8, bathrooms: Decimal) -> Self {
        Self {
            market: market.to_lowercase(),
            neighborhood: neighborhood.to_lowercase(),
            bedrooms,
            // 2.0 and 2 must hash identically
            bathrooms: bathrooms.normalize(),
        }
    }
}

/// In-memory mutable market data store.
pub struct InMemoryMarketStore {
    entries: DashMap<ComboKey, MarketEntry>,
}

impl InMemoryMarketStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Load a store from a JSON seed file containing a list of entries.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        let entries: Vec<MarketEntry> =
            serde_json::from_str(&content).map_err(|e| SourceError::ParseError(e.to_string()))?;

        let store = Self::new();
        for entry in entries {
            store.upsert(entry);
        }
        Ok(store)
    }

    /// Insert or replace the entry for its combination.
    pub fn upsert(&self, entry: MarketEntry) {
        let key = ComboKey::new(
            &entry.market,
            &entry.neighborhood,
            entry.bedrooms,
            entry.bathrooms,
        );
        self.entries.insert(key, entry);
    }

    /// Number of seeded combinations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no data.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for InMemoryMarketStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Capitalizes a dashed market id for display: `"san-diego"` -> `"San Diego"`.
fn display_name(id: &str) -> String {
    id.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl MarketDataSource for InMemoryMarketStore {
    async fn comparable_statistics(
        &self,
        market: &str,
        neighborhood: &str,
        bedrooms: u8,
        bathrooms: Decimal,
    ) -> Result<Option<ComparableStatistics>, SourceError> {
        let key = ComboKey::new(market, neighborhood, bedrooms, bathrooms);
        Ok(self.entries.get(&key).map(|e| e.statistics.clone()))
    }

    async fn percentiles(
        &self,
        market: &str,
        neighborhood: &str,
        bedrooms: u8,
    ) -> Result<Option<PercentileStatistics>, SourceError> {
        let market = market.to_lowercase();
        let neighborhood = neighborhood.to_lowercase();

        Ok(self
            .entries
            .iter()
            .find(|e| {
                e.key().market == market
                    && e.key().neighborhood == neighborhood
                    && e.key().bedrooms == bedrooms
                    && e.value().percentiles.is_some()
            })
            .and_then(|e| e.value().percentiles.clone()))
    }

    async fn supported_combinations(&self) -> Result<Vec<SupportedCombination>, SourceError> {
        let mut combos: Vec<SupportedCombination> = self
            .entries
            .iter()
            .map(|e| SupportedCombination {
                neighborhood: e.value().neighborhood.clone(),
                bedrooms: e.value().bedrooms,
                bathrooms: e.value().bathrooms,
            })
            .collect();
        combos.sort_by_key(ToString::to_string);
        Ok(combos)
    }

    async fn markets(&self) -> Result<Vec<MarketInfo>, SourceError> {
        struct Aggregate {
            neighborhoods: std::collections::BTreeSet<String>,
            listing_count: u32,
        }

        let mut by_market: BTreeMap<String, Aggregate> = BTreeMap::new();
        for entry in self.entries.iter() {
            let agg = by_market
                .entry(entry.key().market.clone())
                .or_insert_with(|| Aggregate {
                    neighborhoods: std::collections::BTreeSet::new(),
                    listing_count: 0,
                });
            agg.neighborhoods.insert(entry.key().neighborhood.clone());
            agg.listing_count += entry.value().statistics.listing_count;
        }

        let mut markets: Vec<MarketInfo> = by_market
            .into_iter()
            .map(|(id, agg)| MarketInfo {
                name: display_name(&id),
                id,
                neighborhood_count: agg.neighborhoods.len() as u32,
                listing_count: agg.listing_count,
            })
            .collect();
        markets.sort_by(|a, b| b.listing_count.cmp(&a.listing_count));
        Ok(markets)
    }

    async fn neighborhoods(&self, market: &str) -> Result<Vec<NeighborhoodInfo>, SourceError> {
        let market = market.to_lowercase();

        struct Aggregate {
            name: String,
            listing_count: u32,
            price_weighted: Decimal,
            occupancy_weighted: Decimal,
        }

        let mut by_neighborhood: BTreeMap<String, Aggregate> = BTreeMap::new();
        for entry in self.entries.iter() {
            if entry.key().market != market {
                continue;
            }
            let stats = &entry.value().statistics;
            let weight = Decimal::from(stats.listing_count);
            let agg = by_neighborhood
                .entry(entry.key().neighborhood.clone())
                .or_insert_with(|| Aggregate {
                    name: entry.value().neighborhood.clone(),
                    listing_count: 0,
                    price_weighted: Decimal::ZERO,
                    occupancy_weighted: Decimal::ZERO,
                });
            agg.listing_count += stats.listing_count;
            agg.price_weighted += stats.avg_price * weight;
            agg.occupancy_weighted += stats.avg_occupancy * weight;
        }

        let mut neighborhoods: Vec<NeighborhoodInfo> = by_neighborhood
            .into_values()
            .map(|agg| {
                let total = Decimal::from(agg.listing_count);
                let (avg_price, avg_occupancy) = if total > Decimal::ZERO {
                    (
                        (agg.price_weighted / total).round_dp(2),
                        (agg.occupancy_weighted / total).round_dp(1),
                    )
                } else {
                    (Decimal::ZERO, Decimal::ZERO)
                };
                NeighborhoodInfo {
                    name: agg.name,
                    listing_count: agg.listing_count,
                    avg_price,
                    avg_occupancy,
                }
            })
            .collect();
        neighborhoods.sort_by(|a, b| b.listing_count.cmp(&a.listing_count));
        Ok(neighborhoods)
    }

    async fn configurations(
        &self,
        market: &str,
        neighborhood: &str,
    ) -> Result<Vec<ConfigurationInfo>, SourceError> {
        let market = market.to_lowercase();
        let neighborhood = neighborhood.to_lowercase();

        let mut configs: Vec<ConfigurationInfo> = self
            .entries
            .iter()
            .filter(|e| e.key().market == market && e.key().neighborhood == neighborhood)
            .map(|e| ConfigurationInfo {
                bedrooms: e.value().bedrooms,
                bathrooms: e.value().bathrooms,
                listing_count: e.value().statistics.listing_count,
                has_insights: e.value().statistics.combo_profile.is_some(),
            })
            .collect();
        configs.sort_by(|a, b| {
            a.bedrooms
                .cmp(&b.bedrooms)
                .then(a.bathrooms.cmp(&b.bathrooms))
        });
        Ok(configs)
    }
}
