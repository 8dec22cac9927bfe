use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Duration;
use std::time::Instant;

use tracing::debug;
use tracing::warn;

/// Where prices come from on a cache miss, e.g. an RPC or price API client.
pub trait PriceSource: Send + Sync {
  /// USD price for `mint`, `Ok(None)` when the source has no quote.
  fn fetch_price(
    &self,
    mint: &str,
  ) -> anyhow::Result<Option<f64>>;
}

/// Fixed quotes loaded up front, e.g. from an exported price file.
#[derive(Debug, Clone, Default)]
pub struct StaticPriceSource {
  prices: HashMap<String, f64>,
}

impl StaticPriceSource {
  pub fn new(prices: HashMap<String, f64>) -> Self { Self { prices } }
}

impl PriceSource for StaticPriceSource {
  fn fetch_price(
    &self,
    mint: &str,
  ) -> anyhow::Result<Option<f64>> {
    match self.prices.get(mint) {
      Some(price) if !price.is_finite() || *price < 0.0 => anyhow::bail!("invalid quote for {}: {}", mint, price),
      price => Ok(price.copied()),
    }
  }
}

#[derive(Debug, Clone, Copy)]
struct CachedPrice {
  price:      Option<f64>,
  fetched_at: Instant,
}

/// Read-through price cache with explicit expiry. Owned by whoever builds
/// the graph context; there is no process-wide instance.
pub struct PriceCache<S> {
  source:  S,
  ttl:     Duration,
  entries: RwLock<HashMap<String, CachedPrice>>,
}

impl<S: PriceSource> PriceCache<S> {
  pub fn new(
    source: S,
    ttl: Duration,
  ) -> Self {
    Self { source, ttl, entries: RwLock::new(HashMap::new()) }
  }

  pub fn get(
    &self,
    mint: &str,
  ) -> Option<f64> {
    self.get_at(mint, Instant::now())
  }

  /// Same as [`PriceCache::get`] with an explicit clock reading.
  pub fn get_at(
    &self,
    mint: &str,
    now: Instant,
  ) -> Option<f64> {
    {
      let entries = self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner());
      if let Some(entry) = entries.get(mint) {
        if now.saturating_duration_since(entry.fetched_at) < self.ttl {
          return entry.price;
        }
      }
    }

    match self.source.fetch_price(mint) {
      Ok(price) => {
        debug!("price_cache::refreshed::{}::{:?}", mint, price);
        let mut entries = self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        entries.insert(mint.to_string(), CachedPrice { price, fetched_at: now });
        price
      },
      Err(e) => {
        warn!("price_cache::fetch_failed::{}::{}", mint, e);
        None
      },
    }
  }

  pub fn invalidate(
    &self,
    mint: &str,
  ) {
    self.entries.write().unwrap_or_else(|poisoned| poisoned.into_inner()).remove(mint);
  }

  pub fn len(&self) -> usize { self.entries.read().unwrap_or_else(|poisoned| poisoned.into_inner()).len() }

  pub fn is_empty(&self) -> bool { self.len() == 0 }
}
