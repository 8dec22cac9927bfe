use crate::constants::BRIDGE_ADDRESS_KEYWORDS;
use crate::constants::DOLPHIN_MIN_USD;
use crate::constants::ESTIMATED_SOL_PRICE_USD;
use crate::constants::EXCHANGE_ADDRESS_KEYWORDS;
use crate::constants::FISH_MIN_SOL;
use crate::constants::FISH_MIN_USD;
use crate::constants::PLATFORM_ADDRESS_KEYWORDS;
use crate::constants::PLATFORM_NAME_FRAGMENTS;
use crate::constants::SHARK_MIN_USD;
use crate::constants::WHALE_MIN_USD;
use crate::model::AddressTags;
use crate::model::Category;
use crate::model::KnownEntity;

/// Everything a strategy may look at when bucketing an address.
#[derive(Debug, Clone, Copy)]
pub struct AddressProfile<'a> {
    pub address: &'a str,
    pub balance: f64,
    pub balance_usd: Option<f64>,
    pub tags: Option<&'a AddressTags>,
}

impl<'a> AddressProfile<'a> {
    pub fn new(
        address: &'a str,
        balance: f64,
        balance_usd: Option<f64>,
        tags: Option<&'a AddressTags>,
    ) -> Self {
        Self {
            address,
            balance,
            balance_usd,
            tags,
        }
    }
}

/// One step of the classification chain. Returning `None` defers to the
/// next step.
pub trait ClassificationStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn classify(
        &self,
        profile: &AddressProfile<'_>,
    ) -> Option<Category>;
}

/// Curated table of well-known exchange, platform and bridge wallets.
pub struct KnownAddressStrategy;

impl ClassificationStrategy for KnownAddressStrategy {
    fn name(&self) -> &'static str {
        "known_address"
    }

    fn classify(
        &self,
        profile: &AddressProfile<'_>,
    ) -> Option<Category> {
        KnownEntity::lookup(profile.address).map(|entity| entity.category)
    }
}

pub struct TagStrategy;

impl ClassificationStrategy for TagStrategy {
    fn name(&self) -> &'static str {
        "tags"
    }

    fn classify(
        &self,
        profile: &AddressProfile<'_>,
    ) -> Option<Category> {
        let tags = profile.tags?;
        if tags.has_tag("exchange") {
            Some(Category::Exchange)
        } else if ["platform", "dex", "protocol"].iter().any(|t| tags.has_tag(t)) {
            Some(Category::Platform)
        } else if tags.has_tag("bridge") {
            Some(Category::Bridge)
        } else if tags.has_tag("dao") {
            Some(Category::Dao)
        } else if tags.has_tag("nft") || tags.has_tag("nft_project") {
            Some(Category::Nft)
        } else {
            None
        }
    }
}

/// Brand fragments in the display name, e.g. "Pump.fun Fee Account".
pub struct NameFragmentStrategy {
    fragments: Vec<String>,
}

impl NameFragmentStrategy {
    pub fn new(fragments: &[&str]) -> Self {
        Self {
            fragments: fragments.iter().map(|f| f.to_lowercase()).collect(),
        }
    }
}

impl Default for NameFragmentStrategy {
    fn default() -> Self {
        Self::new(PLATFORM_NAME_FRAGMENTS)
    }
}

impl ClassificationStrategy for NameFragmentStrategy {
    fn name(&self) -> &'static str {
        "name_fragment"
    }

    fn classify(
        &self,
        profile: &AddressProfile<'_>,
    ) -> Option<Category> {
        let name = profile.tags?.name.as_deref()?.to_lowercase();
        self.fragments
            .iter()
            .any(|fragment| name.contains(fragment.as_str()))
            .then_some(Category::Platform)
    }
}

/// Vanity substrings inside the address itself. Approximate by nature.
pub struct AddressKeywordStrategy {
    rules: Vec<(Category, Vec<String>)>,
}

impl Default for AddressKeywordStrategy {
    fn default() -> Self {
        let lower = |words: &[&str]| words.iter().map(|w| w.to_lowercase()).collect::<Vec<_>>();
        Self {
            rules: vec![
                (Category::Exchange, lower(EXCHANGE_ADDRESS_KEYWORDS)),
                (Category::Platform, lower(PLATFORM_ADDRESS_KEYWORDS)),
                (Category::Bridge, lower(BRIDGE_ADDRESS_KEYWORDS)),
            ],
        }
    }
}

impl ClassificationStrategy for AddressKeywordStrategy {
    fn name(&self) -> &'static str {
        "address_keyword"
    }

    fn classify(
        &self,
        profile: &AddressProfile<'_>,
    ) -> Option<Category> {
        let address = profile.address.to_lowercase();
        self.rules
            .iter()
            .find(|(_, words)| words.iter().any(|w| address.contains(w.as_str())))
            .map(|(category, _)| *category)
    }
}

/// Last resort: bucket by holdings.
pub struct BalanceTierStrategy {
    pub estimated_sol_price_usd: f64,
}

impl Default for BalanceTierStrategy {
    fn default() -> Self {
        Self {
            estimated_sol_price_usd: ESTIMATED_SOL_PRICE_USD,
        }
    }
}

impl BalanceTierStrategy {
    pub fn tier(
        &self,
        balance: f64,
        balance_usd: Option<f64>,
    ) -> Category {
        let usd = balance_usd.unwrap_or(balance * self.estimated_sol_price_usd);
        if usd > WHALE_MIN_USD {
            Category::Whale
        } else if usd > SHARK_MIN_USD {
            Category::Shark
        } else if usd > DOLPHIN_MIN_USD {
            Category::Dolphin
        } else if usd > FISH_MIN_USD || balance > FISH_MIN_SOL {
            Category::Fish
        } else {
            Category::Shrimp
        }
    }
}

impl ClassificationStrategy for BalanceTierStrategy {
    fn name(&self) -> &'static str {
        "balance_tier"
    }

    fn classify(
        &self,
        profile: &AddressProfile<'_>,
    ) -> Option<Category> {
        Some(self.tier(profile.balance, profile.balance_usd))
    }
}

/// Ordered chain of strategies; the first match wins.
pub struct Classifier {
    strategies: Vec<Box<dyn ClassificationStrategy>>,
}

impl Classifier {
    pub fn new(strategies: Vec<Box<dyn ClassificationStrategy>>) -> Self {
        Self { strategies }
    }

    /// Standard chain with the tier fallback priced at `estimated_sol_price_usd`.
    pub fn with_estimated_price(estimated_sol_price_usd: f64) -> Self {
        Self::new(vec![
            Box::new(KnownAddressStrategy),
            Box::new(TagStrategy),
            Box::new(NameFragmentStrategy::default()),
            Box::new(AddressKeywordStrategy::default()),
            Box::new(BalanceTierStrategy { estimated_sol_price_usd }),
        ])
    }

    /// Swap the strategy called `name` for another, keeping its position.
    /// Returns false when no such step exists.
    pub fn replace(
        &mut self,
        name: &str,
        strategy: Box<dyn ClassificationStrategy>,
    ) -> bool {
        match self.strategies.iter().position(|s| s.name() == name) {
            Some(idx) => {
                self.strategies[idx] = strategy;
                true
            },
            None => false,
        }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn classify(
        &self,
        profile: &AddressProfile<'_>,
    ) -> Category {
        self.strategies
            .iter()
            .find_map(|strategy| strategy.classify(profile))
            .unwrap_or(Category::Shrimp)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_estimated_price(ESTIMATED_SOL_PRICE_USD)
    }
}
