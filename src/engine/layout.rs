use crate::constants::ESTIMATED_SOL_PRICE_USD;
use crate::model::Category;

/// Physics weight and visual size for a node. Both scale logarithmically with
/// the node's value and get a category multiplier so hubs stand out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub estimated_sol_price_usd: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            estimated_sol_price_usd: ESTIMATED_SOL_PRICE_USD,
        }
    }
}

impl LayoutMetrics {
    pub fn new(estimated_sol_price_usd: f64) -> Self {
        Self { estimated_sol_price_usd }
    }

    /// Token balance if positive, else USD balance if positive, else the
    /// native balance at the estimated price.
    pub fn value(
        &self,
        balance: f64,
        balance_usd: Option<f64>,
        token_balance: Option<f64>,
    ) -> f64 {
        if let Some(tokens) = token_balance.filter(|t| *t > 0.0) {
            return tokens;
        }
        if let Some(usd) = balance_usd.filter(|u| *u > 0.0) {
            return usd;
        }
        let estimated = balance * self.estimated_sol_price_usd;
        if estimated.is_finite() { estimated.max(0.0) } else { 0.0 }
    }

    pub fn mass(
        &self,
        category: Category,
        balance: f64,
        balance_usd: Option<f64>,
        token_balance: Option<f64>,
    ) -> f64 {
        let base = self.value(balance, balance_usd, token_balance).ln_1p().max(1.0);
        base * mass_factor(category)
    }

    pub fn size(
        &self,
        category: Category,
        balance: f64,
        balance_usd: Option<f64>,
        token_balance: Option<f64>,
    ) -> f64 {
        let value = self.value(balance, balance_usd, token_balance).max(1.0);
        (5.0 + value.ln_1p()) * size_factor(category)
    }
}

fn mass_factor(category: Category) -> f64 {
    match category {
        _ if category.is_hub() => 50.0,
        Category::Whale => 10.0,
        Category::Shark => 5.0,
        Category::Dolphin => 2.0,
        _ => 1.0,
    }
}

fn size_factor(category: Category) -> f64 {
    match category {
        _ if category.is_hub() => 3.5,
        Category::Whale => 2.5,
        Category::Shark => 1.5,
        Category::Dolphin => 1.2,
        _ => 1.0,
    }
}
