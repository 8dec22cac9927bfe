use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Species a graph node is bucketed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "exchange")]
    Exchange,
    #[serde(rename = "platform")]
    Platform,
    #[serde(rename = "bridge")]
    Bridge,
    #[serde(rename = "dao")]
    Dao,
    #[serde(rename = "nft")]
    Nft,
    #[serde(rename = "whale")]
    Whale,
    #[serde(rename = "shark")]
    Shark,
    #[serde(rename = "dolphin")]
    Dolphin,
    #[serde(rename = "fish")]
    Fish,
    #[serde(rename = "shrimp")]
    Shrimp,
    #[serde(rename = "root")]
    Root,
}

impl Category {
    pub const ALL: [Category; 11] = [
        Category::Exchange,
        Category::Platform,
        Category::Bridge,
        Category::Dao,
        Category::Nft,
        Category::Whale,
        Category::Shark,
        Category::Dolphin,
        Category::Fish,
        Category::Shrimp,
        Category::Root,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Exchange => "exchange",
            Category::Platform => "platform",
            Category::Bridge => "bridge",
            Category::Dao => "dao",
            Category::Nft => "nft",
            Category::Whale => "whale",
            Category::Shark => "shark",
            Category::Dolphin => "dolphin",
            Category::Fish => "fish",
            Category::Shrimp => "shrimp",
            Category::Root => "root",
        }
    }

    /// Hubs that many wallets route through.
    pub fn is_hub(&self) -> bool {
        matches!(self, Category::Exchange | Category::Platform)
    }

    pub fn style(&self) -> CategoryStyle {
        match self {
            Category::Root => CategoryStyle::new("#f59e0b", "#fbbf24", "#111827", true),
            Category::Exchange => CategoryStyle::new("#2563eb", "#3b82f6", "#ffffff", true),
            Category::Platform => CategoryStyle::new("#7c3aed", "#8b5cf6", "#ffffff", true),
            Category::Bridge => CategoryStyle::new("#0891b2", "#06b6d4", "#ffffff", false),
            Category::Dao => CategoryStyle::new("#4f46e5", "#6366f1", "#ffffff", false),
            Category::Nft => CategoryStyle::new("#db2777", "#ec4899", "#ffffff", false),
            Category::Whale => CategoryStyle::new("#1e3a8a", "#1e40af", "#ffffff", true),
            Category::Shark => CategoryStyle::new("#374151", "#4b5563", "#ffffff", false),
            Category::Dolphin => CategoryStyle::new("#0e7490", "#0ea5e9", "#ffffff", false),
            Category::Fish => CategoryStyle::new("#15803d", "#22c55e", "#ffffff", false),
            Category::Shrimp => CategoryStyle::new("#9ca3af", "#d1d5db", "#111827", false),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Renderer styling applied per node group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStyle {
    pub border: &'static str,
    pub background: &'static str,
    pub font_color: &'static str,
    pub bold: bool,
}

impl CategoryStyle {
    const fn new(
        border: &'static str,
        background: &'static str,
        font_color: &'static str,
        bold: bool,
    ) -> Self {
        Self {
            border,
            background,
            font_color,
            bold,
        }
    }
}

/// Full group -> style lookup, keyed by group name.
pub fn style_table() -> BTreeMap<&'static str, CategoryStyle> {
    Category::ALL.iter().map(|c| (c.as_str(), c.style())).collect()
}
