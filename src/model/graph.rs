use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use super::category::Category;

/// Running totals for one address across the folded transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressStat {
    pub transaction_count: u64,
    /// Sum of absolute USD values touching this address.
    pub interaction_volume: f64,
    /// Incoming minus outgoing USD.
    pub net_flow: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenVolume {
    pub amount: f64,
    pub symbol: Option<String>,
}

/// Undirected summary of every transaction between two addresses. `from` is
/// the lexicographically smaller endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    /// Transaction tally.
    pub value: u64,
    pub volume: f64,
    pub token_volumes: BTreeMap<String, TokenVolume>,
}

impl GraphEdge {
    /// Endpoints in sorted order, so both directions map to the same pair.
    pub fn endpoints(
        a: &str,
        b: &str,
    ) -> (String, String) {
        if a <= b { (a.to_string(), b.to_string()) } else { (b.to_string(), a.to_string()) }
    }

    pub fn new(
        a: &str,
        b: &str,
    ) -> Self {
        let (from, to) = Self::endpoints(a, b);
        Self {
            id: format!("{}-{}", from, to),
            from,
            to,
            value: 0,
            volume: 0.0,
            token_volumes: BTreeMap::new(),
        }
    }
}

/// Name and lowercase tags supplied by the wallet-tagging collaborator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressTags {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl AddressTags {
    pub fn has_tag(
        &self,
        tag: &str,
    ) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeHighlight {
    pub border: String,
    pub background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub group: Category,
    pub balance: f64,
    /// `None` when no price is known.
    #[serde(rename = "balanceUSD")]
    pub balance_usd: Option<f64>,
    pub transaction_count: u64,
    pub net_flow: f64,
    pub fixed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Visual size.
    pub value: f64,
    pub mass: f64,
    pub border_width: f64,
    pub smart_money: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<NodeHighlight>,
}

impl GraphNode {
    pub fn is_root(&self) -> bool {
        self.group == Category::Root
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphData {
    pub fn node(
        &self,
        id: &str,
    ) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge_between(
        &self,
        a: &str,
        b: &str,
    ) -> Option<&GraphEdge> {
        let (from, to) = GraphEdge::endpoints(a, b);
        self.edges.iter().find(|e| e.from == from && e.to == to)
    }
}
