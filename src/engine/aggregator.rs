use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::collections::HashMap;

use petgraph::graph::EdgeIndex;
use petgraph::graph::NodeIndex;
use petgraph::graph::UnGraph;
use tracing::debug;

use crate::model::AddressStat;
use crate::model::GraphEdge;
use crate::model::NormalizedTransfer;
use crate::model::TokenVolume;
use crate::model::TransactionRecord;

/// Per-address stats plus the undirected interaction graph folded out of a
/// transaction list. Nodes keep first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    graph:        UnGraph<String, GraphEdge>,
    node_indices: HashMap<String, NodeIndex>,
    edge_indices: HashMap<(String, String), EdgeIndex>,
    stats:        HashMap<String, AddressStat>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_address(
        &mut self,
        address: &str,
    ) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(address) {
            return idx;
        }

        let idx = self.graph.add_node(address.to_string());
        self.node_indices.insert(address.to_string(), idx);
        self.stats.insert(address.to_string(), AddressStat::default());

        idx
    }

    fn touch(
        &mut self,
        address: &str,
        value: f64,
    ) {
        self.add_address(address);
        if let Some(stat) = self.stats.get_mut(address) {
            stat.transaction_count += 1;
            if value > 0.0 {
                stat.interaction_volume += value.abs();
            }
        }
    }

    fn shift_flow(
        &mut self,
        address: &str,
        delta: f64,
    ) {
        if let Some(stat) = self.stats.get_mut(address) {
            stat.net_flow += delta;
        }
    }

    fn upsert_edge(
        &mut self,
        a: &str,
        b: &str,
    ) -> &mut GraphEdge {
        let key = GraphEdge::endpoints(a, b);
        let edge_idx = match self.edge_indices.get(&key) {
            Some(&idx) => idx,
            None => {
                let a_idx = self.add_address(a);
                let b_idx = self.add_address(b);
                let idx = self.graph.add_edge(a_idx, b_idx, GraphEdge::new(a, b));
                self.edge_indices.insert(key, idx);
                idx
            },
        };
        &mut self.graph[edge_idx]
    }

    /// Fold one transfer into the running totals.
    pub fn fold(
        &mut self,
        transfer: &NormalizedTransfer,
    ) {
        let value = transfer.value_usd;
        let from = transfer.from.as_deref();
        let to = transfer.to.as_deref();

        if let Some(from) = from {
            self.touch(from, value);
        }
        if let Some(to) = to.filter(|to| Some(*to) != from) {
            self.touch(to, value);
        }

        if value > 0.0 && from != to {
            if let Some(from) = from {
                self.shift_flow(from, -value);
            }
            if let Some(to) = to {
                self.shift_flow(to, value);
            }
        }

        let (Some(from), Some(to)) = (from, to) else {
            return;
        };
        if from == to {
            return;
        }

        let edge = self.upsert_edge(from, to);
        edge.value += 1;
        edge.volume += value.abs();
        if let Some(token) = &transfer.token {
            let entry = edge
                .token_volumes
                .entry(token.mint.clone())
                .or_insert_with(TokenVolume::default);
            entry.amount += token.amount.abs();
            if entry.symbol.is_none() {
                entry.symbol = token.symbol.clone();
            }
        }
    }

    pub fn contains(
        &self,
        address: &str,
    ) -> bool {
        self.node_indices.contains_key(address)
    }

    pub fn stat(
        &self,
        address: &str,
    ) -> Option<&AddressStat> {
        self.stats.get(address)
    }

    pub fn stats(&self) -> &HashMap<String, AddressStat> {
        &self.stats
    }

    /// Addresses in the order they were first referenced.
    pub fn addresses(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().map(move |idx| self.graph[idx].as_str())
    }

    pub fn neighbors(
        &self,
        address: &str,
    ) -> Vec<&str> {
        match self.node_indices.get(address) {
            Some(&idx) => self.graph.neighbors(idx).map(|n| self.graph[n].as_str()).collect(),
            None => Vec::new(),
        }
    }

    /// Sorted adjacency view, mostly for inspection and comparisons.
    pub fn adjacency_list(&self) -> BTreeMap<String, BTreeSet<String>> {
        self.addresses()
            .map(|address| {
                let neighbors = self.neighbors(address).into_iter().map(str::to_string).collect();
                (address.to_string(), neighbors)
            })
            .collect()
    }

    /// Edges in creation order.
    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.graph.edge_weights()
    }

    pub fn edge(
        &self,
        a: &str,
        b: &str,
    ) -> Option<&GraphEdge> {
        self.edge_indices.get(&GraphEdge::endpoints(a, b)).map(|&idx| &self.graph[idx])
    }

    pub fn address_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl PartialEq for Aggregation {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.stats == other.stats
            && self.addresses().eq(other.addresses())
            && self.adjacency_list() == other.adjacency_list()
            && self.edges().eq(other.edges())
    }
}

pub fn aggregate_normalized(transfers: &[NormalizedTransfer]) -> Aggregation {
    let mut aggregation = Aggregation::new();
    for transfer in transfers {
        aggregation.fold(transfer);
    }

    debug!(
        "aggregate::transactions::{}::addresses::{}::edges::{}",
        transfers.len(),
        aggregation.address_count(),
        aggregation.edge_count()
    );

    aggregation
}

/// Single pass over the list; records missing a counterparty still count
/// toward stats but never produce an edge.
pub fn aggregate(records: &[TransactionRecord]) -> Aggregation {
    let transfers: Vec<NormalizedTransfer> = records.iter().map(TransactionRecord::normalize).collect();
    aggregate_normalized(&transfers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::transaction::TokenLeg;

    fn transfer(
        from: Option<&str>,
        to: Option<&str>,
        value_usd: f64,
    ) -> NormalizedTransfer {
        NormalizedTransfer {
            signature: format!("{:?}-{:?}-{}", from, to, value_usd),
            block_time: None,
            direction: None,
            from: from.map(str::to_string),
            to: to.map(str::to_string),
            value_usd,
            token: None,
        }
    }

    #[test]
    fn round_trip_between_two_wallets() {
        let aggregation = aggregate_normalized(&[
            transfer(Some("R"), Some("X"), 100.0),
            transfer(Some("X"), Some("R"), 40.0),
        ]);

        let edge = aggregation.edge("X", "R").unwrap();
        assert_eq!(edge.value, 2);
        assert_eq!(edge.volume, 140.0);
        assert_eq!(aggregation.stat("R").unwrap().net_flow, -60.0);
        assert_eq!(aggregation.stat("X").unwrap().net_flow, 60.0);
        assert_eq!(aggregation.stat("R").unwrap().interaction_volume, 140.0);
        assert_eq!(aggregation.edge_count(), 1);
    }

    #[test]
    fn missing_counterparty_counts_without_edge() {
        let aggregation = aggregate_normalized(&[transfer(Some("A"), None, 25.0)]);
        let stat = aggregation.stat("A").unwrap();
        assert_eq!(stat.transaction_count, 1);
        assert_eq!(stat.net_flow, -25.0);
        assert_eq!(aggregation.edge_count(), 0);
        assert!(aggregation.neighbors("A").is_empty());
    }

    #[test]
    fn self_transfer_never_loops() {
        let aggregation = aggregate_normalized(&[transfer(Some("X"), Some("X"), 10.0)]);
        let stat = aggregation.stat("X").unwrap();
        assert_eq!(stat.transaction_count, 1);
        assert_eq!(stat.net_flow, 0.0);
        assert_eq!(aggregation.edge_count(), 0);
    }

    #[test]
    fn self_transfer_keeps_existing_net_flow() {
        let aggregation = aggregate_normalized(&[
            transfer(Some("A"), Some("X"), 12.34),
            transfer(Some("X"), Some("X"), 1e17),
        ]);
        let stat = aggregation.stat("X").unwrap();
        assert_eq!(stat.net_flow, 12.34);
        assert_eq!(stat.transaction_count, 2);
    }

    #[test]
    fn dashed_addresses_do_not_share_an_edge() {
        let aggregation = aggregate_normalized(&[
            transfer(Some("A-B"), Some("C"), 1.0),
            transfer(Some("A"), Some("B-C"), 1.0),
        ]);
        assert_eq!(aggregation.edge_count(), 2);
        assert_eq!(aggregation.neighbors("A"), vec!["B-C"]);
        assert_eq!(aggregation.edge("C", "A-B").unwrap().value, 1);
        assert_eq!(aggregation.edge("B-C", "A").unwrap().value, 1);
    }

    #[test]
    fn zero_value_skips_volume_but_counts() {
        let aggregation = aggregate_normalized(&[transfer(Some("A"), Some("B"), 0.0)]);
        assert_eq!(aggregation.stat("B").unwrap().transaction_count, 1);
        assert_eq!(aggregation.stat("B").unwrap().interaction_volume, 0.0);
        assert_eq!(aggregation.edge("A", "B").unwrap().value, 1);
    }

    #[test]
    fn token_volumes_accumulate_per_mint() {
        let mut first = transfer(Some("A"), Some("B"), 5.0);
        first.token = Some(TokenLeg { mint: "MintA".to_string(), symbol: Some("AAA".to_string()), amount: 3.0 });
        let mut second = transfer(Some("B"), Some("A"), 0.0);
        second.token = Some(TokenLeg { mint: "MintA".to_string(), symbol: None, amount: -2.0 });

        let aggregation = aggregate_normalized(&[first, second]);
        let volume = &aggregation.edge("A", "B").unwrap().token_volumes["MintA"];
        assert_eq!(volume.amount, 5.0);
        assert_eq!(volume.symbol.as_deref(), Some("AAA"));
    }

    #[test]
    fn addresses_keep_first_seen_order() {
        let aggregation = aggregate_normalized(&[
            transfer(Some("C"), Some("A"), 1.0),
            transfer(Some("B"), Some("C"), 1.0),
        ]);
        assert_eq!(aggregation.addresses().collect::<Vec<_>>(), vec!["C", "A", "B"]);
    }
}
