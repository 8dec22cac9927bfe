use std::collections::HashMap;
use std::collections::HashSet;

use tracing::debug;

use super::aggregator::Aggregation;
use super::classifier::AddressProfile;
use super::classifier::Classifier;
use super::layout::LayoutMetrics;
use crate::config::GraphConfig;
use crate::constants::DEFAULT_BORDER_WIDTH;
use crate::constants::ROOT_BORDER_WIDTH;
use crate::constants::SMART_MONEY_BORDER_COLOR;
use crate::constants::SMART_MONEY_BORDER_WIDTH;
use crate::model::AddressStat;
use crate::model::AddressTags;
use crate::model::Category;
use crate::model::GraphData;
use crate::model::GraphNode;
use crate::model::KnownEntity;
use crate::model::NodeHighlight;
use crate::utils::shorten_address;

/// Caller supplied data that is not derived from the transactions.
#[derive(Debug, Clone, Default)]
pub struct GraphContext {
    pub root: String,
    /// Native token price in USD, `None` when unknown.
    pub sol_price_usd: Option<f64>,
    /// The root wallet's own native balance.
    pub root_balance: f64,
    /// Native balances for other addresses; these win over `root_balance`.
    pub balances: HashMap<String, f64>,
    /// Balance of the focused token per address.
    pub token_balances: HashMap<String, f64>,
    pub tags: HashMap<String, AddressTags>,
    pub config: GraphConfig,
}

impl GraphContext {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn balance_of(
        &self,
        address: &str,
    ) -> f64 {
        match self.balances.get(address) {
            Some(balance) => *balance,
            None if address == self.root => self.root_balance,
            None => 0.0,
        }
    }

    pub fn label_for(
        &self,
        address: &str,
    ) -> String {
        let short = shorten_address(address, self.config.label_prefix_len, self.config.label_suffix_len);
        if address == self.root {
            return format!("{}{}", self.config.root_label_prefix, short);
        }

        self.tags
            .get(address)
            .and_then(|t| t.name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
            .or_else(|| KnownEntity::lookup(address).map(|entity| entity.name.to_string()))
            .unwrap_or(short)
    }
}

fn build_node(
    address: &str,
    stat: &AddressStat,
    ctx: &GraphContext,
    classifier: &Classifier,
    metrics: &LayoutMetrics,
) -> GraphNode {
    let is_root = address == ctx.root;
    let balance = ctx.balance_of(address);
    let balance_usd = ctx.sol_price_usd.map(|price| balance * price);
    let token_balance = ctx.token_balances.get(address).copied();

    let group = if is_root {
        Category::Root
    } else {
        classifier.classify(&AddressProfile::new(address, balance, balance_usd, ctx.tags.get(address)))
    };

    let smart_money = !is_root && stat.net_flow > ctx.config.smart_money_threshold_usd;
    let color = smart_money.then(|| NodeHighlight {
        border: SMART_MONEY_BORDER_COLOR.to_string(),
        background: group.style().background.to_string(),
    });
    let border_width = if smart_money {
        SMART_MONEY_BORDER_WIDTH
    } else if is_root {
        ROOT_BORDER_WIDTH
    } else {
        DEFAULT_BORDER_WIDTH
    };

    GraphNode {
        id: address.to_string(),
        label: ctx.label_for(address),
        group,
        balance,
        balance_usd,
        transaction_count: stat.transaction_count,
        net_flow: stat.net_flow,
        fixed: is_root,
        x: is_root.then_some(0.0),
        y: is_root.then_some(0.0),
        value: metrics.size(group, balance, balance_usd, token_balance),
        mass: metrics.mass(group, balance, balance_usd, token_balance),
        border_width,
        smart_money,
        color,
    }
}

/// Turn the visible part of an aggregation into renderer-ready nodes and
/// edges. The root node is always emitted, pinned at the origin.
pub fn assemble(
    aggregation: &Aggregation,
    visible: &HashSet<String>,
    ctx: &GraphContext,
    classifier: &Classifier,
) -> GraphData {
    let metrics = LayoutMetrics::new(ctx.config.estimated_sol_price_usd);

    let mut nodes: Vec<GraphNode> = aggregation
        .addresses()
        .filter(|address| visible.contains(*address))
        .filter_map(|address| {
            aggregation
                .stat(address)
                .map(|stat| build_node(address, stat, ctx, classifier, &metrics))
        })
        .collect();

    if !nodes.iter().any(|node| node.is_root()) {
        let stat = aggregation.stat(&ctx.root).cloned().unwrap_or_default();
        let root = build_node(&ctx.root, &stat, ctx, classifier, &metrics);
        nodes.insert(0, root);
    }

    let node_ids: HashSet<&str> = nodes.iter().map(|node| node.id.as_str()).collect();
    let edges = aggregation
        .edges()
        .filter(|edge| node_ids.contains(edge.from.as_str()) && node_ids.contains(edge.to.as_str()))
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        "assemble::root::{}::nodes::{}::edges::{}::smart_money::{}",
        ctx.root,
        nodes.len(),
        edges.len(),
        nodes.iter().filter(|n| n.smart_money).count()
    );

    GraphData { nodes, edges }
}
