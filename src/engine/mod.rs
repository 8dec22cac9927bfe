pub mod aggregator;
pub mod assembler;
pub mod classifier;
pub mod filter;
pub mod layout;
pub mod visibility;

use std::collections::HashSet;

use tracing::debug;

pub use aggregator::Aggregation;
pub use aggregator::aggregate;
pub use aggregator::aggregate_normalized;
pub use assembler::GraphContext;
pub use assembler::assemble;
pub use classifier::AddressProfile;
pub use classifier::ClassificationStrategy;
pub use classifier::Classifier;
pub use filter::TransactionFilter;
pub use layout::LayoutMetrics;
pub use visibility::select_visible;

use crate::model::GraphData;
use crate::model::NormalizedTransfer;
use crate::model::TransactionRecord;

/// One invocation of the whole pipeline. Nothing here outlives the call.
#[derive(Debug, Clone)]
pub struct GraphRequest {
    pub context: GraphContext,
    pub max_depth: usize,
    pub expanded: HashSet<String>,
    pub filter: TransactionFilter,
}

impl GraphRequest {
    pub fn new(context: GraphContext) -> Self {
        let max_depth = context.config.max_depth;
        Self {
            context,
            max_depth,
            expanded: HashSet::new(),
            filter: TransactionFilter::default(),
        }
    }

    pub fn with_max_depth(
        mut self,
        max_depth: usize,
    ) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn expand(
        mut self,
        address: impl Into<String>,
    ) -> Self {
        self.expanded.insert(address.into());
        self
    }

    pub fn with_filter(
        mut self,
        filter: TransactionFilter,
    ) -> Self {
        self.filter = filter;
        self
    }
}

/// filter -> aggregate -> select visible -> assemble.
pub fn build_graph(
    records: &[TransactionRecord],
    request: &GraphRequest,
    classifier: &Classifier,
) -> GraphData {
    let normalized: Vec<NormalizedTransfer> = records
        .iter()
        .map(TransactionRecord::normalize)
        .filter(|transfer| request.filter.matches(transfer))
        .collect();

    if normalized.len() != records.len() {
        debug!("build_graph::filtered::{}::of::{}", records.len() - normalized.len(), records.len());
    }

    let aggregation = aggregate_normalized(&normalized);
    let visible = select_visible(&aggregation, &request.context.root, request.max_depth, &request.expanded);
    assemble(&aggregation, &visible, &request.context, classifier)
}
