pub mod category;
pub mod graph;
pub mod known;
pub mod transaction;

pub use category::Category;
pub use category::CategoryStyle;
pub use category::style_table;
pub use graph::AddressStat;
pub use graph::AddressTags;
pub use graph::GraphData;
pub use graph::GraphEdge;
pub use graph::GraphNode;
pub use graph::NodeHighlight;
pub use graph::TokenVolume;
pub use known::KnownEntity;
pub use transaction::FlattenedTransaction;
pub use transaction::NormalizedTransfer;
pub use transaction::Transaction;
pub use transaction::TransactionDirection;
pub use transaction::TransactionRecord;
