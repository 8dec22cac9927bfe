pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod model;
pub mod storage;
pub mod tracing;
pub mod utils;

pub use engine::GraphContext;
pub use engine::GraphRequest;
pub use engine::build_graph;
pub use error::Result;
pub use model::GraphData;
