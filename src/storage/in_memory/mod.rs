pub mod price;

pub use price::PriceCache;
pub use price::PriceSource;
pub use price::StaticPriceSource;
