/// ======================= Graph defaults =======================
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Net inflow (USD) above which a non-root node is flagged as smart money.
pub const SMART_MONEY_THRESHOLD_USD: f64 = 50_000.0;

/// SOL price assumed when only a native balance is known. Only ever used for
/// visual weight, never reported back as a USD value.
pub const ESTIMATED_SOL_PRICE_USD: f64 = 150.0;

pub const ROOT_LABEL_PREFIX: &str = "YOU: ";
pub const LABEL_PREFIX_LEN: usize = 4;
pub const LABEL_SUFFIX_LEN: usize = 4;

pub const WRAPPED_SOL_MINT: &str = "So11111111111111111111111111111111111111112";
pub const PRICE_CACHE_TTL_SECS: u64 = 60;
pub const LAMPORTS_PER_SOL: f64 = 1_000_000_000.0;

/// ======================= Smart money styling =======================
pub const SMART_MONEY_BORDER_COLOR: &str = "#facc15";
pub const SMART_MONEY_BORDER_WIDTH: f64 = 4.0;
pub const DEFAULT_BORDER_WIDTH: f64 = 1.0;
pub const ROOT_BORDER_WIDTH: f64 = 3.0;

/// ======================= Balance tiers (USD) =======================
pub const WHALE_MIN_USD: f64 = 100_000.0;
pub const SHARK_MIN_USD: f64 = 50_000.0;
pub const DOLPHIN_MIN_USD: f64 = 10_000.0;
pub const FISH_MIN_USD: f64 = 1_000.0;
/// Native units above which an otherwise small wallet still counts as fish.
pub const FISH_MIN_SOL: f64 = 100.0;

/// ======================= Classifier keyword lists =======================
pub const PLATFORM_NAME_FRAGMENTS: &[&str] = &["pump.fun", "pumpfun", "jupiter", "raydium", "orca", "meteora"];

pub const EXCHANGE_ADDRESS_KEYWORDS: &[&str] = &["binance", "coinbase", "kraken", "bybit", "kucoin"];

pub const PLATFORM_ADDRESS_KEYWORDS: &[&str] = &["pump", "jupiter", "raydium", "whirl", "meteora"];

pub const BRIDGE_ADDRESS_KEYWORDS: &[&str] = &["bridge", "wormhole", "worm"];
