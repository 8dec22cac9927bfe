// ─────────────────────────────────────────────────────────────────────────────
//  solviz-graph: builds the counterparty graph for one wallet from exported
//  transaction, balance and tag files, and prints it as renderer-ready JSON.
// ─────────────────────────────────────────────────────────────────────────────
use std::collections::HashMap;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use serde::de::DeserializeOwned;
use solviz::GraphContext;
use solviz::GraphRequest;
use solviz::build_graph;
use solviz::config::Config;
use solviz::config::load_config;
use solviz::constants::PRICE_CACHE_TTL_SECS;
use solviz::constants::WRAPPED_SOL_MINT;
use solviz::engine::Classifier;
use solviz::engine::TransactionFilter;
use solviz::error::ConfigError;
use solviz::error::InputError;
use solviz::error::Result;
use solviz::model::AddressTags;
use solviz::model::TransactionRecord;
use solviz::model::style_table;
use solviz::storage::in_memory::PriceCache;
use solviz::storage::in_memory::StaticPriceSource;
use solviz::tracing::setup_tracing;
use solviz::utils::validate_address;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "solviz-graph", about = "Build a wallet counterparty graph from exported transactions")]
struct Args {
    /// JSON array of raw or flattened transactions
    #[arg(long, required_unless_present = "styles")]
    transactions: Option<PathBuf>,

    /// Wallet under investigation
    #[arg(long, required_unless_present = "styles")]
    root: Option<String>,

    /// Breadth-first depth, defaults to graph.max_depth from the config
    #[arg(long)]
    depth: Option<usize>,

    /// Address whose neighbours should be shown regardless of depth; repeatable
    #[arg(long = "expand")]
    expand: Vec<String>,

    /// JSON object of address -> native balance
    #[arg(long)]
    balances: Option<PathBuf>,

    /// Native balance of the root wallet
    #[arg(long, default_value_t = 0.0)]
    root_balance: f64,

    /// JSON object of address -> focused token balance
    #[arg(long)]
    token_balances: Option<PathBuf>,

    /// JSON object of address -> {"name": .., "tags": [..]}
    #[arg(long)]
    tags: Option<PathBuf>,

    /// Native token price in USD; omit when unknown
    #[arg(long)]
    price: Option<f64>,

    /// JSON object of mint -> USD quote, consulted when --price is absent
    #[arg(long)]
    prices: Option<PathBuf>,

    #[arg(long, default_value = "Config.toml")]
    config: PathBuf,

    /// Write the graph here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Inclusive lower block-time bound (unix seconds)
    #[arg(long)]
    from: Option<i64>,

    /// Inclusive upper block-time bound (unix seconds)
    #[arg(long)]
    to: Option<i64>,

    #[arg(long)]
    min_usd: Option<f64>,

    /// Keep only transfers of this mint
    #[arg(long)]
    mint: Option<String>,

    /// Print the group -> style table and exit
    #[arg(long)]
    styles: bool,
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> std::result::Result<T, InputError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|source| InputError::ReadError {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InputError::ParseError {
        path: path.display().to_string(),
        source,
    })
}

async fn read_optional_json<T: DeserializeOwned + Default>(path: Option<&Path>) -> std::result::Result<T, InputError> {
    match path {
        Some(path) => read_json(path).await,
        None => Ok(T::default()),
    }
}

fn resolve_config(path: &Path) -> Result<Config> {
    match load_config(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::OpenFileError { .. }) => Ok(Config::default()),
        Err(e) => Err(e.into()),
    }
}

async fn emit(
    json: String,
    output: Option<&Path>,
) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, json).await?;
            info!("solviz_graph::written::{}", path.display());
        },
        None => println!("{}", json),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = resolve_config(&args.config)?;
    let _guards = setup_tracing("solviz_graph", &config.logging)?;

    if args.styles {
        return emit(serde_json::to_string_pretty(&style_table())?, args.output.as_deref()).await;
    }

    let (Some(root), Some(transactions_path)) = (args.root.as_deref(), args.transactions.as_deref()) else {
        return Err(solviz::err_with_loc!("--root and --transactions are required"));
    };
    validate_address(root)?;
    for address in &args.expand {
        validate_address(address)?;
    }

    let records: Vec<TransactionRecord> = read_json(transactions_path).await?;
    let balances: HashMap<String, f64> = read_optional_json(args.balances.as_deref()).await?;
    let token_balances: HashMap<String, f64> = read_optional_json(args.token_balances.as_deref()).await?;
    let tags: HashMap<String, AddressTags> = read_optional_json(args.tags.as_deref()).await?;

    let quotes: HashMap<String, f64> = read_optional_json(args.prices.as_deref()).await?;
    let price_cache = PriceCache::new(StaticPriceSource::new(quotes), Duration::from_secs(PRICE_CACHE_TTL_SECS));
    let sol_price_usd = args.price.or_else(|| price_cache.get(WRAPPED_SOL_MINT));

    let classifier = Classifier::with_estimated_price(config.graph.estimated_sol_price_usd);
    let context = GraphContext {
        root: root.to_string(),
        sol_price_usd,
        root_balance: args.root_balance,
        balances,
        token_balances,
        tags,
        config: config.graph.clone(),
    };

    let filter = TransactionFilter {
        from_time: args.from,
        to_time: args.to,
        min_value_usd: args.min_usd,
        mint: args.mint.clone(),
        directions: None,
    };

    let mut request = GraphRequest::new(context).with_filter(filter);
    if let Some(depth) = args.depth {
        request = request.with_max_depth(depth);
    }
    for address in &args.expand {
        request = request.expand(address.clone());
    }

    let graph = build_graph(&records, &request, &classifier);
    info!(
        "solviz_graph::built::transactions::{}::nodes::{}::edges::{}",
        records.len(),
        graph.nodes.len(),
        graph.edges.len()
    );

    emit(serde_json::to_string_pretty(&graph)?, args.output.as_deref()).await
}
