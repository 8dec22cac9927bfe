use serde::Serialize;

use super::category::Category;

/// An address with a curated identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnownEntity {
    pub name: &'static str,
    pub category: Category,
}

impl KnownEntity {
    const fn new(
        name: &'static str,
        category: Category,
    ) -> Self {
        Self { name, category }
    }

    pub fn lookup(address: &str) -> Option<KnownEntity> {
        use Category::*;

        let entity = match address {
            // ======================= CEX wallets =======================
            "FpwQQhQQoEaVu3WU2qZMfF1hx48YyfwsLoRgXG83E99Q" => Self::new("Coinbase HW 1", Exchange),
            "GJRs4FwHtemZ5ZE9x3FNvJ8TMwitKTh21yxdRPqn7npE" => Self::new("Coinbase HW 2", Exchange),
            "D89hHJT5Aqyx1trP6EnGY9jJUB3whgnq3aUvvCqedvzf" => Self::new("Coinbase HW 3", Exchange),
            "DPqsobysNf5iA9w7zrQM8HLzCKZEDMkZsWbiidsAt1xo" => Self::new("Coinbase HW 4", Exchange),
            "H8sMJSCQxfKiFTCfDR3DUMLPwcRbM61LGFJ8N4dK3WjS" => Self::new("Coinbase 1", Exchange),
            "2AQdpHJ2JpcEgPiATUXjQxA8QmafFegfQwSLWSprPicm" => Self::new("Coinbase 2", Exchange),
            "3vxheE5C46XzK4XftziRhwAf8QAfipD7HXXWj25mgkom" => Self::new("Coinbase Prime", Exchange),
            "is6MTRHEgyFLNTfYcuV4QBWLjrZBfmhVNYR6ccgr8KV" => Self::new("OKX HW 1", Exchange),
            "C68a6RCGLiPskbPYtAcsCjhG8tfTWYcoB4JjCrXFdqyo" => Self::new("OKX HW 2", Exchange),
            "5VCwKtCXgCJ6kit5FybXjvriW3xELsFDhYrPSqtJNmcD" => Self::new("OKX", Exchange),
            "ASTyfSima4LLAdDgoFGkgqoKowG1LZFDr9fAQrg7iaJZ" => Self::new("MEXC 1", Exchange),
            "5PAhQiYdLBd6SVdjzBQDxUAEFyDdF5ExNPQfcscnPRj5" => Self::new("MEXC 2", Exchange),
            "FWznbcNXWQuHTawe9RxvQ2LdCENssh12dsznf4RiouN5" => Self::new("Kraken", Exchange),
            "2ojv9BAiHUrvsm9gxDe7fJSzbNZSJcxZvf8dqmWGHG8S" => Self::new("Binance 1", Exchange),
            "5tzFkiKscXHK5ZXCGbXZxdw7gTjjD1mBwuoFbhUvuAi9" => Self::new("Binance 2", Exchange),
            "9WzDXwBbmkg8ZTbNMqUxvQRAyrZzDsGYdLVL9zYtAWWM" => Self::new("Binance 3", Exchange),
            "53unSgGWqEWANcPYRF35B2Bgf8BkszUtcccKiXwGGLyr" => Self::new("Binance US HW", Exchange),
            "GBrURzmtWujJRTA3Bkvo7ZgWuZYLMMwPCwre7BejJXnK" => Self::new("Binance CW", Exchange),
            "A77HErqtfN1hLLpvZ9pCtu66FEtM8BveoaKbbMoZ4RiR" => Self::new("Bitget", Exchange),
            "u6PJ8DtQuPFnfmwHbGFULQ4u4EgjDiyYKjVEsynXq2w" => Self::new("Gate.io", Exchange),
            "AC5RDfQFmDS1deWZos921JfqscXdByf8BKHs5ACWjtW2" => Self::new("Bybit HW", Exchange),
            "FxteHmLwG9nk1eL4pjNve3Eub2goGkkz6g6TbvdmW46a" => Self::new("Bitfinex HW", Exchange),
            "BmFdpraQhkiDQE6SnfG5omcA1VwzqfXrwtNYBwWTymy6" => Self::new("KuCoin", Exchange),
            "G9X7F4JzLzbSGMCndiBdWNi5YzZZakmtkdwq7xS3Q3FE" => Self::new("Stake.com", Exchange),
            "Biw4eeaiYYYq6xSqEd7GzdwsrrndxA8mqdxfAtG3PTUU" => Self::new("Revolut", Exchange),
            "HBxZShcE86UMmF93KUM8eWJKqeEXi5cqWCLYLMMhqMYm" => Self::new("Bitstamp", Exchange),

            // ======================= Platforms / DEX =======================
            "6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P" => Self::new("Pump.fun", Platform),
            "pAMMBay6oceH9fJKBRHGP5D4bD4sWpmSwMn52FMfXEA" => Self::new("PumpSwap AMM", Platform),
            "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4" => Self::new("Jupiter Aggregator", Platform),
            "675kPX9MHTjS2zt1qfr1NYHuzeLXfQM9H24wFSUt1Mp8" => Self::new("Raydium AMM", Platform),
            "CAMMCzo5YL8w4VFF8KVHrK22GGUsp5VTaW7grrKgrWqK" => Self::new("Raydium CLMM", Platform),
            "whirLbMiicVdio4qvUfM5KAg6Ct8VwpYzGff3uctyCc" => Self::new("Orca Whirlpools", Platform),
            "LBUZKhRxPF3XUpBCjp4YzTKgLccjZhTSDM9YuVaPwxo" => Self::new("Meteora DLMM", Platform),

            // ======================= Bridges =======================
            "2snHHreXbpJ7UwZxPe37gnUNf7Wx7wv6UKDSR2JckKuS" => Self::new("deBridge Vault", Bridge),
            "worm2ZoG2kUd4vFXhvjh93UUH596ayRfgQ2MgjNMTth" => Self::new("Wormhole Core", Bridge),
            "wormDTUJ6AWPNvk59vGQbDvGJmqbDTdgWgAqcLBCgUb" => Self::new("Wormhole Token Bridge", Bridge),

            // ======================= DAO / NFT =======================
            "GovER5Lthms3bLBqWub97yVrMmEogzX7xNjdXpPPCVZw" => Self::new("SPL Governance", Dao),
            "M2mx93ekt1fmXSVkTrUL9xVFHkmME8HTUi5Cyc5aF7K" => Self::new("Magic Eden", Nft),
            "TSWAPaqyCSx2KABk68Shruf4rp7CxcNi8hAsbdwmHbN" => Self::new("Tensor Swap", Nft),
            _ => return None,
        };

        Some(entity)
    }
}
