use serde::Deserialize;
use serde::Serialize;

use crate::utils::lamports_to_sol;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeTransfer {
    #[serde(alias = "from")]
    pub from_user_account: Option<String>,
    #[serde(alias = "to")]
    pub to_user_account: Option<String>,
    /// Lamports.
    #[serde(default)]
    pub amount: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenTransfer {
    #[serde(alias = "from")]
    pub from_user_account: Option<String>,
    #[serde(alias = "to")]
    pub to_user_account: Option<String>,
    pub mint: String,
    /// UI amount, already scaled by the mint decimals.
    #[serde(default)]
    pub token_amount: f64,
    #[serde(default)]
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructionRef {
    pub program_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftEvent {
    /// Lamports.
    #[serde(default)]
    pub amount: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionEvents {
    #[serde(default)]
    pub nft: Option<NftEvent>,
}

/// Enhanced transaction as returned by the indexing provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub signature: String,
    #[serde(default, alias = "timestamp")]
    pub block_time: Option<i64>,
    pub fee_payer: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub native_transfers: Option<Vec<NativeTransfer>>,
    #[serde(default)]
    pub token_transfers: Option<Vec<TokenTransfer>>,
    #[serde(default)]
    pub instructions: Option<Vec<InstructionRef>>,
    #[serde(default)]
    pub events: Option<TransactionEvents>,
    #[serde(default, rename = "valueUSD")]
    pub value_usd: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionDirection {
    Received,
    Sent,
    ProgramInteraction,
}

/// Transaction pre-shaped relative to one wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedTransaction {
    pub signature: String,
    #[serde(default)]
    pub block_time: Option<i64>,
    #[serde(rename = "type")]
    pub direction: TransactionDirection,
    /// Signed SOL amount from the wallet's point of view.
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub mint: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub by: Option<String>,
    #[serde(default)]
    pub interacted_with: Vec<String>,
    #[serde(default, rename = "valueUSD")]
    pub value_usd: f64,
    #[serde(default)]
    pub token_amount: Option<f64>,
    #[serde(default)]
    pub token_symbol: Option<String>,
    #[serde(default)]
    pub token_mint: Option<String>,
}

/// Either record shape. Flattened records are tried first since their `type`
/// only accepts a direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionRecord {
    Flattened(FlattenedTransaction),
    Raw(Transaction),
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenLeg {
    pub mint: String,
    pub symbol: Option<String>,
    pub amount: f64,
}

/// The single shape the aggregator folds over.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTransfer {
    pub signature: String,
    pub block_time: Option<i64>,
    pub direction: Option<TransactionDirection>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub value_usd: f64,
    pub token: Option<TokenLeg>,
}

fn non_empty(address: Option<&String>) -> Option<String> {
    address.filter(|a| !a.is_empty()).cloned()
}

impl TransactionRecord {
    pub fn normalize(&self) -> NormalizedTransfer {
        match self {
            TransactionRecord::Flattened(tx) => tx.normalize(),
            TransactionRecord::Raw(tx) => tx.normalize(),
        }
    }
}

impl FlattenedTransaction {
    pub fn normalize(&self) -> NormalizedTransfer {
        let token = self.token_mint.as_ref().filter(|m| !m.is_empty()).map(|mint| TokenLeg {
            mint: mint.clone(),
            symbol: self.token_symbol.clone(),
            amount: self.token_amount.unwrap_or(0.0),
        });

        NormalizedTransfer {
            signature: self.signature.clone(),
            block_time: self.block_time,
            direction: Some(self.direction),
            from: non_empty(self.from.as_ref()).or_else(|| non_empty(self.by.as_ref())),
            to: non_empty(self.to.as_ref()),
            value_usd: finite_or_zero(self.value_usd),
            token,
        }
    }
}

impl Transaction {
    fn first_native(&self) -> Option<&NativeTransfer> {
        self.native_transfers.as_ref().and_then(|t| t.first())
    }

    fn first_token(&self) -> Option<&TokenTransfer> {
        self.token_transfers.as_ref().and_then(|t| t.first())
    }

    pub fn normalize(&self) -> NormalizedTransfer {
        let native = self.first_native();
        let token_transfer = self.first_token();

        let from = native
            .and_then(|t| non_empty(t.from_user_account.as_ref()))
            .or_else(|| token_transfer.and_then(|t| non_empty(t.from_user_account.as_ref())))
            .or_else(|| non_empty(Some(&self.fee_payer)));

        let to = native
            .and_then(|t| non_empty(t.to_user_account.as_ref()))
            .or_else(|| token_transfer.and_then(|t| non_empty(t.to_user_account.as_ref())))
            .or_else(|| {
                self.instructions
                    .as_ref()
                    .and_then(|ix| ix.first())
                    .and_then(|ix| non_empty(Some(&ix.program_id)))
            });

        let value_usd = match self.value_usd {
            Some(value) => finite_or_zero(value),
            None => self
                .events
                .as_ref()
                .and_then(|e| e.nft.as_ref())
                .map(|nft| lamports_to_sol(nft.amount))
                .unwrap_or(0.0),
        };

        let token = token_transfer.map(|t| TokenLeg {
            mint: t.mint.clone(),
            symbol: t.symbol.clone(),
            amount: t.token_amount,
        });

        NormalizedTransfer {
            signature: self.signature.clone(),
            block_time: self.block_time,
            direction: None,
            from,
            to,
            value_usd,
            token,
        }
    }
}

impl From<FlattenedTransaction> for TransactionRecord {
    fn from(tx: FlattenedTransaction) -> Self {
        TransactionRecord::Flattened(tx)
    }
}

impl From<Transaction> for TransactionRecord {
    fn from(tx: Transaction) -> Self {
        TransactionRecord::Raw(tx)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
