use std::str::FromStr;

use solana_pubkey::Pubkey;

use crate::constants::LAMPORTS_PER_SOL;
use crate::error::InputError;

pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

/// `AbCd...WxYz` form used for node labels. Addresses too short to shorten are
/// returned untouched.
pub fn shorten_address(
    address: &str,
    prefix_len: usize,
    suffix_len: usize,
) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= prefix_len + suffix_len {
        return address.to_string();
    }
    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// Check that `address` is a base58 encoded 32 byte public key.
pub fn validate_address(address: &str) -> Result<Pubkey, InputError> {
    Pubkey::from_str(address.trim()).map_err(|e| InputError::InvalidAddress(format!("{}: {}", address, e)))
}
