use anchor_lang::prelude::*;

use crate::{constants::MAX_CART_ENTRIES, state::cart::CartEntry};

const TRANSACTION_ID_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Proof of a settled checkout, PDA `["receipt", purchase_number]`.
#[account]
#[derive(InitSpace)]
pub struct Receipt {
    pub buyer: Pubkey,
    pub purchase_number: u64,
    pub transaction_code: u64,
    pub entry_count: u8,
    pub draws: u64,
    pub total_units: u64,
    pub lamports_paid: u64,
    pub created_at: i64,
    /// The tickets paid for, numbers and draw dates as they were sold
    #[max_len(MAX_CART_ENTRIES)]
    pub entries: Vec<CartEntry>,
}

impl Receipt {
    pub fn transaction_id(&self) -> String {
        transaction_id(self.transaction_code)
    }
}

/// Renders a transaction code as `TX-` followed by nine base-36 digits.
pub fn transaction_id(code: u64) -> String {
    let mut digits = [b'0'; TRANSACTION_ID_LEN];
    let mut rest = code;
    for slot in digits.iter_mut().rev() {
        *slot = BASE36[(rest % 36) as usize];
        rest /= 36;
    }
    format!("TX-{}", String::from_utf8_lossy(&digits))
}
