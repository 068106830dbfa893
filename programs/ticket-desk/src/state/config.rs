use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_UTC_OFFSET_SECONDS, SECONDS_PER_DAY},
    error::TicketDeskError,
    state::calendar::DrawSchedule,
};

// 8 discriminator + 32 payout_authority + 32 management_authority + 32 upgrade_authority + 1 bump
// + 8 lamports_per_unit + 4 utc_offset_seconds + 5 sales_cutoff_seconds + 8 purchase_counter
pub const CONFIG_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 32 + 1 + 8 + 4 + 5 + 8;

#[account]
pub struct Config {
    pub payout_authority: Pubkey,
    pub management_authority: Pubkey,
    pub upgrade_authority: Pubkey,
    pub bump: u8,
    /// Lamports charged per whole currency unit of cart total.
    pub lamports_per_unit: u64,
    pub utc_offset_seconds: i32,
    pub sales_cutoff_seconds: Option<u32>,
    pub purchase_counter: u64,
}

impl Config {
    pub fn schedule(&self) -> DrawSchedule {
        DrawSchedule {
            utc_offset_seconds: self.utc_offset_seconds,
            sales_cutoff_seconds: self.sales_cutoff_seconds,
        }
    }
}

pub fn validate_schedule(utc_offset_seconds: i32, sales_cutoff_seconds: Option<u32>) -> Result<()> {
    require!(
        utc_offset_seconds.unsigned_abs() <= MAX_UTC_OFFSET_SECONDS as u32,
        TicketDeskError::InvalidUtcOffset
    );
    if let Some(cutoff) = sales_cutoff_seconds {
        require!(
            i64::from(cutoff) < SECONDS_PER_DAY,
            TicketDeskError::InvalidSalesCutoff
        );
    }
    Ok(())
}
