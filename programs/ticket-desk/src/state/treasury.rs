use anchor_lang::prelude::*;

// 8 discriminator, 1 bump
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 1;

/// Holds checkout payments until the management authority withdraws them.
#[account]
pub struct Treasury {
    pub bump: u8,
}
