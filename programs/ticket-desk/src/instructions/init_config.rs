use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, TREASURY_SEED},
    error::TicketDeskError,
    state::{validate_schedule, Config, Treasury, CONFIG_ACCOUNT_SIZE, TREASURY_ACCOUNT_SIZE},
};

/// Event emitted once the storefront configuration exists
#[event]
pub struct ConfigInitialized {
    /// The config PDA
    pub config: Pubkey,
    /// The treasury PDA receiving checkout payments
    pub treasury: Pubkey,
    /// Lamports charged per whole currency unit
    pub lamports_per_unit: u64,
    /// Offset of storefront local time from UTC
    pub utc_offset_seconds: i32,
}

/// Instruction to initialize the program configuration and treasury
/// This should be called once during program deployment
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `lamports_per_unit` - Settlement rate from catalog prices to lamports (must be > 0)
/// * `utc_offset_seconds` - Local time offset used for draw dates (within +/- 14h)
///
/// # Security Considerations
/// - Creates PDAs with seeds "config" and "treasury"
/// - The management authority and payout authority are set and locked
/// - The sales cut-off starts disabled, so today's draw stays on sale all day
pub fn init_config(
    ctx: Context<InitConfig>,
    lamports_per_unit: u64,
    utc_offset_seconds: i32,
) -> Result<()> {
    require!(lamports_per_unit > 0, TicketDeskError::InvalidSettlementRate);
    validate_schedule(utc_offset_seconds, None)?;

    let config = &mut ctx.accounts.config;
    config.payout_authority = ctx.accounts.payout_authority.key();
    config.management_authority = ctx.accounts.management_authority.key();
    config.upgrade_authority = ctx.accounts.upgrade_authority.key();
    config.bump = ctx.bumps.config;
    config.lamports_per_unit = lamports_per_unit;
    config.utc_offset_seconds = utc_offset_seconds;
    config.sales_cutoff_seconds = None;
    config.purchase_counter = 0;

    ctx.accounts.treasury.bump = ctx.bumps.treasury;

    emit!(ConfigInitialized {
        config: ctx.accounts.config.key(),
        treasury: ctx.accounts.treasury.key(),
        lamports_per_unit,
        utc_offset_seconds,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitConfig<'info> {
    #[account(
        init,
        payer = upgrade_authority,
        space = CONFIG_ACCOUNT_SIZE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, Config>,

    #[account(
        init,
        payer = upgrade_authority,
        space = TREASURY_ACCOUNT_SIZE,
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub upgrade_authority: Signer<'info>,
    pub payout_authority: SystemAccount<'info>,
    pub management_authority: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}
