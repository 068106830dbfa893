use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, TREASURY_SEED},
    error::TicketDeskError,
    state::{Config, Treasury, TREASURY_ACCOUNT_SIZE},
};

/// Event emitted when treasury funds are withdrawn
#[event]
pub struct TreasuryWithdrawn {
    /// Amount withdrawn in lamports
    pub amount: u64,
    /// Recipient of the funds
    pub payout_authority: Pubkey,
}

/// Instruction to withdraw checkout payments from the treasury to the payout authority
///
/// # Security Considerations
/// 1. Verifies the signer is the management authority
/// 2. Verifies the recipient is the configured payout authority
/// 3. Leaves the rent-exempt minimum so the treasury stays open for new purchases
///
/// # Account Validations
/// * Signer - Must be the management authority
/// * Treasury - Singleton PDA ["treasury"]
pub fn withdraw_from_treasury(ctx: Context<WithdrawFromTreasury>) -> Result<()> {
    let treasury_account = ctx.accounts.treasury.to_account_info();
    let payout_authority = ctx.accounts.payout_authority.to_account_info();

    let treasury_balance = treasury_account.lamports();
    let rent_lamports = (Rent::get()?).minimum_balance(TREASURY_ACCOUNT_SIZE);
    let lamports_to_withdraw = treasury_balance
        .checked_sub(rent_lamports)
        .ok_or(TicketDeskError::InsufficientFunds)?;
    require!(lamports_to_withdraw > 0, TicketDeskError::InsufficientFunds);

    // Direct lamport moves work because the treasury is a PDA owned by this program.
    treasury_account.sub_lamports(lamports_to_withdraw)?;
    payout_authority.add_lamports(lamports_to_withdraw)?;

    emit!(TreasuryWithdrawn {
        amount: lamports_to_withdraw,
        payout_authority: ctx.accounts.payout_authority.key(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawFromTreasury<'info> {
    #[account(mut)]
    pub management_authority: Signer<'info>,

    #[account(mut, seeds = [TREASURY_SEED], bump = treasury.bump)]
    pub treasury: Account<'info, Treasury>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = management_authority @ TicketDeskError::NotProgramManagementAuthority,
        has_one = payout_authority @ TicketDeskError::NotPayoutAuthority
    )]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,

    #[account(mut)]
    pub payout_authority: SystemAccount<'info>,
}
