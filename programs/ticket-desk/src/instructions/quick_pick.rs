use std::str::FromStr;

use anchor_lang::prelude::*;

use crate::{constants::SESSION_SEED, entropy::Entropy, error::TicketDeskError, state::Session};

/// Event emitted after a quick pick fills the selection
#[event]
pub struct QuickPicked {
    pub session: Pubkey,
    pub primary: Vec<u8>,
    pub secondary: Vec<u8>,
}

/// Replaces the selection with random distinct numbers for every pool of
/// the active game.
///
/// Entropy comes from the most recent SlotHashes entry, mixed with the clock
/// and the session address so that sessions picking in the same slot differ.
/// Numbers are drawn by shuffle-and-take, which always terminates.
///
/// # Arguments
/// * `ctx` - The context object containing the session, its owner and the
///   SlotHashes sysvar
///
/// # Errors
/// - `InvalidSlotHashesAccount` if the provided SlotHashes account is invalid
pub fn quick_pick(ctx: Context<QuickPick>) -> Result<()> {
    // 1. Verify the SlotHashes sysvar
    let pubkey_matches = Pubkey::from_str("SysvarS1otHashes111111111111111111111111111")
        .or(Err(TicketDeskError::InvalidSlotHashesAccount))?
        .eq(&ctx.accounts.recent_slothashes.key());
    require!(pubkey_matches, TicketDeskError::InvalidSlotHashesAccount);

    // 2. Seed from the latest slot hash, the clock and the session address
    let timestamp = Clock::get()?.unix_timestamp;
    let session_key = ctx.accounts.session.key().to_bytes();

    let mut entropy = {
        let data = ctx.accounts.recent_slothashes.data.borrow();
        Entropy::from_slot_hashes(&data[..], timestamp, &session_key)?
    };

    // 3. Replace the selection
    let session = &mut ctx.accounts.session;
    session.quick_pick(&mut entropy)?;

    emit!(QuickPicked {
        session: session.key(),
        primary: session.selection.primary.clone(),
        secondary: session.selection.secondary.clone(),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct QuickPick<'info> {
    #[account(
        mut,
        seeds = [SESSION_SEED, owner.key().as_ref()],
        bump = session.bump,
        has_one = owner @ TicketDeskError::OwnerMismatch,
    )]
    pub session: Account<'info, Session>,

    pub owner: Signer<'info>,

    /// The SlotHashes sysvar contains the most recent block hashes
    /// CHECK: Using UncheckedAccount because we manually validate the correct sysvar.
    /// This is needed because Anchor will always throw an error on the SlotHashes sysvar.
    pub recent_slothashes: UncheckedAccount<'info>,
}
