use anchor_lang::prelude::*;

use crate::{constants::SESSION_SEED, error::TicketDeskError, state::Session};

/// Closes the signer's session and returns its rent. Anything left in the
/// cart is discarded.
pub fn close_session(ctx: Context<CloseSession>) -> Result<()> {
    if !ctx.accounts.session.cart.is_empty() {
        msg!(
            "Discarding {} unpaid cart entries",
            ctx.accounts.session.cart.len()
        );
    }
    Ok(())
}

#[derive(Accounts)]
pub struct CloseSession<'info> {
    /// Session PDA, closed and rent returned to the owner
    #[account(
        mut,
        close = owner,
        seeds = [SESSION_SEED, owner.key().as_ref()],
        bump = session.bump,
        has_one = owner @ TicketDeskError::OwnerMismatch,
    )]
    pub session: Account<'info, Session>,

    #[account(mut)]
    pub owner: Signer<'info>,
}
