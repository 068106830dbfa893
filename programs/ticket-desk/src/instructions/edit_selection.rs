use anchor_lang::prelude::*;

use crate::{
    constants::SESSION_SEED,
    error::TicketDeskError,
    state::{Pool, PurchaseMode, Session},
};

/// Adds `number` to `pool` or removes it if already chosen. A full pool
/// ignores further additions.
///
/// # Arguments
/// * `ctx` - The context object containing the session and its owner
/// * `pool` - Which pool of the active game to edit
/// * `number` - The number to add or remove, within the pool's range
///
/// # Errors
/// - `NumberOutOfRange` if `number` is outside the pool
pub fn toggle_number(ctx: Context<EditSession>, pool: Pool, number: u8) -> Result<()> {
    ctx.accounts.session.toggle(pool, number)
}

/// Empties both pools. Purchase mode and draw date stay as they are.
pub fn clear_selection(ctx: Context<EditSession>) -> Result<()> {
    ctx.accounts.session.clear_selection();
    Ok(())
}

/// Switches between a single draw and the bundle. Chosen numbers are kept.
///
/// # Arguments
/// * `ctx` - The context object containing the session and its owner
/// * `mode` - The purchase mode priced on the next add to cart
pub fn set_purchase_mode(ctx: Context<EditSession>, mode: PurchaseMode) -> Result<()> {
    ctx.accounts.session.set_mode(mode);
    Ok(())
}

/// Binds a single-draw ticket to the draw at `index`. Out-of-range indexes
/// and bundle mode leave the selection unchanged.
///
/// # Arguments
/// * `ctx` - The context object containing the session and its owner
/// * `index` - Position in the session's upcoming draw dates
pub fn set_draw_date(ctx: Context<EditSession>, index: u8) -> Result<()> {
    if !ctx.accounts.session.set_date_index(index) {
        msg!("Ignoring draw date index {}", index);
    }
    Ok(())
}

/// Accounts shared by instructions that only touch the signer's session
#[derive(Accounts)]
pub struct EditSession<'info> {
    /// PDA with seeds ["session", owner]
    #[account(
        mut,
        seeds = [SESSION_SEED, owner.key().as_ref()],
        bump = session.bump,
        has_one = owner @ TicketDeskError::OwnerMismatch,
    )]
    pub session: Account<'info, Session>,

    pub owner: Signer<'info>,
}
