use anchor_lang::prelude::*;

use crate::{
    instructions::{edit_selection::EditSession, select_game::ScheduledSession},
    state::{GameId, PurchaseMode},
};

/// Event emitted when a completed selection is queued
#[event]
pub struct CartEntryAdded {
    /// The session holding the cart
    pub session: Pubkey,
    /// Id of the new entry within the session
    pub entry_id: u64,
    pub game: GameId,
    pub mode: PurchaseMode,
    /// Price of the entry in whole currency units
    pub price: u64,
    /// Draws covered by the entry
    pub draws: u8,
    /// Cart total after the addition
    pub cart_total: u64,
}

/// Event emitted when an entry leaves the cart before checkout
#[event]
pub struct CartEntryRemoved {
    pub session: Pubkey,
    pub entry_id: u64,
    pub price: u64,
    pub cart_total: u64,
}

/// Snapshots the current selection into the cart and resets the selection
/// to an empty single-draw ticket.
///
/// # Arguments
/// * `ctx` - The context object containing the session, its owner and the config
///
/// # Implementation Notes
/// - Draw dates are recomputed from the clock before pricing
/// - A bundle is priced over the draws still on sale
///
/// # Errors
/// - `SelectionIncomplete` unless every pool holds exactly its pick count
/// - `DrawDateExpired` if the chosen single draw is no longer on sale
/// - `NoUpcomingDraws` for a bundle with nothing scheduled
/// - `CartFull` when the cart is at capacity
pub fn add_to_cart(ctx: Context<ScheduledSession>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let schedule = ctx.accounts.config.schedule();

    // 1. Snapshot against the draws on sale right now
    let session = &mut ctx.accounts.session;
    let entry_id = session.add_to_cart(now, &schedule)?;

    // 2. Report what was actually queued, with the running total
    let cart_total = session.cart_total()?;
    if let Some(entry) = session.cart.get(entry_id) {
        emit!(CartEntryAdded {
            session: session.key(),
            entry_id,
            game: entry.game,
            mode: entry.mode,
            price: entry.price,
            draws: entry.draws,
            cart_total,
        });
    }

    Ok(())
}

/// Drops the entry with `entry_id` from the cart. Unknown ids are ignored.
///
/// # Arguments
/// * `ctx` - The context object containing the session and its owner
/// * `entry_id` - Id handed out when the entry was added
pub fn remove_from_cart(ctx: Context<EditSession>, entry_id: u64) -> Result<()> {
    let session = &mut ctx.accounts.session;

    // Entries are never edited in place, only removed whole

    match session.remove_from_cart(entry_id) {
        Some(entry) => {
            emit!(CartEntryRemoved {
                session: session.key(),
                entry_id,
                price: entry.price,
                cart_total: session.cart_total()?,
            });
        }
        None => msg!("No cart entry {}", entry_id),
    }

    Ok(())
}
