use anchor_lang::prelude::*;

use crate::{
    entropy::Entropy,
    error::TicketDeskError,
    state::cart::{Cart, CartEntry},
};

/// Collects payment for a checkout. The engine only sees this contract, so
/// the on-chain treasury transfer and test doubles are interchangeable.
pub trait PurchaseSettlement {
    /// Moves `lamports` from the buyer to the storefront.
    fn settle(&mut self, lamports: u64) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub entry_count: u8,
    pub draws: u64,
    pub total_units: u64,
    pub lamports: u64,
    /// The tickets paid for, in the order they were added
    pub entries: Vec<CartEntry>,
}

/// Settles the cart's net total and empties it, handing the paid entries
/// back in the summary.
///
/// # Errors
/// - `EmptyCart` if there is nothing to pay for
/// - `Overflow` if the total does not fit in lamports
/// - whatever the settlement returns; the cart is left intact in that case
pub fn checkout_cart<S>(
    cart: &mut Cart,
    lamports_per_unit: u64,
    settlement: &mut S,
) -> Result<CheckoutSummary>
where
    S: PurchaseSettlement + ?Sized,
{
    require!(!cart.is_empty(), TicketDeskError::EmptyCart);

    let total_units = cart.net_total()?;
    let lamports = total_units
        .checked_mul(lamports_per_unit)
        .ok_or(TicketDeskError::Overflow)?;

    let entry_count = cart.len() as u8;
    let draws = cart.total_draws()?;

    settlement.settle(lamports)?;

    Ok(CheckoutSummary {
        entry_count,
        draws,
        total_units,
        lamports,
        entries: cart.drain(),
    })
}

/// Derives the code behind a receipt's `TX-` identifier from the purchase
/// number and settlement time.
pub fn transaction_code(purchase_number: u64, timestamp: i64) -> u64 {
    Entropy::new(purchase_number ^ (timestamp as u64).rotate_left(32)).next_u64()
}
