use anchor_lang::prelude::*;

use crate::{
    constants::{
        BPS_DENOMINATOR, DISCOUNT_BPS, MAX_CART_ENTRIES, MAX_PRIMARY_PICKS, MAX_SECONDARY_PICKS,
    },
    error::TicketDeskError,
    state::{calendar::DrawDate, game::GameId, selection::PurchaseMode},
};

/// Snapshot of a completed selection. Never edited once in the cart.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq)]
pub struct CartEntry {
    pub id: u64,
    pub game: GameId,
    pub mode: PurchaseMode,
    #[max_len(MAX_PRIMARY_PICKS)]
    pub primary: Vec<u8>,
    #[max_len(MAX_SECONDARY_PICKS)]
    pub secondary: Vec<u8>,
    /// Unit price times `draws`, in whole currency units.
    pub price: u64,
    pub draws: u8,
    /// Bound draw for single-draw entries. Bundles cover the whole window.
    pub draw_date: Option<DrawDate>,
}

impl CartEntry {
    pub fn game_name(&self) -> &'static str {
        self.game.definition().name
    }

    pub fn purchase_label(&self) -> &'static str {
        self.mode.label()
    }

    pub fn draw_date_label(&self) -> Option<String> {
        self.draw_date.as_ref().map(DrawDate::label)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cart {
    /// Id handed to the next appended entry. Never reused within a session.
    pub next_entry_id: u64,
    #[max_len(MAX_CART_ENTRIES)]
    pub entries: Vec<CartEntry>,
}

impl Cart {
    /// Appends `entry` under a fresh id and returns that id.
    ///
    /// # Errors
    /// - `CartFull` once `MAX_CART_ENTRIES` entries are queued
    pub fn append(&mut self, mut entry: CartEntry) -> Result<u64> {
        require!(
            self.entries.len() < MAX_CART_ENTRIES,
            TicketDeskError::CartFull
        );

        let id = self.next_entry_id;
        self.next_entry_id = id.checked_add(1).ok_or(TicketDeskError::Overflow)?;

        entry.id = id;
        self.entries.push(entry);
        Ok(id)
    }

    /// Removes the entry with `id`, if any.
    pub fn remove(&mut self, id: u64) -> Option<CartEntry> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(position))
    }

    pub fn get(&self, id: u64) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn total(&self) -> Result<u64> {
        self.entries.iter().try_fold(0u64, |sum, entry| -> Result<u64> {
            Ok(sum.checked_add(entry.price).ok_or(TicketDeskError::Overflow)?)
        })
    }

    pub fn total_draws(&self) -> Result<u64> {
        self.entries.iter().try_fold(0u64, |sum, entry| -> Result<u64> {
            Ok(sum
                .checked_add(u64::from(entry.draws))
                .ok_or(TicketDeskError::Overflow)?)
        })
    }

    pub fn discount(&self) -> Result<u64> {
        let total = self.total()?;
        let scaled = total
            .checked_mul(DISCOUNT_BPS)
            .ok_or(TicketDeskError::Overflow)?;
        Ok(scaled / BPS_DENOMINATOR)
    }

    /// Amount due after discount.
    pub fn net_total(&self) -> Result<u64> {
        let total = self.total()?;
        let discount = self.discount()?;
        Ok(total.checked_sub(discount).ok_or(TicketDeskError::Overflow)?)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Empties the cart and hands back what was in it. Ids keep counting
    /// from where they were.
    pub fn drain(&mut self) -> Vec<CartEntry> {
        std::mem::take(&mut self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::game::Weekday;

    fn entry(price: u64, draws: u8) -> CartEntry {
        CartEntry {
            id: 0,
            game: GameId::Powerball,
            mode: if draws > 1 {
                PurchaseMode::Bundle
            } else {
                PurchaseMode::Single
            },
            primary: vec![5, 12, 28, 33, 49],
            secondary: vec![14],
            price,
            draws,
            draw_date: None,
        }
    }

    #[test]
    fn empty_cart_totals_zero() {
        let cart = Cart::default();
        assert_eq!(cart.total().unwrap(), 0);
        assert_eq!(cart.net_total().unwrap(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn ids_are_unique_and_never_reused() {
        let mut cart = Cart::default();
        let a = cart.append(entry(180, 1)).unwrap();
        let b = cart.append(entry(540, 3)).unwrap();
        assert_ne!(a, b);
        cart.remove(b);
        let c = cart.append(entry(100, 1)).unwrap();
        assert_ne!(b, c);
        assert_eq!(cart.get(c).unwrap().price, 100);
    }

    #[test]
    fn remove_decreases_total_by_entry_price() {
        let mut cart = Cart::default();
        cart.append(entry(180, 1)).unwrap();
        let bundle = cart.append(entry(540, 3)).unwrap();
        assert_eq!(cart.total().unwrap(), 720);
        assert_eq!(cart.total_draws().unwrap(), 4);

        let removed = cart.remove(bundle).unwrap();
        assert_eq!(removed.price, 540);
        assert_eq!(cart.total().unwrap(), 180);
    }

    #[test]
    fn removing_unknown_id_is_noop() {
        let mut cart = Cart::default();
        cart.append(entry(180, 1)).unwrap();
        assert!(cart.remove(42).is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn discount_is_zero() {
        let mut cart = Cart::default();
        cart.append(entry(180, 1)).unwrap();
        assert_eq!(cart.discount().unwrap(), 0);
        assert_eq!(cart.net_total().unwrap(), 180);
    }

    #[test]
    fn cart_is_bounded() {
        let mut cart = Cart::default();
        for _ in 0..MAX_CART_ENTRIES {
            cart.append(entry(100, 1)).unwrap();
        }
        assert!(cart.append(entry(100, 1)).is_err());
        assert_eq!(cart.len(), MAX_CART_ENTRIES);
    }

    #[test]
    fn entry_labels() {
        let mut single = entry(180, 1);
        single.draw_date = Some(DrawDate {
            year: 2026,
            month: 10,
            day: 17,
            weekday: Weekday::Saturday,
        });
        assert_eq!(single.game_name(), "USA Powerball");
        assert_eq!(single.purchase_label(), "Standard Play");
        assert_eq!(single.draw_date_label().as_deref(), Some("Sat 17 Oct"));
        assert_eq!(entry(540, 3).purchase_label(), "7-Day Package");
    }

    #[test]
    fn drain_returns_entries_and_keeps_ids_fresh() {
        let mut cart = Cart::default();
        let first = cart.append(entry(180, 1)).unwrap();
        let second = cart.append(entry(540, 3)).unwrap();

        let drained = cart.drain();
        assert_eq!(drained.iter().map(|e| e.id).collect::<Vec<_>>(), vec![first, second]);
        assert!(cart.is_empty());
        assert!(cart.append(entry(100, 1)).unwrap() > second);
    }
}
