use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_PRIMARY_PICKS, MAX_SECONDARY_PICKS},
    entropy::Entropy,
    error::TicketDeskError,
    state::game::{GameDefinition, Pool},
};

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PurchaseMode {
    /// One entry bound to a chosen draw date.
    #[default]
    Single,
    /// Every draw in the upcoming window.
    Bundle,
}

impl PurchaseMode {
    pub fn label(self) -> &'static str {
        match self {
            PurchaseMode::Single => "Standard Play",
            PurchaseMode::Bundle => "7-Day Package",
        }
    }
}

/// In-progress ticket for the active game. Numbers in each pool are kept
/// sorted, distinct, in range, and never exceed the pool's pick count.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    #[max_len(MAX_PRIMARY_PICKS)]
    pub primary: Vec<u8>,
    #[max_len(MAX_SECONDARY_PICKS)]
    pub secondary: Vec<u8>,
    pub mode: PurchaseMode,
    /// Index into the session's upcoming draw dates. Only read in single mode.
    pub date_index: u8,
}

impl Selection {
    pub fn numbers(&self, pool: Pool) -> &[u8] {
        match pool {
            Pool::Primary => &self.primary,
            Pool::Secondary => &self.secondary,
        }
    }

    fn numbers_mut(&mut self, pool: Pool) -> &mut Vec<u8> {
        match pool {
            Pool::Primary => &mut self.primary,
            Pool::Secondary => &mut self.secondary,
        }
    }

    /// Removes `number` if chosen, otherwise adds it while the pool has room.
    /// Adding to a full pool leaves the selection unchanged.
    ///
    /// # Errors
    /// - `NumberOutOfRange` if `number` is not in `[1, pool size]`
    pub fn toggle(&mut self, game: &GameDefinition, pool: Pool, number: u8) -> Result<()> {
        let rule = *game.pool(pool);
        require!(rule.contains(number), TicketDeskError::NumberOutOfRange);

        let chosen = self.numbers_mut(pool);
        match chosen.binary_search(&number) {
            Ok(position) => {
                chosen.remove(position);
            }
            Err(position) if chosen.len() < rule.picks as usize => {
                chosen.insert(position, number);
            }
            Err(_) => {}
        }

        Ok(())
    }

    /// Replaces both pools with random distinct numbers.
    pub fn quick_pick(&mut self, game: &GameDefinition, entropy: &mut Entropy) -> Result<()> {
        let mut primary = entropy.sample_distinct(game.primary.size, game.primary.picks)?;
        let mut secondary = entropy.sample_distinct(game.secondary.size, game.secondary.picks)?;
        primary.sort_unstable();
        secondary.sort_unstable();

        self.primary = primary;
        self.secondary = secondary;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.primary.clear();
        self.secondary.clear();
    }

    pub fn set_mode(&mut self, mode: PurchaseMode) {
        self.mode = mode;
    }

    /// Binds the single-draw entry to `available[index]`. Ignored in bundle
    /// mode or when the index is past the end. Returns whether it applied.
    pub fn set_date_index(&mut self, index: u8, available: usize) -> bool {
        if self.mode != PurchaseMode::Single || index as usize >= available {
            return false;
        }
        self.date_index = index;
        true
    }

    pub fn reset(&mut self) {
        *self = Selection::default();
    }

    pub fn is_complete(&self, game: &GameDefinition) -> bool {
        self.primary.len() == game.primary.picks as usize
            && self.secondary.len() == game.secondary.picks as usize
    }
}
