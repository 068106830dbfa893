use anchor_lang::prelude::*;

use crate::{
    constants::MAX_DRAW_DATES,
    entropy::Entropy,
    error::TicketDeskError,
    state::{
        calendar::{upcoming_draw_dates, DrawDate, DrawSchedule},
        cart::{Cart, CartEntry},
        game::{GameDefinition, GameId, Pool},
        selection::{PurchaseMode, Selection},
    },
};

/// A buyer's storefront state: the active game, the ticket being filled in,
/// the draws on offer and the cart. One per owner, PDA `["session", owner]`.
#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Session {
    pub owner: Pubkey,
    pub bump: u8,
    pub game: GameId,
    pub selection: Selection,
    /// Draws for `game` within the upcoming window, as of the last game switch,
    /// refresh or add to cart.
    #[max_len(MAX_DRAW_DATES)]
    pub draw_dates: Vec<DrawDate>,
    pub cart: Cart,
}

impl Session {
    pub fn open(&mut self, owner: Pubkey, bump: u8, now: i64, schedule: &DrawSchedule) {
        self.owner = owner;
        self.bump = bump;
        self.cart = Cart::default();
        self.select_game(GameId::default(), now, schedule);
    }

    pub fn game_definition(&self) -> &'static GameDefinition {
        self.game.definition()
    }

    /// Makes `game` active, discarding the in-progress selection and
    /// recomputing the upcoming draws. The cart is kept.
    pub fn select_game(&mut self, game: GameId, now: i64, schedule: &DrawSchedule) {
        self.game = game;
        self.selection.reset();
        self.draw_dates = upcoming_draw_dates(game.definition(), now, schedule);
    }

    pub fn toggle(&mut self, pool: Pool, number: u8) -> Result<()> {
        let game = self.game_definition();
        self.selection.toggle(game, pool, number)
    }

    pub fn quick_pick(&mut self, entropy: &mut Entropy) -> Result<()> {
        let game = self.game_definition();
        self.selection.quick_pick(game, entropy)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn set_mode(&mut self, mode: PurchaseMode) {
        self.selection.set_mode(mode);
    }

    pub fn set_date_index(&mut self, index: u8) -> bool {
        self.selection.set_date_index(index, self.draw_dates.len())
    }

    pub fn selected_draw_date(&self) -> Option<&DrawDate> {
        match self.selection.mode {
            PurchaseMode::Single => self.draw_dates.get(self.selection.date_index as usize),
            PurchaseMode::Bundle => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.selection.is_complete(self.game_definition())
    }

    /// Draws covered by the current selection: one, or the whole window.
    pub fn current_draw_count(&self) -> u8 {
        match self.selection.mode {
            PurchaseMode::Single => 1,
            PurchaseMode::Bundle => self.draw_dates.len() as u8,
        }
    }

    pub fn current_price(&self) -> Result<u64> {
        Ok(self
            .game_definition()
            .unit_price
            .checked_mul(u64::from(self.current_draw_count()))
            .ok_or(TicketDeskError::Overflow)?)
    }

    /// Recomputes the upcoming draws from `now`, keeping the chosen draw
    /// date selected when it is still on sale. Otherwise the first draw is
    /// selected.
    pub fn refresh_draw_dates(&mut self, now: i64, schedule: &DrawSchedule) {
        let chosen = self
            .draw_dates
            .get(self.selection.date_index as usize)
            .copied();
        self.draw_dates = upcoming_draw_dates(self.game_definition(), now, schedule);
        self.selection.date_index = chosen
            .and_then(|date| self.draw_dates.iter().position(|d| *d == date))
            .unwrap_or(0) as u8;
    }

    /// Snapshots the completed selection into the cart and starts a fresh one.
    /// Draw dates are recomputed from `now` first, so a bundle is priced over
    /// the draws still on sale. Returns the id of the new entry.
    ///
    /// # Errors
    /// - `SelectionIncomplete` unless both pools hold exactly their pick count
    /// - `DrawDateExpired` if the chosen single draw is no longer on sale
    /// - `NoUpcomingDraws` for a bundle with an empty window
    /// - `CartFull` when the cart is at capacity
    ///
    /// The session is unchanged on error.
    pub fn add_to_cart(&mut self, now: i64, schedule: &DrawSchedule) -> Result<u64> {
        require!(self.is_complete(), TicketDeskError::SelectionIncomplete);

        let game = self.game_definition();
        let draw_dates = upcoming_draw_dates(game, now, schedule);

        // Single draws must still point at the date the buyer picked
        let (draws, draw_date) = match self.selection.mode {
            PurchaseMode::Single => {
                let fresh = draw_dates.get(self.selection.date_index as usize).copied();
                require!(
                    fresh == self.selected_draw_date().copied(),
                    TicketDeskError::DrawDateExpired
                );
                (1, fresh)
            }
            PurchaseMode::Bundle => (draw_dates.len() as u8, None),
        };
        require!(draws > 0, TicketDeskError::NoUpcomingDraws);

        let price = game
            .unit_price
            .checked_mul(u64::from(draws))
            .ok_or(TicketDeskError::Overflow)?;

        let entry = CartEntry {
            id: 0,
            game: self.game,
            mode: self.selection.mode,
            primary: self.selection.primary.clone(),
            secondary: self.selection.secondary.clone(),
            price,
            draws,
            draw_date,
        };

        let id = self.cart.append(entry)?;
        self.draw_dates = draw_dates;
        self.selection.reset();
        Ok(id)
    }

    pub fn remove_from_cart(&mut self, id: u64) -> Option<CartEntry> {
        self.cart.remove(id)
    }

    pub fn cart_total(&self) -> Result<u64> {
        self.cart.total()
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    // 2024-01-02T00:00:00Z, a Tuesday
    const TUESDAY: i64 = 1_704_153_600;

    fn session() -> Session {
        let mut session = Session::default();
        session.open(Pubkey::new_unique(), 255, TUESDAY, &DrawSchedule::default());
        session
    }

    fn fill_powerball(session: &mut Session) {
        for n in [5, 12, 28, 33, 49] {
            session.toggle(Pool::Primary, n).unwrap();
        }
        session.toggle(Pool::Secondary, 14).unwrap();
    }

    fn add(session: &mut Session) -> Result<u64> {
        session.add_to_cart(TUESDAY, &DrawSchedule::default())
    }

    fn ymd(date: &DrawDate) -> (u16, u8, u8) {
        (date.year, date.month, date.day)
    }

    #[test]
    fn opens_on_powerball_with_dates() {
        let session = session();
        assert_eq!(session.game, GameId::Powerball);
        assert_eq!(session.draw_dates.len(), 3);
        assert_eq!(session.selection, Selection::default());
        assert!(session.cart.is_empty());
    }

    #[test]
    fn switching_game_resets_selection_and_dates() {
        let mut session = session();
        fill_powerball(&mut session);
        session.set_mode(PurchaseMode::Bundle);
        session.cart.append(sample_entry()).unwrap();

        session.select_game(GameId::MegaMillions, TUESDAY, &DrawSchedule::default());
        assert_eq!(session.selection, Selection::default());
        assert_eq!(session.draw_dates.len(), 3);
        assert!(session
            .draw_dates
            .iter()
            .all(|d| session.game_definition().draws_on(d.weekday)));
        assert_eq!(session.cart.len(), 1);

        // Wed 3 and Sat 6
        session.select_game(GameId::UkLotto, TUESDAY, &DrawSchedule::default());
        assert_eq!(session.draw_dates.len(), 2);

        // Wed 3, Sat 6 and Wed 10
        session.select_game(GameId::UkLotto, TUESDAY + SECONDS_PER_DAY, &DrawSchedule::default());
        assert_eq!(session.draw_dates.len(), 3);
        assert_eq!(ymd(&session.draw_dates[2]), (2024, 1, 10));
    }

    #[test]
    fn single_draw_scenario() {
        let mut session = session();
        fill_powerball(&mut session);
        assert!(session.set_date_index(0));
        assert_eq!(session.current_price().unwrap(), 180);

        let id = add(&mut session).unwrap();
        let entry = session.cart.get(id).unwrap();
        assert_eq!(entry.price, 180);
        assert_eq!(entry.draws, 1);
        assert_eq!(entry.primary, vec![5, 12, 28, 33, 49]);
        assert_eq!(entry.secondary, vec![14]);
        assert_eq!(entry.draw_date_label().as_deref(), Some("Wed 3 Jan"));
        assert_eq!(session.cart_total().unwrap(), 180);
        assert_eq!(session.selection, Selection::default());
    }

    #[test]
    fn bundle_scenario() {
        let mut session = session();
        fill_powerball(&mut session);
        session.set_mode(PurchaseMode::Bundle);
        assert_eq!(session.current_draw_count(), 3);
        assert_eq!(session.current_price().unwrap(), 540);

        let id = add(&mut session).unwrap();
        let entry = session.cart.get(id).unwrap();
        assert_eq!(entry.draws, 3);
        assert_eq!(entry.price, 540);
        assert!(entry.draw_date.is_none());
        assert_eq!(session.selection.mode, PurchaseMode::Single);
    }

    #[test]
    fn incomplete_selection_leaves_cart_alone() {
        let mut session = session();
        session.toggle(Pool::Primary, 5).unwrap();
        let before = session.clone();
        assert!(add(&mut session).is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn later_date_is_bound_to_entry() {
        let mut session = session();
        fill_powerball(&mut session);
        assert!(session.set_date_index(2));
        assert!(!session.set_date_index(3));
        let id = add(&mut session).unwrap();
        assert_eq!(
            session.cart.get(id).unwrap().draw_date_label().as_deref(),
            Some("Mon 8 Jan")
        );
    }

    #[test]
    fn removing_entry_reduces_total() {
        let mut session = session();
        fill_powerball(&mut session);
        let single = add(&mut session).unwrap();
        fill_powerball(&mut session);
        session.set_mode(PurchaseMode::Bundle);
        add(&mut session).unwrap();
        assert_eq!(session.cart_total().unwrap(), 720);

        assert!(session.remove_from_cart(single).is_some());
        assert_eq!(session.cart_total().unwrap(), 540);
        assert!(session.remove_from_cart(single).is_none());

        session.clear_cart();
        assert_eq!(session.cart_total().unwrap(), 0);
    }

    #[test]
    fn passed_single_draw_is_rejected() {
        let mut session = session();
        fill_powerball(&mut session);
        let before = session.clone();

        let two_weeks_later = TUESDAY + 14 * SECONDS_PER_DAY;
        assert!(session
            .add_to_cart(two_weeks_later, &DrawSchedule::default())
            .is_err());
        assert_eq!(session, before);
    }

    #[test]
    fn refreshed_dates_bind_future_draw() {
        let mut session = session();
        fill_powerball(&mut session);

        // 2024-01-16, a Tuesday: Wed 17, Sat 20 and Mon 22
        let two_weeks_later = TUESDAY + 14 * SECONDS_PER_DAY;
        session.refresh_draw_dates(two_weeks_later, &DrawSchedule::default());
        let id = session
            .add_to_cart(two_weeks_later, &DrawSchedule::default())
            .unwrap();

        let bound = session.cart.get(id).unwrap().draw_date.unwrap();
        assert_eq!(ymd(&bound), (2024, 1, 17));
        assert!(ymd(&bound) > (2024, 1, 16));
    }

    #[test]
    fn refresh_keeps_chosen_date_when_still_on_sale() {
        let mut session = session();
        assert!(session.set_date_index(2));
        // Thursday: Wed 3 has passed, Mon 8 is now second
        session.refresh_draw_dates(TUESDAY + 2 * SECONDS_PER_DAY, &DrawSchedule::default());
        assert_eq!(session.selection.date_index, 1);
        assert_eq!(ymd(session.selected_draw_date().unwrap()), (2024, 1, 8));

        assert!(session.set_date_index(0));
        session.refresh_draw_dates(TUESDAY + 5 * SECONDS_PER_DAY, &DrawSchedule::default());
        assert_eq!(session.selection.date_index, 0);
    }

    #[test]
    fn stale_bundle_is_priced_over_current_window() {
        let mut session = session();
        fill_powerball(&mut session);
        session.set_mode(PurchaseMode::Bundle);

        // 2024-01-15, a Monday: Mon 15, Wed 17, Sat 20 and Mon 22
        let later = TUESDAY + 13 * SECONDS_PER_DAY;
        let id = session.add_to_cart(later, &DrawSchedule::default()).unwrap();
        let entry = session.cart.get(id).unwrap();
        assert_eq!(entry.draws, 4);
        assert_eq!(entry.price, 720);
        assert_eq!(ymd(&session.draw_dates[0]), (2024, 1, 15));
    }

    fn sample_entry() -> CartEntry {
        CartEntry {
            id: 0,
            game: GameId::Powerball,
            mode: PurchaseMode::Single,
            primary: vec![1, 2, 3, 4, 5],
            secondary: vec![1],
            price: 180,
            draws: 1,
            draw_date: None,
        }
    }
}
