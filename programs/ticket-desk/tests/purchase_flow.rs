use anchor_lang::prelude::*;
use ticket_desk::{
    constants::SECONDS_PER_DAY,
    entropy::Entropy,
    state::{
        checkout_cart, games, transaction_id, DrawSchedule, GameId, Pool, PurchaseMode,
        PurchaseSettlement, Selection, Session,
    },
};

// 2024-01-02T00:00:00Z, a Tuesday. Powerball draws Wed 3, Sat 6 and Mon 8 in the window.
const TUESDAY: i64 = 1_704_153_600;

struct AlwaysPays {
    collected: u64,
}

impl PurchaseSettlement for AlwaysPays {
    fn settle(&mut self, lamports: u64) -> Result<()> {
        self.collected += lamports;
        Ok(())
    }
}

fn open_session() -> Session {
    let mut session = Session::default();
    session.open(Pubkey::new_unique(), 254, TUESDAY, &DrawSchedule::default());
    session
}

fn choose(session: &mut Session, primary: &[u8], secondary: &[u8]) {
    for &n in primary {
        session.toggle(Pool::Primary, n).unwrap();
    }
    for &n in secondary {
        session.toggle(Pool::Secondary, n).unwrap();
    }
}

#[test]
fn single_draw_purchase() {
    let mut session = open_session();
    choose(&mut session, &[5, 12, 28, 33, 49], &[14]);
    session.set_mode(PurchaseMode::Single);
    assert!(session.set_date_index(0));
    assert_eq!(session.current_price().unwrap(), 180);

    session.add_to_cart(TUESDAY, &DrawSchedule::default()).unwrap();
    assert_eq!(session.cart.len(), 1);
    let entry = &session.cart.entries[0];
    assert_eq!(entry.price, 180);
    assert_eq!(entry.draws, 1);
    assert_eq!(entry.game_name(), "USA Powerball");
    assert!(entry.draw_date.is_some());
    assert_eq!(session.cart_total().unwrap(), 180);
}

#[test]
fn bundle_purchase_covers_window() {
    let mut session = open_session();
    assert_eq!(session.draw_dates.len(), 3);
    choose(&mut session, &[5, 12, 28, 33, 49], &[14]);
    session.set_mode(PurchaseMode::Bundle);
    assert_eq!(session.current_price().unwrap(), 540);

    session.add_to_cart(TUESDAY, &DrawSchedule::default()).unwrap();
    let entry = &session.cart.entries[0];
    assert_eq!(entry.draws, 3);
    assert_eq!(entry.price, 540);
    assert!(entry.draw_date_label().is_none());
    assert_eq!(entry.purchase_label(), "7-Day Package");
}

#[test]
fn sixth_primary_number_is_ignored() {
    let mut session = open_session();
    choose(&mut session, &[1, 2, 3, 4, 6], &[]);
    session.toggle(Pool::Primary, 5).unwrap();
    assert_eq!(session.selection.numbers(Pool::Primary), &[1, 2, 3, 4, 6]);
}

#[test]
fn quick_pick_then_buy_every_game() {
    let mut entropy = Entropy::new(0x5eed);
    let mut session = open_session();
    let mut expected_total = 0;

    for def in games() {
        session.select_game(def.id, TUESDAY, &DrawSchedule::default());
        assert_eq!(session.selection, Selection::default());

        session.quick_pick(&mut entropy).unwrap();
        assert!(session.is_complete());
        expected_total += session.current_price().unwrap();
        session.add_to_cart(TUESDAY, &DrawSchedule::default()).unwrap();
    }

    assert_eq!(session.cart.len(), 4);
    assert_eq!(session.cart_total().unwrap(), expected_total);
    assert_eq!(expected_total, 180 + 180 + 160 + 100);
}

#[test]
fn clear_then_query_is_empty() {
    let mut session = open_session();
    choose(&mut session, &[10, 20], &[3]);
    session.clear_selection();
    assert!(session.selection.numbers(Pool::Primary).is_empty());
    assert!(session.selection.numbers(Pool::Secondary).is_empty());
}

#[test]
fn checkout_settles_and_empties_cart() {
    let mut session = open_session();
    choose(&mut session, &[5, 12, 28, 33, 49], &[14]);
    session.add_to_cart(TUESDAY, &DrawSchedule::default()).unwrap();
    let wednesday = TUESDAY + SECONDS_PER_DAY;
    session.select_game(GameId::UkLotto, wednesday, &DrawSchedule::default());
    choose(&mut session, &[1, 2, 3, 4, 5, 6], &[]);
    session.set_mode(PurchaseMode::Bundle);
    session.add_to_cart(wednesday, &DrawSchedule::default()).unwrap();
    let queued = session.cart.entries.clone();

    let total = session.cart_total().unwrap();
    let mut settlement = AlwaysPays { collected: 0 };
    let summary = checkout_cart(&mut session.cart, 10_000, &mut settlement).unwrap();

    assert_eq!(summary.total_units, total);
    assert_eq!(settlement.collected, total * 10_000);
    assert!(session.cart.is_empty());
    assert_eq!(session.cart_total().unwrap(), 0);
    assert!(transaction_id(summary.lamports).starts_with("TX-"));

    assert_eq!(summary.entries, queued);
    assert_eq!(summary.entries[0].game, GameId::Powerball);
    assert_eq!(summary.entries[0].primary, vec![5, 12, 28, 33, 49]);
    assert_eq!(summary.entries[1].game, GameId::UkLotto);
    assert_eq!(summary.entries[1].draws, 3);
}

#[test]
fn session_left_open_sells_only_future_draws() {
    let mut session = open_session();
    let two_weeks_later = TUESDAY + 14 * SECONDS_PER_DAY;
    choose(&mut session, &[5, 12, 28, 33, 49], &[14]);

    assert!(session.add_to_cart(two_weeks_later, &DrawSchedule::default()).is_err());
    assert!(session.cart.is_empty());

    session.refresh_draw_dates(two_weeks_later, &DrawSchedule::default());
    session.add_to_cart(two_weeks_later, &DrawSchedule::default()).unwrap();

    let bound = session.cart.entries[0].draw_date.unwrap();
    let bound_day = (bound.year, bound.month, bound.day);
    assert!(bound_day >= (2024, 1, 16), "{:?} is in the past", bound_day);
    assert!(session.draw_dates.iter().all(|d| (d.year, d.month, d.day) >= (2024, 1, 16)));
}
