use anchor_lang::prelude::*;
use instructions::*;
use state::{GameId, Pool, PurchaseMode};

pub mod constants;
pub mod entropy;
pub mod error;
pub mod instructions;
pub mod state;

declare_id!("kUZ5swi69HWFBAYF3U1GHf7aHUjUfr2pndysQmBreCA");

#[program]
pub mod ticket_desk {
    use super::*;

    pub fn init_config(
        ctx: Context<InitConfig>,
        lamports_per_unit: u64,
        utc_offset_seconds: i32,
    ) -> Result<()> {
        instructions::init_config::init_config(ctx, lamports_per_unit, utc_offset_seconds)
    }

    pub fn update_schedule(
        ctx: Context<UpdateSchedule>,
        utc_offset_seconds: i32,
        sales_cutoff_seconds: Option<u32>,
    ) -> Result<()> {
        instructions::update_schedule::update_schedule(
            ctx,
            utc_offset_seconds,
            sales_cutoff_seconds,
        )
    }

    pub fn open_session(ctx: Context<OpenSession>) -> Result<()> {
        instructions::open_session::open_session(ctx)
    }

    pub fn select_game(ctx: Context<ScheduledSession>, game: GameId) -> Result<()> {
        instructions::select_game::select_game(ctx, game)
    }

    pub fn toggle_number(ctx: Context<EditSession>, pool: Pool, number: u8) -> Result<()> {
        instructions::edit_selection::toggle_number(ctx, pool, number)
    }

    pub fn quick_pick(ctx: Context<QuickPick>) -> Result<()> {
        instructions::quick_pick::quick_pick(ctx)
    }

    pub fn clear_selection(ctx: Context<EditSession>) -> Result<()> {
        instructions::edit_selection::clear_selection(ctx)
    }

    pub fn set_purchase_mode(ctx: Context<EditSession>, mode: PurchaseMode) -> Result<()> {
        instructions::edit_selection::set_purchase_mode(ctx, mode)
    }

    pub fn set_draw_date(ctx: Context<EditSession>, index: u8) -> Result<()> {
        instructions::edit_selection::set_draw_date(ctx, index)
    }

    pub fn refresh_draw_dates(ctx: Context<ScheduledSession>) -> Result<()> {
        instructions::select_game::refresh_draw_dates(ctx)
    }

    pub fn add_to_cart(ctx: Context<ScheduledSession>) -> Result<()> {
        instructions::manage_cart::add_to_cart(ctx)
    }

    pub fn remove_from_cart(ctx: Context<EditSession>, entry_id: u64) -> Result<()> {
        instructions::manage_cart::remove_from_cart(ctx, entry_id)
    }

    pub fn checkout(ctx: Context<Checkout>) -> Result<()> {
        instructions::checkout::checkout(ctx)
    }

    pub fn withdraw_from_treasury(ctx: Context<WithdrawFromTreasury>) -> Result<()> {
        instructions::withdraw_from_treasury::withdraw_from_treasury(ctx)
    }

    pub fn close_session(ctx: Context<CloseSession>) -> Result<()> {
        instructions::close_session::close_session(ctx)
    }
}
