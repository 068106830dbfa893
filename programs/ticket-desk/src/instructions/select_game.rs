use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, SESSION_SEED},
    error::TicketDeskError,
    state::{Config, DrawDate, GameId, Session},
};

/// Event emitted when a session switches game
#[event]
pub struct GameSelected {
    pub session: Pubkey,
    pub game: GameId,
    /// Upcoming draws offered for the game, earliest first
    pub draw_dates: Vec<DrawDate>,
}

/// Event emitted when a session's draw dates are recomputed in place
#[event]
pub struct DrawDatesRefreshed {
    pub session: Pubkey,
    pub game: GameId,
    /// Upcoming draws offered for the game, earliest first
    pub draw_dates: Vec<DrawDate>,
    /// Index of the draw now selected for a single-draw ticket
    pub date_index: u8,
}

/// Makes `game` the session's active game. The in-progress selection is
/// discarded, purchase mode returns to single draw, and the upcoming draw
/// dates are recomputed from the current clock. The cart is untouched.
///
/// # Arguments
/// * `ctx` - The context object containing the session, its owner and the config
/// * `game` - The game to switch to
pub fn select_game(ctx: Context<ScheduledSession>, game: GameId) -> Result<()> {
    // Local time rules come from the config PDA
    let now = Clock::get()?.unix_timestamp;
    let schedule = ctx.accounts.config.schedule();

    // Reset the selection and list the new game's draws
    let session = &mut ctx.accounts.session;
    session.select_game(game, now, &schedule);
    msg!(
        "Selected {} with {} upcoming draws",
        game.slug(),
        session.draw_dates.len()
    );

    emit!(GameSelected {
        session: session.key(),
        game,
        draw_dates: session.draw_dates.clone(),
    });

    Ok(())
}

/// Recomputes the session's upcoming draws from the current clock without
/// touching the chosen numbers. A chosen single draw stays selected while it
/// is still on sale; otherwise the earliest draw is selected.
///
/// # Arguments
/// * `ctx` - The context object containing the session, its owner and the config
pub fn refresh_draw_dates(ctx: Context<ScheduledSession>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let schedule = ctx.accounts.config.schedule();

    let session = &mut ctx.accounts.session;
    session.refresh_draw_dates(now, &schedule);

    emit!(DrawDatesRefreshed {
        session: session.key(),
        game: session.game,
        draw_dates: session.draw_dates.clone(),
        date_index: session.selection.date_index,
    });

    Ok(())
}

/// Accounts for session instructions that read the clock against the
/// configured draw schedule
#[derive(Accounts)]
pub struct ScheduledSession<'info> {
    /// PDA with seeds ["session", owner]
    #[account(
        mut,
        seeds = [SESSION_SEED, owner.key().as_ref()],
        bump = session.bump,
        has_one = owner @ TicketDeskError::OwnerMismatch,
    )]
    pub session: Account<'info, Session>,

    pub owner: Signer<'info>,

    /// The config account holding the draw schedule
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,
}
