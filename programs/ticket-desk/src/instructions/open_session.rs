use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, SESSION_SEED},
    state::{Config, GameId, Session},
};

/// Event emitted when a buyer opens a storefront session
#[event]
pub struct SessionOpened {
    /// The session PDA
    pub session: Pubkey,
    /// The buyer owning the session
    pub owner: Pubkey,
    /// The game active on open
    pub game: GameId,
    /// Number of upcoming draws on offer for that game
    pub draw_count: u8,
}

/// Creates the signer's session PDA ["session", owner] with an empty cart
/// and the default game selected.
///
/// # Arguments
/// * `ctx` - The context object containing the new session, its owner and the config
pub fn open_session(ctx: Context<OpenSession>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let schedule = ctx.accounts.config.schedule();

    let session = &mut ctx.accounts.session;
    session.open(ctx.accounts.owner.key(), ctx.bumps.session, now, &schedule);

    emit!(SessionOpened {
        session: session.key(),
        owner: session.owner,
        game: session.game,
        draw_count: session.draw_dates.len() as u8,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct OpenSession<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Session::INIT_SPACE,
        seeds = [SESSION_SEED, owner.key().as_ref()],
        bump,
    )]
    pub session: Account<'info, Session>,

    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    pub system_program: Program<'info, System>,
}
