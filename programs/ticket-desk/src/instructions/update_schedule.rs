use anchor_lang::prelude::*;

use crate::{
    constants::CONFIG_SEED,
    error::TicketDeskError,
    state::{validate_schedule, Config},
};

/// Event emitted when the draw schedule changes
#[event]
pub struct ScheduleUpdated {
    pub utc_offset_seconds: i32,
    pub sales_cutoff_seconds: Option<u32>,
}

/// Changes the local time offset and same-day sales cut-off used when
/// listing upcoming draws. Sessions pick the new schedule up on their next
/// game switch, refresh or add to cart.
///
/// # Arguments
/// * `ctx` - The context object containing the config and management authority
/// * `utc_offset_seconds` - Local time offset used for draw dates (within +/- 14h)
/// * `sales_cutoff_seconds` - Local time of day after which today's draw is off sale,
///   or `None` to keep it on sale all day
///
/// # Account Validations
/// * Config - Must name the signer as management authority
pub fn update_schedule(
    ctx: Context<UpdateSchedule>,
    utc_offset_seconds: i32,
    sales_cutoff_seconds: Option<u32>,
) -> Result<()> {
    validate_schedule(utc_offset_seconds, sales_cutoff_seconds)?;

    let config = &mut ctx.accounts.config;
    config.utc_offset_seconds = utc_offset_seconds;
    config.sales_cutoff_seconds = sales_cutoff_seconds;

    emit!(ScheduleUpdated {
        utc_offset_seconds,
        sales_cutoff_seconds,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateSchedule<'info> {
    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = management_authority @ TicketDeskError::NotProgramManagementAuthority,
    )]
    pub config: Account<'info, Config>,

    pub management_authority: Signer<'info>,
}
