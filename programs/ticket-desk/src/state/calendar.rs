use anchor_lang::prelude::*;

use crate::{
    constants::{DRAW_WINDOW_DAYS, SECONDS_PER_DAY},
    state::game::{GameDefinition, Weekday},
};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar date on which a game is drawn, in the storefront's local time.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DrawDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub weekday: Weekday,
}

impl DrawDate {
    /// Converts a day count relative to 1970-01-01 into a civil date
    /// (proleptic Gregorian calendar).
    pub fn from_epoch_days(days: i64) -> DrawDate {
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);

        // 1970-01-01 was a Thursday
        let weekday = Weekday::from_index((days + 4).rem_euclid(7) as u8);

        DrawDate {
            year: year as u16,
            month: month as u8,
            day: day as u8,
            weekday,
        }
    }

    /// Short form shown on date chips and cart entries, e.g. `Sat 17 Oct`.
    pub fn label(&self) -> String {
        let month = MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize];
        format!("{} {} {}", self.weekday.short_name(), self.day, month)
    }
}

/// Local-time rules applied when listing upcoming draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawSchedule {
    /// Offset of the storefront's local time from UTC.
    pub utc_offset_seconds: i32,
    /// Seconds after local midnight from which today's draw is no longer sold.
    /// `None` keeps today in the window regardless of the hour.
    pub sales_cutoff_seconds: Option<u32>,
}

/// Lists the game's draw dates within the next `DRAW_WINDOW_DAYS` calendar
/// days, starting today, in ascending order.
pub fn upcoming_draw_dates(
    game: &GameDefinition,
    now: i64,
    schedule: &DrawSchedule,
) -> Vec<DrawDate> {
    let local = now.saturating_add(i64::from(schedule.utc_offset_seconds));
    let today = local.div_euclid(SECONDS_PER_DAY);
    let seconds_into_day = local.rem_euclid(SECONDS_PER_DAY);

    let first_day = match schedule.sales_cutoff_seconds {
        Some(cutoff) if seconds_into_day >= i64::from(cutoff) => today + 1,
        _ => today,
    };

    (first_day..first_day + DRAW_WINDOW_DAYS)
        .map(DrawDate::from_epoch_days)
        .filter(|date| game.draws_on(date.weekday))
        .collect()
}
