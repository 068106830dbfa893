/// Number of calendar days, starting today, scanned for upcoming draws.
pub const DRAW_WINDOW_DAYS: i64 = 8;

pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

// Largest pick counts across the catalog. Session space is sized from these.
pub const MAX_PRIMARY_PICKS: usize = 6;
pub const MAX_SECONDARY_PICKS: usize = 2;

pub const MAX_DRAW_DATES: usize = DRAW_WINDOW_DAYS as usize;
pub const MAX_CART_ENTRIES: usize = 16;

/// Checkout discount in basis points. No coupon logic exists yet.
pub const DISCOUNT_BPS: u64 = 0;
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const MAX_UTC_OFFSET_SECONDS: i32 = 14 * 60 * 60;

pub const CONFIG_SEED: &[u8] = b"config";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const SESSION_SEED: &[u8] = b"session";
pub const RECEIPT_SEED: &[u8] = b"receipt";
