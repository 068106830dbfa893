use anchor_lang::error_code;

#[error_code]
pub enum TicketDeskError {
    Overflow,
    InsufficientFunds,
    OwnerMismatch,
    #[msg("Only the program management authority can change the configuration")]
    NotProgramManagementAuthority,
    #[msg("Only the payout authority may be used to withdraw from the treasury")]
    NotPayoutAuthority,
    #[msg("Lamports per price unit must be greater than zero")]
    InvalidSettlementRate,
    #[msg("UTC offset must be within +/- 14 hours")]
    InvalidUtcOffset,
    #[msg("Sales cut-off must be a time of day in seconds below 86400")]
    InvalidSalesCutoff,
    #[msg("Number is outside the pool range for the active game")]
    NumberOutOfRange,
    #[msg("Selection is incomplete for the active game")]
    SelectionIncomplete,
    #[msg("The chosen draw is no longer on sale")]
    DrawDateExpired,
    #[msg("No draws are scheduled in the upcoming window")]
    NoUpcomingDraws,
    #[msg("Cart is full, check out or remove an entry first")]
    CartFull,
    #[msg("Cart is empty")]
    EmptyCart,
    #[msg("Payment could not be settled")]
    PaymentFailed,
    #[msg("Treasury transfer failed")]
    TransferFailed,
    #[msg("Invalid SlotHashes account provided")]
    InvalidSlotHashesAccount,
}
