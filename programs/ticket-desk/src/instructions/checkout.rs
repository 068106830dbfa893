use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, RECEIPT_SEED, SESSION_SEED, TREASURY_SEED},
    error::TicketDeskError,
    state::{
        checkout_cart, transaction_code, CartEntry, Config, PurchaseSettlement, Receipt, Session,
        Treasury,
    },
};

/// Event emitted when a cart is paid for
#[event]
pub struct PurchaseCompleted {
    /// The receipt PDA written for this purchase
    pub receipt: Pubkey,
    /// The buyer's address
    pub buyer: Pubkey,
    /// Identifier shown to the buyer, `TX-` plus nine base-36 digits
    pub transaction_id: String,
    /// Number of cart entries paid for
    pub entry_count: u8,
    /// Draws covered across all entries
    pub draws: u64,
    /// Net cart total in whole currency units
    pub total_units: u64,
    /// Total amount paid in lamports
    pub lamports_paid: u64,
    /// The tickets paid for
    pub entries: Vec<CartEntry>,
}

/// Pays the treasury from the buyer with a system transfer and checks the
/// treasury balance moved by exactly the amount due.
struct TreasuryTransfer<'a, 'info> {
    buyer: &'a Signer<'info>,
    treasury: &'a Account<'info, Treasury>,
    system_program: &'a Program<'info, System>,
}

impl PurchaseSettlement for TreasuryTransfer<'_, '_> {
    fn settle(&mut self, lamports: u64) -> Result<()> {
        require!(
            self.buyer.lamports() >= lamports,
            TicketDeskError::InsufficientFunds
        );

        let pre_transfer_balance = self.treasury.to_account_info().lamports();

        anchor_lang::solana_program::program::invoke(
            &anchor_lang::solana_program::system_instruction::transfer(
                &self.buyer.key(),
                &self.treasury.key(),
                lamports,
            ),
            &[
                self.buyer.to_account_info(),
                self.system_program.to_account_info(),
                self.treasury.to_account_info(),
            ],
        )
        .map_err(|_| TicketDeskError::PaymentFailed)?;

        let post_transfer_balance = self.treasury.to_account_info().lamports();
        require!(
            post_transfer_balance
                == pre_transfer_balance
                    .checked_add(lamports)
                    .ok_or(TicketDeskError::Overflow)?,
            TicketDeskError::TransferFailed
        );

        Ok(())
    }
}

/// Instruction to pay for everything in the buyer's cart
///
/// # Arguments
/// * `ctx` - The context object containing the session, receipt, config,
///   treasury and buyer
///
/// # Security Considerations
/// The instruction performs several critical checks:
/// 1. Rejects an empty cart
/// 2. Converts the net total to lamports with checked arithmetic
/// 3. Ensures the buyer can cover the amount due
/// 4. Verifies the treasury balance after the transfer
///
/// # Account Validations
/// * Session - Must belong to the signer
/// * Receipt - New PDA ["receipt", purchase_counter]
/// * Treasury - Singleton PDA ["treasury"]
///
/// # Implementation Notes
/// - The cart is cleared only after settlement succeeds; any failure reverts
///   the whole transaction
/// - Increments the config purchase counter
/// - The receipt keeps a copy of every ticket sold
pub fn checkout(ctx: Context<Checkout>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let purchase_number = ctx.accounts.config.purchase_counter;

    // 1. Settle the net total and take the paid entries out of the cart
    let mut settlement = TreasuryTransfer {
        buyer: &ctx.accounts.buyer,
        treasury: &ctx.accounts.treasury,
        system_program: &ctx.accounts.system_program,
    };
    let summary = checkout_cart(
        &mut ctx.accounts.session.cart,
        ctx.accounts.config.lamports_per_unit,
        &mut settlement,
    )?;

    // 2. Write the receipt
    let receipt = &mut ctx.accounts.receipt;
    receipt.buyer = ctx.accounts.buyer.key();
    receipt.purchase_number = purchase_number;
    receipt.transaction_code = transaction_code(purchase_number, now);
    receipt.entry_count = summary.entry_count;
    receipt.draws = summary.draws;
    receipt.total_units = summary.total_units;
    receipt.lamports_paid = summary.lamports;
    receipt.created_at = now;
    receipt.entries = summary.entries.clone();

    // 3. Advance the purchase counter for the next receipt PDA
    ctx.accounts.config.purchase_counter = purchase_number
        .checked_add(1)
        .ok_or(TicketDeskError::Overflow)?;

    // 4. Log and emit the purchase
    let transaction_id = receipt.transaction_id();
    msg!("Checkout {} settled {} lamports", transaction_id, summary.lamports);

    emit!(PurchaseCompleted {
        receipt: receipt.key(),
        buyer: receipt.buyer,
        transaction_id,
        entry_count: summary.entry_count,
        draws: summary.draws,
        total_units: summary.total_units,
        lamports_paid: summary.lamports,
        entries: summary.entries,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Checkout<'info> {
    /// The buyer's session, PDA ["session", buyer]
    #[account(
        mut,
        seeds = [SESSION_SEED, buyer.key().as_ref()],
        bump = session.bump,
        constraint = session.owner == buyer.key() @ TicketDeskError::OwnerMismatch,
    )]
    pub session: Account<'info, Session>,

    /// Receipt for this purchase
    #[account(
        init,
        payer = buyer,
        space = 8 + Receipt::INIT_SPACE,
        seeds = [
            RECEIPT_SEED,
            config.purchase_counter.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub receipt: Account<'info, Receipt>,

    /// The config account holding the settlement rate and purchase counter
    #[account(mut, seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, Config>,

    /// Treasury account that receives payment
    #[account(mut, seeds = [TREASURY_SEED], bump = treasury.bump)]
    pub treasury: Account<'info, Treasury>,

    /// The account paying for the cart and the receipt
    #[account(mut)]
    pub buyer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
