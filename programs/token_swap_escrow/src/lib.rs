use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("3GwqWY7UHbgxUeFevjsBk6qM4WxbPLWCSyXfDm96A6H5");

#[program]
pub mod token_swap_escrow {
    use super::*;

    /// Open an escrow: lock the initializer's deposit in the vault and
    /// record the swap terms
    pub fn initialize(
        ctx: Context<Initialize>,
        vault_account_bump: u8,
        initializer_amount: u64,
        taker_amount: u64,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            vault_account_bump,
            initializer_amount,
            taker_amount,
        )
    }

    /// Settle the escrow: taker pays the demanded amount and receives the
    /// vault's deposit in the same transaction
    pub fn exchange(ctx: Context<Exchange>) -> Result<()> {
        instructions::exchange::handler(ctx)
    }

    /// Unwind the escrow: the initializer reclaims its deposit before any
    /// taker acts
    pub fn cancel(ctx: Context<Cancel>) -> Result<()> {
        instructions::cancel::handler(ctx)
    }
}
