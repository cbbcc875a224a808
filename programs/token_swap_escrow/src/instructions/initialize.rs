use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::{VAULT_ACCOUNT_SEED, VAULT_AUTHORITY_SEED};
use crate::errors::EscrowError;
use crate::pda::vault_account_address;
use crate::state::EscrowAccount;

#[derive(Accounts)]
#[instruction(vault_account_bump: u8, initializer_amount: u64)]
pub struct Initialize<'info> {
    /// The party locking a deposit and setting the swap terms
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Mint of the token being deposited
    pub mint: Account<'info, Mint>,

    /// Vault holding the deposit. Owned by the vault authority PDA from
    /// creation, so no user key can move funds out of it.
    #[account(
        init,
        payer = initializer,
        seeds = [VAULT_ACCOUNT_SEED],
        bump,
        token::mint = mint,
        token::authority = vault_authority,
    )]
    pub vault_account: Account<'info, TokenAccount>,

    /// CHECK: PDA that owns the vault; the program signs for it and never
    /// reads or writes its data
    #[account(seeds = [VAULT_AUTHORITY_SEED], bump)]
    pub vault_authority: UncheckedAccount<'info>,

    /// Source of the deposit; must belong to the initializer and be funded
    #[account(
        mut,
        constraint = initializer_deposit_token_account.owner == initializer.key() @ EscrowError::Unauthorized,
        constraint = initializer_deposit_token_account.mint == mint.key() @ EscrowError::MintMismatch,
        constraint = initializer_deposit_token_account.amount >= initializer_amount @ EscrowError::InsufficientDepositBalance,
    )]
    pub initializer_deposit_token_account: Account<'info, TokenAccount>,

    /// Account that will receive the taker's counter-payment on exchange
    pub initializer_receive_token_account: Account<'info, TokenAccount>,

    /// Record of the swap terms, allocated under a keypair supplied and
    /// co-signed by the initializer's client
    #[account(init, payer = initializer, space = 8 + EscrowAccount::INIT_SPACE)]
    pub escrow_account: Box<Account<'info, EscrowAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    fn record_terms(&mut self, initializer_amount: u64, taker_amount: u64) {
        self.escrow_account.set_inner(EscrowAccount {
            initializer: self.initializer.key(),
            initializer_deposit_token_account: self.initializer_deposit_token_account.key(),
            initializer_receive_token_account: self.initializer_receive_token_account.key(),
            initializer_amount,
            taker_amount,
            vault_account: self.vault_account.key(),
        });
    }

    fn deposit_into_vault(&self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.initializer_deposit_token_account.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.vault_account.to_account_info(),
            authority: self.initializer.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);

        transfer_checked(cpi_ctx, amount, self.mint.decimals)
    }
}

pub fn handler(
    ctx: Context<Initialize>,
    vault_account_bump: u8,
    initializer_amount: u64,
    taker_amount: u64,
) -> Result<()> {
    require_gt!(initializer_amount, 0, EscrowError::InvalidAmount);
    require_gt!(taker_amount, 0, EscrowError::InvalidAmount);

    // The client derives the vault bump on its side; accept it only if it
    // matches our own derivation.
    let (_, expected_bump) = vault_account_address(ctx.program_id)?;
    require_eq!(vault_account_bump, expected_bump, EscrowError::InvalidVaultBump);

    ctx.accounts.record_terms(initializer_amount, taker_amount);
    ctx.accounts.deposit_into_vault(initializer_amount)?;

    msg!(
        "Escrow opened: {} deposited against {} demanded",
        initializer_amount,
        taker_amount
    );
    Ok(())
}
