use anchor_lang::prelude::*;
use anchor_spl::token::{
    close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
};

use crate::constants::{VAULT_ACCOUNT_SEED, VAULT_AUTHORITY_SEED};
use crate::errors::EscrowError;
use crate::pda::vault_authority_address;
use crate::state::EscrowAccount;

#[derive(Accounts)]
pub struct Cancel<'info> {
    /// The original initializer reclaiming its deposit
    #[account(mut)]
    pub initializer: Signer<'info>,

    /// Mint locked in the vault
    pub mint: Account<'info, Mint>,

    /// Vault paired with the record
    #[account(
        mut,
        seeds = [VAULT_ACCOUNT_SEED],
        bump,
        constraint = escrow_account.vault_account == vault_account.key() @ EscrowError::VaultMismatch,
        constraint = vault_account.mint == mint.key() @ EscrowError::MintMismatch,
    )]
    pub vault_account: Account<'info, TokenAccount>,

    /// CHECK: PDA that owns the vault; the program signs for it and never
    /// reads or writes its data
    #[account(seeds = [VAULT_AUTHORITY_SEED], bump)]
    pub vault_authority: UncheckedAccount<'info>,

    /// Refund destination, as recorded at initialization
    #[account(
        mut,
        constraint = escrow_account.initializer_deposit_token_account == initializer_deposit_token_account.key() @ EscrowError::DepositAccountMismatch,
    )]
    pub initializer_deposit_token_account: Account<'info, TokenAccount>,

    /// Record being unwound; only its recorded initializer may cancel
    #[account(
        mut,
        close = initializer,
        constraint = escrow_account.initializer == initializer.key() @ EscrowError::Unauthorized,
    )]
    pub escrow_account: Box<Account<'info, EscrowAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Cancel<'info> {
    fn refund_initializer(&self, authority_seeds: &[&[&[u8]]]) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.vault_account.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.initializer_deposit_token_account.to_account_info(),
            authority: self.vault_authority.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            authority_seeds,
        );

        transfer_checked(
            cpi_ctx,
            self.escrow_account.initializer_amount,
            self.mint.decimals,
        )
    }

    fn close_vault(&self, authority_seeds: &[&[&[u8]]]) -> Result<()> {
        let cpi_accounts = CloseAccount {
            account: self.vault_account.to_account_info(),
            destination: self.initializer.to_account_info(),
            authority: self.vault_authority.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            authority_seeds,
        );

        close_account(cpi_ctx)
    }
}

pub fn handler(ctx: Context<Cancel>) -> Result<()> {
    let (_, authority_bump) = vault_authority_address(ctx.program_id)?;
    let authority_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY_SEED, &[authority_bump]]];

    ctx.accounts.refund_initializer(authority_seeds)?;
    ctx.accounts.close_vault(authority_seeds)?;

    msg!(
        "Escrow cancelled: {} returned to initializer",
        ctx.accounts.escrow_account.initializer_amount
    );
    Ok(())
}
