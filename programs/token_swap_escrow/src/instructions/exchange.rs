use anchor_lang::prelude::*;
use anchor_spl::token::{
    close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
};

use crate::constants::{VAULT_ACCOUNT_SEED, VAULT_AUTHORITY_SEED};
use crate::errors::EscrowError;
use crate::pda::vault_authority_address;
use crate::state::EscrowAccount;

#[derive(Accounts)]
pub struct Exchange<'info> {
    /// The counter-party accepting the recorded terms
    pub taker: Signer<'info>,

    /// CHECK: must match the initializer recorded in the escrow; only
    /// receives the rent of the closed vault and record
    #[account(
        mut,
        constraint = escrow_account.initializer == initializer.key() @ EscrowError::Unauthorized,
    )]
    pub initializer: UncheckedAccount<'info>,

    /// Mint locked in the vault
    pub mint_a: Box<Account<'info, Mint>>,

    /// Mint the initializer demanded in return
    pub mint_b: Box<Account<'info, Mint>>,

    /// Taker's source of the demanded token
    #[account(
        mut,
        constraint = taker_deposit_token_account.mint == mint_b.key() @ EscrowError::MintMismatch,
        constraint = taker_deposit_token_account.amount >= escrow_account.taker_amount @ EscrowError::InsufficientTakerBalance,
    )]
    pub taker_deposit_token_account: Box<Account<'info, TokenAccount>>,

    /// Taker's destination for the vault's deposit
    #[account(
        mut,
        constraint = taker_receive_token_account.mint == mint_a.key() @ EscrowError::MintMismatch,
    )]
    pub taker_receive_token_account: Box<Account<'info, TokenAccount>>,

    /// Re-supplied so the record's stored reference can be re-checked;
    /// substituting a different account is rejected before any transfer
    #[account(
        mut,
        constraint = escrow_account.initializer_deposit_token_account == initializer_deposit_token_account.key() @ EscrowError::DepositAccountMismatch,
    )]
    pub initializer_deposit_token_account: Box<Account<'info, TokenAccount>>,

    /// Destination of the taker's payment, as recorded at initialization
    #[account(
        mut,
        constraint = escrow_account.initializer_receive_token_account == initializer_receive_token_account.key() @ EscrowError::ReceiveAccountMismatch,
        constraint = initializer_receive_token_account.mint == mint_b.key() @ EscrowError::MintMismatch,
    )]
    pub initializer_receive_token_account: Box<Account<'info, TokenAccount>>,

    /// Record being settled; closed to the initializer on success
    #[account(mut, close = initializer)]
    pub escrow_account: Box<Account<'info, EscrowAccount>>,

    /// Vault paired with the record
    #[account(
        mut,
        seeds = [VAULT_ACCOUNT_SEED],
        bump,
        constraint = escrow_account.vault_account == vault_account.key() @ EscrowError::VaultMismatch,
        constraint = vault_account.mint == mint_a.key() @ EscrowError::MintMismatch,
    )]
    pub vault_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: PDA that owns the vault; the program signs for it and never
    /// reads or writes its data
    #[account(seeds = [VAULT_AUTHORITY_SEED], bump)]
    pub vault_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Exchange<'info> {
    fn pay_initializer(&self) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.taker_deposit_token_account.to_account_info(),
            mint: self.mint_b.to_account_info(),
            to: self.initializer_receive_token_account.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);

        transfer_checked(cpi_ctx, self.escrow_account.taker_amount, self.mint_b.decimals)
    }

    fn release_vault_to_taker(&self, authority_seeds: &[&[&[u8]]]) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.vault_account.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.taker_receive_token_account.to_account_info(),
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
            self.mint_a.decimals,
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

pub fn handler(ctx: Context<Exchange>) -> Result<()> {
    let (_, authority_bump) = vault_authority_address(ctx.program_id)?;
    let authority_seeds: &[&[&[u8]]] = &[&[VAULT_AUTHORITY_SEED, &[authority_bump]]];

    ctx.accounts.pay_initializer()?;
    ctx.accounts.release_vault_to_taker(authority_seeds)?;
    ctx.accounts.close_vault(authority_seeds)?;

    msg!(
        "Escrow settled: {} released to taker, {} paid to initializer",
        ctx.accounts.escrow_account.initializer_amount,
        ctx.accounts.escrow_account.taker_amount
    );
    Ok(())
}
