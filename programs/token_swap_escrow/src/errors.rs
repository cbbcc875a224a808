use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Vault bump does not match the derived vault address")]
    InvalidVaultBump,
    #[msg("Token account mint does not match the expected mint")]
    MintMismatch,
    #[msg("Deposit token account does not match the escrow record")]
    DepositAccountMismatch,
    #[msg("Receive token account does not match the escrow record")]
    ReceiveAccountMismatch,
    #[msg("Vault account does not match the escrow record")]
    VaultMismatch,
    #[msg("Caller is not the initializer recorded in the escrow")]
    Unauthorized,
    #[msg("Deposit token account balance is below the offered amount")]
    InsufficientDepositBalance,
    #[msg("Taker token account balance is below the demanded amount")]
    InsufficientTakerBalance,
    #[msg("Constant is not wrapped as a byte-string literal")]
    InvalidConstantFormat,
    #[msg("No valid program address exists for the configured seeds")]
    SeedDerivationFailed,
}
