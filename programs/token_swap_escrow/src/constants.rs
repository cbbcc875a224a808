use anchor_lang::prelude::*;

/// Seed of the vault token account PDA, global to the program.
#[constant]
pub const VAULT_ACCOUNT_SEED: &[u8] = b"vault_account_seed";

/// Seed of the PDA that owns the vault. No private key exists for the
/// derived address; the program signs for it with this seed plus its bump.
#[constant]
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority_seed";
