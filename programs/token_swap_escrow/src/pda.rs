use anchor_lang::prelude::*;

use crate::constants::{VAULT_ACCOUNT_SEED, VAULT_AUTHORITY_SEED};
use crate::errors::EscrowError;

/// Address of the program's vault token account.
pub fn vault_account_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(VAULT_ACCOUNT_SEED, program_id)
}

/// Address that owns the vault, together with the bump the program uses to
/// sign transfers out of it.
pub fn vault_authority_address(program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    derive(VAULT_AUTHORITY_SEED, program_id)
}

fn derive(seed: &[u8], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    // No bump in the search range is a configuration fault, not something a
    // retry can fix.
    Pubkey::try_find_program_address(&[seed], program_id)
        .ok_or_else(|| error!(EscrowError::SeedDerivationFailed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let first = vault_account_address(&crate::ID).unwrap();
        let second = vault_account_address(&crate::ID).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn vault_and_authority_addresses_are_distinct() {
        let (vault, _) = vault_account_address(&crate::ID).unwrap();
        let (authority, _) = vault_authority_address(&crate::ID).unwrap();
        assert_ne!(vault, authority);
    }

    #[test]
    fn derivation_depends_on_the_program_id() {
        let (ours, _) = vault_authority_address(&crate::ID).unwrap();
        let (other, _) = vault_authority_address(&Pubkey::new_unique()).unwrap();
        assert_ne!(ours, other);
    }
}
