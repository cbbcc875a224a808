use anchor_lang::prelude::*;

/// Terms of one live escrow. Created by `initialize`; closed by whichever
/// of `exchange`/`cancel` settles first. A closed record no longer exists,
/// so a second settlement attempt fails at deserialization.
#[account]
#[derive(InitSpace)]
pub struct EscrowAccount {
    /// Wallet that opened the escrow and funded the vault
    pub initializer: Pubkey,
    /// Source of the deposit; refund destination on cancel
    pub initializer_deposit_token_account: Pubkey,
    /// Destination for the taker's counter-payment
    pub initializer_receive_token_account: Pubkey,
    /// Quantity locked in the vault
    pub initializer_amount: u64,
    /// Quantity demanded in return
    pub taker_amount: u64,
    /// Vault token account paired with this record
    pub vault_account: Pubkey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_layout_is_fixed_size() {
        // 4 pubkeys + 2 amounts, no variable-length fields
        assert_eq!(EscrowAccount::INIT_SPACE, 4 * 32 + 2 * 8);
    }
}
