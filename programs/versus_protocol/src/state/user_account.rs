use crate::error::CoreError;
use crate::state::type_size::*;
use crate::versus_protocol::SEED_USER;
use anchor_lang::prelude::*;

/// Per-authority account, created once and kept for the life of the wallet.
/// Its lamport balance is funded by plain transfers and drained by `withdraw`;
/// its data is only ever written by this program.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct UserAccount {
    pub trades_placed: u32,
}

impl UserAccount {
    pub const SIZE: usize = DISCRIMINATOR_SIZE + U32_SIZE; // trades_placed

    /// Derives the canonical `(address, bump)` for an authority's account.
    pub fn pda(authority: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[SEED_USER, authority.as_ref()], program_id)
    }

    pub fn increment_trades_placed(&mut self) -> Result<u32> {
        self.trades_placed = self
            .trades_placed
            .checked_add(1_u32)
            .ok_or(CoreError::ArithmeticError)?;
        Ok(self.trades_placed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pda_is_deterministic() {
        let authority = Pubkey::new_unique();

        // when
        let first = UserAccount::pda(&authority, &crate::ID);
        let second = UserAccount::pda(&authority, &crate::ID);

        // then
        assert_eq!(first, second);
    }

    #[test]
    fn test_pda_distinct_per_authority() {
        let authority_a = Pubkey::new_unique();
        let authority_b = Pubkey::new_unique();

        // when
        let (address_a, _) = UserAccount::pda(&authority_a, &crate::ID);
        let (address_b, _) = UserAccount::pda(&authority_b, &crate::ID);

        // then
        assert_ne!(address_a, address_b);
    }

    #[test]
    fn test_increment_trades_placed() {
        let mut user_account = UserAccount { trades_placed: 0 };

        assert_eq!(user_account.increment_trades_placed().unwrap(), 1);
        assert_eq!(user_account.increment_trades_placed().unwrap(), 2);
        assert_eq!(user_account.trades_placed, 2);
    }

    #[test]
    fn test_increment_trades_placed_overflow() {
        let mut user_account = UserAccount {
            trades_placed: u32::MAX,
        };

        // then
        assert!(user_account.increment_trades_placed().is_err());
        assert_eq!(user_account.trades_placed, u32::MAX);
    }

    #[test]
    fn test_serialized_size_within_allocation() {
        let user_account = UserAccount { trades_placed: 7 };

        let data = user_account.try_to_vec().unwrap();

        assert_eq!(data.len() + DISCRIMINATOR_SIZE, UserAccount::SIZE);
    }
}
