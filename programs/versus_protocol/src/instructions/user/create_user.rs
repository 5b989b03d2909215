use anchor_lang::prelude::*;

use crate::state::user_account::UserAccount;

/// The account is freshly allocated at its derived address; a second create
/// for the same authority fails at allocation and leaves the counter alone.
pub fn create_user(user_account: &mut UserAccount) -> Result<()> {
    user_account.trades_placed = 0_u32;

    Ok(())
}
