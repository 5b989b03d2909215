use anchor_lang::prelude::*;

use crate::context::Withdraw;
use crate::instructions::transfer;
use crate::state::user_account::UserAccount;

/// Pays the authority everything above the rent reserve. The account itself
/// stays open so the trade counter survives a full drain.
pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let user_account_info = ctx.accounts.user_account.to_account_info();

    let reserve = transfer::rent_reserve(UserAccount::SIZE)?;
    let amount = transfer::amount_above_rent_reserve(user_account_info.lamports(), reserve);

    transfer::lamports_out(
        &user_account_info,
        &ctx.accounts.authority.to_account_info(),
        amount,
    )
}
