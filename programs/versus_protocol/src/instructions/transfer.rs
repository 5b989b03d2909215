use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer as system_transfer, Transfer};
use solana_program::rent::Rent;
use solana_program::sysvar::Sysvar;

use crate::error::CoreError;

/// Moves a signer's stake into a program-owned trade account through the
/// system program.
pub fn stake_payment<'info>(
    from: &Signer<'info>,
    to: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    msg!("Transferring stake into trade");
    if amount == 0_u64 {
        return Ok(());
    }
    system_transfer(
        CpiContext::new(
            system_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: to.clone(),
            },
        ),
        amount,
    )
}

/// Direct lamport movement out of an account this program owns. The source
/// must keep its rent reserve; callers compute `amount` with
/// `amount_above_rent_reserve`.
pub fn lamports_out<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    msg!("Transferring lamports out of program account");
    if amount == 0_u64 {
        return Ok(());
    }

    let from_balance = from.lamports();
    let to_balance = to.lamports();
    **from.try_borrow_mut_lamports()? = from_balance
        .checked_sub(amount)
        .ok_or(CoreError::ArithmeticError)?;
    **to.try_borrow_mut_lamports()? = to_balance
        .checked_add(amount)
        .ok_or(CoreError::ArithmeticError)?;

    Ok(())
}

/// Rent-exempt reserve for an account of `data_len` bytes, supplied by the
/// runtime rather than fixed by the protocol.
pub fn rent_reserve(data_len: usize) -> Result<u64> {
    Ok(Rent::get()?.minimum_balance(data_len))
}

/// Lamports held above the rent reserve; never underflows, so a drained
/// account reports zero rather than an error.
pub fn amount_above_rent_reserve(lamports: u64, rent_reserve: u64) -> u64 {
    lamports.saturating_sub(rent_reserve)
}
