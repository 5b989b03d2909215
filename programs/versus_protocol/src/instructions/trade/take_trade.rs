use anchor_lang::prelude::*;

use crate::context::TakeTrade;
use crate::error::CoreError;
use crate::events::trade::TradeTakenEvent;
use crate::instructions::{oracle, transfer, unix_now};
use crate::state::trade_account::{OrderStatus, TradeAccount};

pub fn take_trade(ctx: Context<TakeTrade>) -> Result<()> {
    let now = unix_now();
    validate_take(
        &ctx.accounts.trade_account,
        &ctx.accounts.taker.key(),
        now,
    )?;

    // the feed must still back the recorded symbol before any money moves
    oracle::verify_feed(
        &ctx.accounts.oracle_program,
        &ctx.accounts.oracle_feed,
        &ctx.accounts.trade_account.symbol,
    )?;

    let trade_account_info = ctx.accounts.trade_account.to_account_info();
    let reserve = transfer::rent_reserve(TradeAccount::SIZE)?;
    let matched_stake =
        transfer::amount_above_rent_reserve(trade_account_info.lamports(), reserve);
    require!(matched_stake > 0_u64, CoreError::TakeNothingToMatch);

    transfer::stake_payment(
        &ctx.accounts.taker,
        &trade_account_info,
        &ctx.accounts.system_program,
        matched_stake,
    )?;

    let trade = &mut ctx.accounts.trade_account;
    trade.taker = ctx.accounts.taker.key();
    trade.order_status = OrderStatus::Active;

    emit!(TradeTakenEvent {
        trade: trade.key(),
        taker: trade.taker,
        matched_stake,
    });

    Ok(())
}

fn validate_take(trade: &TradeAccount, taker: &Pubkey, now: u32) -> Result<()> {
    require!(
        trade.order_status == OrderStatus::Open,
        CoreError::TakeStatusNotOpen
    );
    require!(!trade.has_taker(), CoreError::TakeTakerAlreadySet);
    require!(now < trade.unix_end, CoreError::TakeWindowElapsed);
    require!(taker != &trade.maker, CoreError::TakeMakerTakerIdentical);

    Ok(())
}
