use anchor_lang::prelude::*;

use crate::context::MakeTrade;
use crate::error::CoreError;
use crate::instructions::{oracle, transfer, unix_now};
use crate::state::trade_account::{OrderStatus, TradeAccount, TradeDirection, TradeDuration};

pub fn make_trade(
    ctx: Context<MakeTrade>,
    slug: String,
    symbol: String,
    content: u8,
    direction: TradeDirection,
    duration: TradeDuration,
    stake: u64,
) -> Result<()> {
    require!(stake > 0_u64, CoreError::CreationStakeZeroOrLess);
    require!(
        !slug.is_empty() && slug.len() <= TradeAccount::SLUG_MAX_LENGTH,
        CoreError::CreationSlugInvalid
    );
    require!(
        !symbol.is_empty() && symbol.len() <= TradeAccount::SYMBOL_MAX_LENGTH,
        CoreError::CreationSymbolInvalid
    );

    // benchmark is whatever the feed answers right now
    let reading = oracle::read_price(
        &ctx.accounts.oracle_program,
        &ctx.accounts.oracle_feed,
        &symbol,
    )?;
    let now = unix_now();

    initialize_trade(
        &mut ctx.accounts.trade_account,
        ctx.accounts.authority.key(),
        ctx.bumps.trade_account,
        slug,
        symbol,
        content,
        direction,
        duration,
        now,
        reading.price,
    )?;

    ctx.accounts.user_account.increment_trades_placed()?;

    transfer::stake_payment(
        &ctx.accounts.authority,
        &ctx.accounts.trade_account.to_account_info(),
        &ctx.accounts.system_program,
        stake,
    )
}

fn initialize_trade(
    trade: &mut TradeAccount,
    maker: Pubkey,
    bump: u8,
    slug: String,
    symbol: String,
    content: u8,
    direction: TradeDirection,
    duration: TradeDuration,
    now: u32,
    benchmark_price: i128,
) -> Result<()> {
    trade.maker = maker;
    trade.taker = Pubkey::default();
    trade.bump = bump;
    trade.slug = slug;
    trade.symbol = symbol;
    trade.content = content;
    trade.direction = direction;
    trade.duration = duration;
    trade.unix_start = now;
    trade.unix_end = now
        .checked_add(duration.to_seconds())
        .ok_or(CoreError::ArithmeticError)?;
    trade.benchmark_price = benchmark_price;
    trade.closing_price = 0_i128;
    trade.order_status = OrderStatus::Open;

    Ok(())
}
