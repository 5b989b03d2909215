use anchor_lang::prelude::*;

use crate::context::Claim;
use crate::error::CoreError;
use crate::events::trade::TradeSettledEvent;
use crate::instructions::{oracle, transfer, unix_now};
use crate::state::trade_account::{OrderStatus, TradeAccount, TradeDirection};

pub fn claim(ctx: Context<Claim>) -> Result<()> {
    let now = unix_now();
    validate_claim(&ctx.accounts.trade_account, now)?;

    let reading = oracle::read_price(
        &ctx.accounts.oracle_program,
        &ctx.accounts.oracle_feed,
        &ctx.accounts.trade_account.symbol,
    )?;

    let winner = match winning_side(
        ctx.accounts.trade_account.direction,
        ctx.accounts.trade_account.benchmark_price,
        reading.price,
    ) {
        Side::Maker => ctx.accounts.maker.to_account_info(),
        Side::Taker => ctx.accounts.taker.to_account_info(),
    };

    // the whole pool above the rent reserve goes to the winner
    let trade_account_info = ctx.accounts.trade_account.to_account_info();
    let reserve = transfer::rent_reserve(TradeAccount::SIZE)?;
    let payout = transfer::amount_above_rent_reserve(trade_account_info.lamports(), reserve);
    transfer::lamports_out(&trade_account_info, &winner, payout)?;

    let trade = &mut ctx.accounts.trade_account;
    trade.closing_price = reading.price;
    trade.order_status = OrderStatus::Settled;

    emit!(TradeSettledEvent {
        trade: trade.key(),
        winner: winner.key(),
        payout,
        closing_price: trade.closing_price,
    });

    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Side {
    Maker,
    Taker,
}

/// The maker wagered on movement in `direction`; anything else, the
/// unchanged price included, settles to the taker.
fn winning_side(direction: TradeDirection, benchmark_price: i128, closing_price: i128) -> Side {
    match direction {
        TradeDirection::Up if closing_price > benchmark_price => Side::Maker,
        TradeDirection::Down if closing_price < benchmark_price => Side::Maker,
        _ => Side::Taker,
    }
}

fn validate_claim(trade: &TradeAccount, now: u32) -> Result<()> {
    require!(
        trade.order_status == OrderStatus::Active,
        CoreError::SettlementStatusNotActive
    );
    require!(now >= trade.unix_end, CoreError::SettlementWindowNotElapsed);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::trade_account::mock_trade;
    use test_case::test_case;

    /*
       Test - fn winning_side(direction, benchmark_price, closing_price) -> Side
    */

    #[test_case(TradeDirection::Up, 100, 110, Side::Maker ; "up and price rose")]
    #[test_case(TradeDirection::Up, 100, 90, Side::Taker ; "up and price fell")]
    #[test_case(TradeDirection::Down, 100, 90, Side::Maker ; "down and price fell")]
    #[test_case(TradeDirection::Down, 100, 110, Side::Taker ; "down and price rose")]
    #[test_case(TradeDirection::Up, 100, 100, Side::Taker ; "up and price unchanged")]
    #[test_case(TradeDirection::Down, 100, 100, Side::Taker ; "down and price unchanged")]
    #[test_case(TradeDirection::Down, -50, -60, Side::Maker ; "down with negative prices")]
    #[test_case(TradeDirection::Up, i128::MIN, i128::MAX, Side::Maker ; "up across the full price range")]
    fn test_winning_side(
        direction: TradeDirection,
        benchmark_price: i128,
        closing_price: i128,
        expected: Side,
    ) {
        assert_eq!(
            winning_side(direction, benchmark_price, closing_price),
            expected
        );
    }

    /*
       Test - fn validate_claim(trade, now) -> Result<()>
    */

    #[test]
    fn test_validate_claim_after_window() {
        let mut trade = mock_trade(
            Pubkey::new_unique(),
            TradeDirection::Up,
            OrderStatus::Active,
            1_000,
            1_300,
        );
        trade.taker = Pubkey::new_unique();

        // exactly at the window end counts as elapsed
        assert!(validate_claim(&trade, 1_300).is_ok());
        assert!(validate_claim(&trade, 2_000).is_ok());
    }

    #[test]
    fn test_validate_claim_before_window_end() {
        let mut trade = mock_trade(
            Pubkey::new_unique(),
            TradeDirection::Up,
            OrderStatus::Active,
            1_000,
            1_300,
        );
        trade.taker = Pubkey::new_unique();

        assert!(validate_claim(&trade, 1_299).is_err());
    }

    #[test]
    fn test_validate_claim_not_active() {
        // Open: never taken; Settled: already claimed once
        for order_status in [OrderStatus::Open, OrderStatus::Settled] {
            let trade = mock_trade(
                Pubkey::new_unique(),
                TradeDirection::Up,
                order_status,
                1_000,
                1_300,
            );

            assert!(validate_claim(&trade, 2_000).is_err());
        }
    }
}
