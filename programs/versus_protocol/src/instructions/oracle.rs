use anchor_lang::prelude::*;
use chainlink_solana as chainlink;

use crate::error::CoreError;

pub struct OracleReading {
    pub price: i128,
    pub timestamp: u32,
}

/// Reads the latest round from a price feed after proving the feed belongs to
/// the supplied oracle program and still describes `symbol`.
///
/// Staleness is not checked here: the protocol records whatever answer is
/// current at execution time, and callers compare round timestamps off-chain.
pub fn read_price<'info>(
    oracle_program: &AccountInfo<'info>,
    oracle_feed: &AccountInfo<'info>,
    symbol: &str,
) -> Result<OracleReading> {
    verify_feed(oracle_program, oracle_feed, symbol)?;

    let round = chainlink::latest_round_data(oracle_program.clone(), oracle_feed.clone())?;
    Ok(OracleReading {
        price: round.answer,
        timestamp: round.timestamp,
    })
}

/// Trade accounts store a symbol, not a feed address, so every
/// oracle-touching instruction must bind the supplied feed to that symbol.
/// Without this a caller could settle a trade against another market's feed.
pub fn verify_feed<'info>(
    oracle_program: &AccountInfo<'info>,
    oracle_feed: &AccountInfo<'info>,
    symbol: &str,
) -> Result<()> {
    verify_feed_owner(oracle_feed.owner, oracle_program.key)?;

    let description = chainlink::description(oracle_program.clone(), oracle_feed.clone())?;
    require!(description == symbol, CoreError::OracleSymbolMismatch);
    Ok(())
}

fn verify_feed_owner(feed_owner: &Pubkey, oracle_program: &Pubkey) -> Result<()> {
    require!(
        feed_owner == oracle_program,
        CoreError::OracleFeedOwnerMismatch
    );
    Ok(())
}
