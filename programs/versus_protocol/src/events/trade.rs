use anchor_lang::prelude::*;

#[event]
pub struct TradeTakenEvent {
    pub trade: Pubkey,
    pub taker: Pubkey,
    pub matched_stake: u64,
}

#[event]
pub struct TradeSettledEvent {
    pub trade: Pubkey,
    pub winner: Pubkey,
    pub payout: u64,
    pub closing_price: i128,
}
