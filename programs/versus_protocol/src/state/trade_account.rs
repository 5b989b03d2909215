use crate::state::type_size::*;
use crate::versus_protocol::{DURATION_SECONDS, SEED_TRADE};
use anchor_lang::prelude::*;

/// One account per `(maker, slug)` pair. Field order is the wire order read
/// by off-chain decoders, so fields must not be reordered.
#[account]
#[derive(Debug, PartialEq, Eq)]
pub struct TradeAccount {
    pub maker: Pubkey,
    pub taker: Pubkey, // all-zero until the trade is taken
    pub bump: u8,
    pub slug: String,
    pub symbol: String,
    pub content: u8,
    pub direction: TradeDirection,
    pub duration: TradeDuration,
    pub unix_start: u32,
    pub unix_end: u32,
    pub benchmark_price: i128,
    pub closing_price: i128,
    pub order_status: OrderStatus,
}

impl TradeAccount {
    // slug doubles as a derivation seed, so it is bound by the seed limit
    pub const SLUG_MAX_LENGTH: usize = 32;
    pub const SYMBOL_MAX_LENGTH: usize = 32;

    pub const SIZE: usize = DISCRIMINATOR_SIZE
        + (PUB_KEY_SIZE * 2) // maker, taker
        + U8_SIZE // bump
        + vec_size(CHAR_SIZE, TradeAccount::SLUG_MAX_LENGTH) // slug
        + vec_size(CHAR_SIZE, TradeAccount::SYMBOL_MAX_LENGTH) // symbol
        + U8_SIZE // content
        + (ENUM_SIZE * 2) // direction, duration
        + (U32_SIZE * 2) // unix_start, unix_end
        + (I128_SIZE * 2) // benchmark_price, closing_price
        + ENUM_SIZE; // order_status

    /// Derives the canonical `(address, bump)` for a maker's trade under a
    /// slug. The result is a pure function of the inputs; slug uniqueness per
    /// maker is enforced by the derivation itself.
    pub fn pda(slug: &str, maker: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[SEED_TRADE, slug.as_bytes(), maker.as_ref()],
            program_id,
        )
    }

    pub fn has_taker(&self) -> bool {
        self.taker != Pubkey::default()
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Open,    // waiting on a taker
    Active,  // taker matched, window running
    Settled, // pool paid out, terminal
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeDirection {
    Down,
    Up,
}

#[derive(AnchorSerialize, AnchorDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeDuration {
    Short,
    Medium,
    Long,
}

impl TradeDuration {
    pub fn to_seconds(self) -> u32 {
        DURATION_SECONDS[self as usize]
    }
}

#[cfg(test)]
pub fn mock_trade(
    maker: Pubkey,
    direction: TradeDirection,
    order_status: OrderStatus,
    unix_start: u32,
    unix_end: u32,
) -> TradeAccount {
    TradeAccount {
        maker,
        taker: Pubkey::default(),
        bump: 255,
        slug: String::from("trade1"),
        symbol: String::from("SOL / USD"),
        content: 1,
        direction,
        duration: TradeDuration::Short,
        unix_start,
        unix_end,
        benchmark_price: 100_i128,
        closing_price: 0_i128,
        order_status,
    }
}
