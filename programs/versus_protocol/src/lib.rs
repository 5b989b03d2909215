use anchor_lang::prelude::*;

use crate::context::*;
use crate::state::trade_account::{TradeDirection, TradeDuration};

pub mod context;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

declare_id!("XX84Z5ozTcRcmvS72kw9PHmqqBNrYDHX9q21iu5jcSc");

#[program]
pub mod versus_protocol {
    use super::*;

    pub const SEED_USER: &[u8] = b"user";
    pub const SEED_TRADE: &[u8] = b"trade";

    /// Seconds per duration bucket: Short, Medium, Long.
    /// Deployment-level configuration, only ever read through
    /// `TradeDuration::to_seconds`.
    pub const DURATION_SECONDS: [u32; 3] = [300, 3_600, 86_400];

    pub fn create_user(ctx: Context<CreateUser>) -> Result<()> {
        instructions::user::create_user(&mut ctx.accounts.user_account)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::user::withdraw(ctx)
    }

    pub fn make_trade(
        ctx: Context<MakeTrade>,
        slug: String,
        symbol: String,
        content: u8,
        direction: TradeDirection,
        duration: TradeDuration,
        stake: u64,
    ) -> Result<()> {
        instructions::trade::make_trade(ctx, slug, symbol, content, direction, duration, stake)
    }

    pub fn take_trade(ctx: Context<TakeTrade>) -> Result<()> {
        instructions::trade::take_trade(ctx)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::trade::claim(ctx)
    }
}
