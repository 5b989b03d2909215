use crate::error::CoreError;
use crate::state::trade_account::TradeAccount;
use crate::state::user_account::UserAccount;
use crate::versus_protocol::{SEED_TRADE, SEED_USER};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::system_program;

#[derive(Accounts)]
pub struct CreateUser<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        init,
        seeds = [SEED_USER, authority.key().as_ref()],
        bump,
        payer = authority,
        space = UserAccount::SIZE,
    )]
    pub user_account: Account<'info, UserAccount>,
    #[account(address = system_program::ID)]
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [SEED_USER, authority.key().as_ref()],
        bump,
    )]
    pub user_account: Account<'info, UserAccount>,
}

#[derive(Accounts)]
#[instruction(slug: String)]
pub struct MakeTrade<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [SEED_USER, authority.key().as_ref()],
        bump,
    )]
    pub user_account: Account<'info, UserAccount>,
    #[account(
        init,
        seeds = [
            SEED_TRADE,
            slug.as_ref(),
            authority.key().as_ref()
        ],
        bump,
        payer = authority,
        space = TradeAccount::SIZE,
    )]
    pub trade_account: Account<'info, TradeAccount>,
    #[account(address = system_program::ID)]
    pub system_program: Program<'info, System>,
    /// CHECK: validated against the oracle program and the trade symbol at read time
    pub oracle_feed: UncheckedAccount<'info>,
    /// CHECK: the program that must own `oracle_feed`; the read CPIs into it
    pub oracle_program: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct TakeTrade<'info> {
    #[account(mut)]
    pub taker: Signer<'info>,
    #[account(
        mut,
        seeds = [SEED_USER, taker.key().as_ref()],
        bump,
    )]
    pub user_account: Account<'info, UserAccount>,
    #[account(
        mut,
        seeds = [
            SEED_TRADE,
            trade_account.slug.as_ref(),
            trade_account.maker.as_ref()
        ],
        bump = trade_account.bump,
    )]
    pub trade_account: Account<'info, TradeAccount>,
    #[account(address = system_program::ID)]
    pub system_program: Program<'info, System>,
    /// CHECK: validated against the oracle program and the trade symbol at read time
    pub oracle_feed: UncheckedAccount<'info>,
    /// CHECK: the program that must own `oracle_feed`; the read CPIs into it
    pub oracle_program: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct Claim<'info> {
    pub caller: Signer<'info>,
    #[account(
        mut,
        seeds = [
            SEED_TRADE,
            trade_account.slug.as_ref(),
            trade_account.maker.as_ref()
        ],
        bump = trade_account.bump,
    )]
    pub trade_account: Account<'info, TradeAccount>,
    #[account(mut, address = trade_account.maker @ CoreError::SettlementMakerMismatch)]
    pub maker: SystemAccount<'info>,
    #[account(mut, address = trade_account.taker @ CoreError::SettlementTakerMismatch)]
    pub taker: SystemAccount<'info>,
    #[account(address = system_program::ID)]
    pub system_program: Program<'info, System>,
    /// CHECK: validated against the oracle program and the trade symbol at read time
    pub oracle_feed: UncheckedAccount<'info>,
    /// CHECK: the program that must own `oracle_feed`; the read CPIs into it
    pub oracle_program: UncheckedAccount<'info>,
}
