use crate::instructions::*;
use anchor_lang::prelude::*;

pub mod config;
pub mod error;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod utils;

declare_id!("don2A9YodeAqq83ZGUjrXWTvjFBD7FeTUDQMA8XRX3Z");

#[program]
pub mod donations {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    /// `donation_id` must be the current counter of the platform.
    pub fn donate(ctx: Context<Donate>, donation_id: u64, amount: u64) -> Result<()> {
        instructions::donate(ctx, donation_id, amount)
    }

    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw(ctx)
    }
}
