use crate::{error::*, pda::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    authority: Signer<'info>,
    #[account(
        mut,
        address = find_donation_platform_address(&donation_platform.authority).0
            @ DonationError::AddressMismatch,
        has_one = authority @ DonationError::Unauthorized,
    )]
    donation_platform: Account<'info, DonationPlatform>,
}

pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let lamports = ctx.accounts.donation_platform.amount;
    require!(lamports > 0, DonationError::NothingToWithdraw);

    // rent exemption reserve stays on the platform
    transfer(
        &ctx.accounts.donation_platform.to_account_info(),
        &ctx.accounts.authority.to_account_info(),
        lamports,
    )?;
    ctx.accounts.donation_platform.amount = 0;

    msg!(
        "{} withdrew {} lamports from {}",
        ctx.accounts.authority.key(),
        lamports,
        ctx.accounts.donation_platform.key()
    );

    emit!(WithdrawEvent {
        authority: ctx.accounts.authority.key(),
        donation_platform: ctx.accounts.donation_platform.key(),
        amount: lamports,
    });

    Ok(())
}

#[event]
pub struct WithdrawEvent {
    pub authority: Pubkey,
    pub donation_platform: Pubkey,
    pub amount: u64,
}
