use crate::{config::*, error::*, pda::*, state::*, utils::*};
use anchor_lang::{
    prelude::*,
    solana_program::{program::invoke, system_instruction},
};

#[derive(Accounts)]
pub struct Donate<'info> {
    #[account(mut)]
    authority: Signer<'info>,
    /// CHECK: address is checked and the account is created by the handler
    #[account(mut)]
    donation: UncheckedAccount<'info>,
    #[account(mut)]
    donation_platform: Account<'info, DonationPlatform>,
    #[account(mut)]
    donators: Account<'info, Donators>,
    system_program: Program<'info, System>,
}

/// Returns the bump of the donation address.
fn check_addresses(accounts: &Donate, donation_id: u64) -> Result<u8> {
    let platform_authority = accounts.donation_platform.authority;
    require_keys_eq!(
        accounts.donation_platform.key(),
        find_donation_platform_address(&platform_authority).0,
        DonationError::AddressMismatch
    );
    require_keys_eq!(
        accounts.donators.key(),
        find_donators_address(&platform_authority).0,
        DonationError::AddressMismatch
    );

    let (donation, bump) = find_donation_address(&accounts.donation_platform.key(), donation_id);
    require_keys_eq!(
        accounts.donation.key(),
        donation,
        DonationError::AddressMismatch
    );

    Ok(bump)
}

fn create_donation(accounts: &Donate, donation_id: u64, bump: u8, lamports: u64) -> Result<()> {
    let donation = accounts.donation.to_account_info();
    let donation_platform = accounts.donation_platform.key();
    let seed_id = donation_seed_id(donation_id);

    create_pda_account(
        &accounts.authority.to_account_info(),
        &donation,
        &accounts.system_program.to_account_info(),
        &[
            DONATION_SEED,
            donation_platform.as_ref(),
            seed_id.as_bytes(),
            &[bump],
        ],
        8 + Donation::SPACE,
    )?;
    write_account(
        &donation,
        &Donation {
            authority: accounts.authority.key(),
            amount: lamports,
        },
    )
}

fn transfer_to_platform(accounts: &Donate, lamports: u64) -> Result<()> {
    invoke(
        &system_instruction::transfer(
            &accounts.authority.key(),
            &accounts.donation_platform.key(),
            lamports,
        ),
        &[
            accounts.authority.to_account_info(),
            accounts.donation_platform.to_account_info(),
        ],
    )?;
    Ok(())
}

fn record_donation(accounts: &mut Donate, lamports: u64) -> Result<()> {
    let authority = accounts.authority.key();

    let donation_platform = &mut accounts.donation_platform;
    donation_platform.amount = donation_platform
        .amount
        .checked_add(lamports)
        .ok_or(DonationError::Overflow)?;
    donation_platform.counter = donation_platform
        .counter
        .checked_add(1)
        .ok_or(DonationError::Overflow)?;

    add_donator(
        &mut accounts.donators.donators,
        DONATORS_CAPACITY,
        authority,
        lamports,
    )
}

pub fn donate(ctx: Context<Donate>, donation_id: u64, lamports: u64) -> Result<()> {
    require!(lamports > 0, DonationError::InvalidAmount);
    let donation_bump = check_addresses(ctx.accounts, donation_id)?;
    require_eq!(
        donation_id,
        ctx.accounts.donation_platform.counter,
        DonationError::StaleDonationId
    );

    create_donation(ctx.accounts, donation_id, donation_bump, lamports)?;
    record_donation(ctx.accounts, lamports)?;
    transfer_to_platform(ctx.accounts, lamports)?;

    msg!(
        "{} donated {} lamports to {}",
        ctx.accounts.authority.key(),
        lamports,
        ctx.accounts.donation_platform.key()
    );

    emit!(DonateEvent {
        authority: ctx.accounts.authority.key(),
        donation_platform: ctx.accounts.donation_platform.key(),
        donation: ctx.accounts.donation.key(),
        donation_id,
        amount: lamports,
    });

    Ok(())
}

#[event]
pub struct DonateEvent {
    pub authority: Pubkey,
    pub donation_platform: Pubkey,
    pub donation: Pubkey,
    pub donation_id: u64,
    pub amount: u64,
}
