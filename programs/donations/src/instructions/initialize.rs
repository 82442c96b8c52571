use crate::{config::*, error::*, pda::*, state::*, utils::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    authority: Signer<'info>,
    /// CHECK: address is checked and the account is created by the handler
    #[account(mut)]
    donation_platform: UncheckedAccount<'info>,
    /// CHECK: address is checked and the account is created by the handler
    #[account(mut)]
    donators: UncheckedAccount<'info>,
    system_program: Program<'info, System>,
}

fn is_created(account: &AccountInfo) -> bool {
    account.owner == &crate::ID || !account.data_is_empty()
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let authority = ctx.accounts.authority.key();

    let (donation_platform_address, donation_platform_bump) =
        find_donation_platform_address(&authority);
    require_keys_eq!(
        ctx.accounts.donation_platform.key(),
        donation_platform_address,
        DonationError::AddressMismatch
    );
    let (donators_address, donators_bump) = find_donators_address(&authority);
    require_keys_eq!(
        ctx.accounts.donators.key(),
        donators_address,
        DonationError::AddressMismatch
    );

    let payer = ctx.accounts.authority.to_account_info();
    let donation_platform = ctx.accounts.donation_platform.to_account_info();
    let donators = ctx.accounts.donators.to_account_info();
    let system_program = ctx.accounts.system_program.to_account_info();

    if is_created(&donation_platform) || is_created(&donators) {
        return err!(DonationError::AlreadyInitialized);
    }

    create_pda_account(
        &payer,
        &donation_platform,
        &system_program,
        &[
            DONATION_PLATFORM_SEED,
            authority.as_ref(),
            &[donation_platform_bump],
        ],
        8 + DonationPlatform::SPACE,
    )?;
    write_account(
        &donation_platform,
        &DonationPlatform {
            authority,
            amount: 0,
            counter: 0,
        },
    )?;

    create_pda_account(
        &payer,
        &donators,
        &system_program,
        &[DONATORS_SEED, authority.as_ref(), &[donators_bump]],
        8 + Donators::SPACE,
    )?;
    write_account(
        &donators,
        &Donators {
            donators: Vec::new(),
        },
    )?;

    msg!("Donation platform of {} is initialized", authority);

    emit!(InitializeEvent {
        authority,
        donation_platform: donation_platform_address,
        donators: donators_address,
    });

    Ok(())
}

#[event]
pub struct InitializeEvent {
    pub authority: Pubkey,
    pub donation_platform: Pubkey,
    pub donators: Pubkey,
}
