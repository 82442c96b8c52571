use crate::{ctx::*, utils::*};
use anchor_lang::{prelude::*, InstructionData};
use core::result::Result;
use donations::{pda::*, state::*};
use solana_program::{instruction::Instruction, system_program};
use solana_program_test::{BanksClientError, ProgramTestContext};
use solana_sdk::{signature::Keypair, signer::Signer};

pub async fn fetch_data(
    ptc: &mut ProgramTestContext,
    address: Pubkey,
) -> Result<Option<Vec<u8>>, BanksClientError> {
    Ok(ptc
        .banks_client
        .get_account(address)
        .await?
        .map(|account| account.data))
}

pub async fn fetch<T: AccountDeserialize>(
    ptc: &mut ProgramTestContext,
    address: Pubkey,
) -> Result<T, BanksClientError> {
    T::try_deserialize(
        &mut &*fetch_data(ptc, address)
            .await?
            .ok_or(BanksClientError::ClientError("Account not present"))?,
    )
    .map_err(|_| BanksClientError::ClientError("Failed to deserialize account"))
}

pub async fn fetch_donation_platform(
    ptc: &mut ProgramTestContext,
    ctx: &Ctx,
) -> Result<DonationPlatform, BanksClientError> {
    fetch(ptc, ctx.donation_platform).await
}

pub async fn fetch_donators(
    ptc: &mut ProgramTestContext,
    ctx: &Ctx,
) -> Result<Vec<Donator>, BanksClientError> {
    let donators: Donators = fetch(ptc, ctx.donators).await?;
    Ok(donators.donators)
}

pub async fn fetch_donation(
    ptc: &mut ProgramTestContext,
    ctx: &Ctx,
    donation_id: u64,
) -> Result<Donation, BanksClientError> {
    fetch(ptc, find_donation(ctx, donation_id)).await
}

pub async fn get_balance(
    ptc: &mut ProgramTestContext,
    address: Pubkey,
) -> Result<u64, BanksClientError> {
    ptc.banks_client.get_balance(address).await
}

/// Lamports of the platform above its rent exemption reserve.
pub async fn get_donation_platform_balance(
    ptc: &mut ProgramTestContext,
    ctx: &Ctx,
) -> Result<u64, BanksClientError> {
    Ok(get_balance(ptc, ctx.donation_platform).await?
        - ptc
            .banks_client
            .get_rent()
            .await?
            .minimum_balance(8 + DonationPlatform::SPACE))
}

pub fn find_donation(ctx: &Ctx, donation_id: u64) -> Pubkey {
    find_donation_address(&ctx.donation_platform, donation_id).0
}

pub fn initialize_instruction(
    authority: Pubkey,
    donation_platform: Pubkey,
    donators: Pubkey,
) -> Instruction {
    Instruction {
        program_id: donations::ID,
        data: donations::instruction::Initialize {}.data(),
        accounts: donations::accounts::Initialize {
            authority,
            donation_platform,
            donators,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
    }
}

pub fn donate_instruction(
    authority: Pubkey,
    donation_platform: Pubkey,
    donators: Pubkey,
    donation_id: u64,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: donations::ID,
        data: donations::instruction::Donate {
            donation_id,
            amount,
        }
        .data(),
        accounts: donations::accounts::Donate {
            authority,
            donation: find_donation_address(&donation_platform, donation_id).0,
            donation_platform,
            donators,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
    }
}

pub fn withdraw_instruction(authority: Pubkey, donation_platform: Pubkey) -> Instruction {
    Instruction {
        program_id: donations::ID,
        data: donations::instruction::Withdraw {}.data(),
        accounts: donations::accounts::Withdraw {
            authority,
            donation_platform,
        }
        .to_account_metas(None),
    }
}

pub async fn initialize(ptc: &mut ProgramTestContext, ctx: &Ctx) -> Result<(), BanksClientError> {
    process_instruction(
        ptc,
        initialize_instruction(ctx.authority.pubkey(), ctx.donation_platform, ctx.donators),
        &ctx.authority,
        &ctx.authority,
    )
    .await
}

/// Creates the platform of `authority` itself, apart from the one in `ctx`.
pub async fn initialize_for(
    ptc: &mut ProgramTestContext,
    authority: &Keypair,
) -> Result<(), BanksClientError> {
    process_instruction(
        ptc,
        initialize_instruction(
            authority.pubkey(),
            find_donation_platform_address(&authority.pubkey()).0,
            find_donators_address(&authority.pubkey()).0,
        ),
        authority,
        authority,
    )
    .await
}

pub async fn donate(
    ptc: &mut ProgramTestContext,
    ctx: &Ctx,
    donor: &Keypair,
    donation_id: u64,
    amount: u64,
) -> Result<(), BanksClientError> {
    process_instruction(
        ptc,
        donate_instruction(
            donor.pubkey(),
            ctx.donation_platform,
            ctx.donators,
            donation_id,
            amount,
        ),
        donor,
        donor,
    )
    .await
}

/// Donates with the id the platform currently expects.
pub async fn donate_next(
    ptc: &mut ProgramTestContext,
    ctx: &Ctx,
    donor: &Keypair,
    amount: u64,
) -> Result<(), BanksClientError> {
    let donation_id = fetch_donation_platform(ptc, ctx)
        .await?
        .next_donation_id();
    donate(ptc, ctx, donor, donation_id, amount).await
}

pub async fn withdraw(
    ptc: &mut ProgramTestContext,
    ctx: &Ctx,
    authority: &Keypair,
    payer: &Keypair,
) -> Result<(), BanksClientError> {
    process_instruction(
        ptc,
        withdraw_instruction(authority.pubkey(), ctx.donation_platform),
        authority,
        payer,
    )
    .await
}
