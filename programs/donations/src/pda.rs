//! Program derived addresses of the donation accounts.
//!
//! Every address is `Pubkey::find_program_address` over a fixed namespace seed
//! followed by the owning key and, for donations, the decimal donation id.
//! The `_with_program_id` forms let clients derive addresses for a program
//! deployed under another id.

use crate::config::*;
use anchor_lang::prelude::*;

/// Decimal ASCII form of a donation id, as used in the donation seeds.
pub fn donation_seed_id(donation_id: u64) -> String {
    donation_id.to_string()
}

pub fn find_donation_platform_address_with_program_id(
    authority: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DONATION_PLATFORM_SEED, authority.as_ref()], program_id)
}

pub fn find_donators_address_with_program_id(
    authority: &Pubkey,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DONATORS_SEED, authority.as_ref()], program_id)
}

pub fn find_donation_address_with_program_id(
    donation_platform: &Pubkey,
    donation_id: u64,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            DONATION_SEED,
            donation_platform.as_ref(),
            donation_seed_id(donation_id).as_bytes(),
        ],
        program_id,
    )
}

pub fn find_donation_platform_address(authority: &Pubkey) -> (Pubkey, u8) {
    find_donation_platform_address_with_program_id(authority, &crate::ID)
}

pub fn find_donators_address(authority: &Pubkey) -> (Pubkey, u8) {
    find_donators_address_with_program_id(authority, &crate::ID)
}

pub fn find_donation_address(donation_platform: &Pubkey, donation_id: u64) -> (Pubkey, u8) {
    find_donation_address_with_program_id(donation_platform, donation_id, &crate::ID)
}
