use anchor_lang::prelude::*;

#[constant]
pub const DONATION_PLATFORM_SEED: &[u8] = b"donation_platform";
#[constant]
pub const DONATORS_SEED: &[u8] = b"donators";
#[constant]
pub const DONATION_SEED: &[u8] = b"donation";
#[constant]
pub const DONATORS_CAPACITY: usize = 100;
