use crate::config::*;
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Donator {
    pub authority: Pubkey,
    pub amount: u64,
}
impl Donator {
    pub const SPACE: usize = 32 + 8;
}

#[account]
#[derive(Debug)]
pub struct DonationPlatform {
    pub authority: Pubkey,
    pub amount: u64,
    pub counter: u64,
}
impl DonationPlatform {
    pub const SPACE: usize = 32 + 8 + 8;

    /// Id the next `donate` must carry.
    pub fn next_donation_id(&self) -> u64 {
        self.counter
    }
}

/// Write-once record of a single donation.
#[account]
#[derive(Debug)]
pub struct Donation {
    pub authority: Pubkey,
    pub amount: u64,
}
impl Donation {
    pub const SPACE: usize = 32 + 8;
}

#[account]
#[derive(Debug)]
pub struct Donators {
    pub donators: Vec<Donator>,
}
impl Donators {
    pub const fn space(capacity: usize) -> usize {
        4 + capacity * Donator::SPACE
    }

    pub const SPACE: usize = Donators::space(DONATORS_CAPACITY);

    pub fn find(&self, authority: &Pubkey) -> Option<&Donator> {
        self.donators.iter().find(|d| d.authority == *authority)
    }

    /// Sum of all contributions, `None` if it does not fit into `u64`.
    pub fn total(&self) -> Option<u64> {
        self.donators
            .iter()
            .try_fold(0u64, |acc, d| acc.checked_add(d.amount))
    }
}
