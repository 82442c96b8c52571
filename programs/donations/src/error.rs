use anchor_lang::prelude::*;

#[error_code]
pub enum DonationError {
    /// 6000 0x1770
    #[msg("Donation platform is already initialized")]
    AlreadyInitialized,
    /// 6001 0x1771
    #[msg("Account address does not match its derivation")]
    AddressMismatch,
    /// 6002 0x1772
    #[msg("Amount of lamports must be more than zero")]
    InvalidAmount,
    /// 6003 0x1773
    #[msg("Only the platform authority may withdraw")]
    Unauthorized,
    /// 6004 0x1774
    #[msg("There is no lamports to withdraw")]
    NothingToWithdraw,
    /// 6005 0x1775
    #[msg("Donators registry is full")]
    RegistryFull,
    /// 6006 0x1776
    #[msg("Donation id does not match the platform counter")]
    StaleDonationId,
    /// 6007 0x1777
    #[msg("Arithmetic overflow")]
    Overflow,
}
