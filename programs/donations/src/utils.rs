use crate::{error::*, state::*};
use anchor_lang::{
    prelude::*,
    solana_program::{
        program::{invoke, invoke_signed},
        system_instruction,
    },
};

/// Moves lamports between accounts without a system program call, so `from`
/// must be owned by this program.
pub fn transfer(from: &AccountInfo, to: &AccountInfo, lamports: u64) -> Result<()> {
    **from.try_borrow_mut_lamports()? = (from.lamports())
        .checked_sub(lamports)
        .ok_or(ProgramError::InsufficientFunds)?;
    **to.try_borrow_mut_lamports()? = (to.lamports())
        .checked_add(lamports)
        .ok_or(DonationError::Overflow)?;
    Ok(())
}

/// Creates a rent exempt account of `space` bytes at the program derived
/// address `target`, owned by this program. `signer_seeds` must include the bump.
pub fn create_pda_account<'info>(
    payer: &AccountInfo<'info>,
    target: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    signer_seeds: &[&[u8]],
    space: usize,
) -> Result<()> {
    let lamports = Rent::get()?.minimum_balance(space);
    let current_lamports = target.lamports();

    if current_lamports == 0 {
        invoke_signed(
            &system_instruction::create_account(
                payer.key,
                target.key,
                lamports,
                space as u64,
                &crate::ID,
            ),
            &[payer.clone(), target.clone(), system_program.clone()],
            &[signer_seeds],
        )?;
        return Ok(());
    }

    // somebody has already sent lamports to the address
    let top_up = lamports.saturating_sub(current_lamports);
    if top_up > 0 {
        invoke(
            &system_instruction::transfer(payer.key, target.key, top_up),
            &[payer.clone(), target.clone(), system_program.clone()],
        )?;
    }
    invoke_signed(
        &system_instruction::allocate(target.key, space as u64),
        &[target.clone(), system_program.clone()],
        &[signer_seeds],
    )?;
    invoke_signed(
        &system_instruction::assign(target.key, &crate::ID),
        &[target.clone(), system_program.clone()],
        &[signer_seeds],
    )?;

    Ok(())
}

/// Writes `account` with its discriminator into the data of `target`.
pub fn write_account<T: AccountSerialize>(target: &AccountInfo, account: &T) -> Result<()> {
    let mut data = target.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data;
    account.try_serialize(&mut dst)
}

/// Credits `amount` to the entry of `authority`, appending a new entry at the
/// end if there is none. Entries never move.
pub fn add_donator(
    donators: &mut Vec<Donator>,
    capacity: usize,
    authority: Pubkey,
    amount: u64,
) -> Result<()> {
    if let Some(donator) = donators.iter_mut().find(|d| d.authority == authority) {
        donator.amount = donator
            .amount
            .checked_add(amount)
            .ok_or(DonationError::Overflow)?;
        return Ok(());
    }

    if donators.len() >= capacity {
        return err!(DonationError::RegistryFull);
    }
    donators.push(Donator { authority, amount });

    Ok(())
}
