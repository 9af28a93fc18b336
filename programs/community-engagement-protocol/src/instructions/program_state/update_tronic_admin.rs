// Update Tronic Admin Instruction
//
// Hands the Tronic admin role to a new key. Only the current admin may sign.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct UpdateTronicAdmin<'info> {
    pub current_admin: Signer<'info>,

    #[account(
        mut,
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        constraint = program_state.is_tronic_admin(&current_admin.key()) @ CepError::UnauthorizedTronicAdmin,
    )]
    pub program_state: Account<'info, ProgramState>,
}

impl<'info> UpdateTronicAdmin<'info> {
    pub fn update_tronic_admin(&mut self, new_admin: Pubkey) -> Result<()> {
        require!(new_admin != Pubkey::default(), CepError::InvalidNewAdmin);

        let old_admin = self.program_state.tronic_admin;
        self.program_state.tronic_admin = new_admin;

        msg!("Tronic admin rotated from {} to {}", old_admin, new_admin);

        Ok(())
    }
}
