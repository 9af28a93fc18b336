// Initialize Program Instruction
//
// Creates the global ProgramState PDA and records the Tronic admin.
// The state account is created on first call; once an admin is set the
// instruction can never run again, rotation goes through update_tronic_admin.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct InitializeProgram<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init_if_needed,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + ProgramState::INIT_SPACE,
        seeds = [PROGRAM_STATE_SEED],
        bump
    )]
    pub program_state: Account<'info, ProgramState>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeProgram<'info> {
    pub fn initialize_program(
        &mut self,
        initial_admin: Pubkey,
        bumps: &InitializeProgramBumps,
    ) -> Result<()> {
        require!(
            initial_admin != Pubkey::default(),
            CepError::InvalidInitialAdmin
        );
        require!(
            !self.program_state.is_initialized(),
            CepError::AlreadyInitialized
        );

        self.program_state.set_inner(ProgramState {
            tronic_admin: initial_admin,
            bump: bumps.program_state,
        });

        msg!("Program initialized with Tronic admin {}", initial_admin);

        Ok(())
    }
}
