// Update Brand Instruction
//
// Tronic admin edits a brand's name and description.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct UpdateBrand<'info> {
    pub authority: Signer<'info>,

    #[account(
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        constraint = program_state.is_tronic_admin(&authority.key()) @ CepError::UnauthorizedTronicAdmin,
    )]
    pub program_state: Account<'info, ProgramState>,

    // Address stays tied to the creation-time name, so seeds are not re-derived
    #[account(mut)]
    pub brand: Box<Account<'info, Brand>>,
}

impl<'info> UpdateBrand<'info> {
    pub fn update_brand(&mut self, name: String, description: String) -> Result<()> {
        validate_name(&name, MAX_NAME_LENGTH)?;
        validate_description(&description)?;

        self.brand.name = name;
        self.brand.description = description;
        self.brand.last_updated = Clock::get()?.unix_timestamp;

        msg!("Brand updated: {} ({})", self.brand.name, self.brand.key());

        Ok(())
    }
}
