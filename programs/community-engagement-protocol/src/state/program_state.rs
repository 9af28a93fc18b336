use anchor_lang::prelude::*;

use crate::constants::*;

// Global protocol configuration
// Singleton PDA: ["program-state"]
#[account]
#[derive(InitSpace)]
pub struct ProgramState {
    // Operator key that gates brand, token achievement and reward creation.
    // Token mints are held by this PDA, so rotating the key keeps them usable.
    // Pubkey::default() until initialize_program runs
    pub tronic_admin: Pubkey,

    pub bump: u8,
}

impl ProgramState {
    pub fn is_initialized(&self) -> bool {
        self.tronic_admin != Pubkey::default()
    }

    pub fn is_tronic_admin(&self, key: &Pubkey) -> bool {
        self.is_initialized() && self.tronic_admin == *key
    }

    // Signer seeds for CPIs where the program state is the mint authority
    pub fn signer_seeds(&self) -> [&[u8]; 2] {
        [PROGRAM_STATE_SEED, std::slice::from_ref(&self.bump)]
    }
}
