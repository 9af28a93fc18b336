// Add Brand Admin Instruction
//
// Any current brand admin may grant admin rights to another key.

use anchor_lang::prelude::*;

use crate::{helpers::*, state::*};

#[derive(Accounts)]
pub struct AddBrandAdmin<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub brand: Box<Account<'info, Brand>>,
}

impl<'info> AddBrandAdmin<'info> {
    pub fn add_brand_admin(&mut self, new_admin: Pubkey) -> Result<()> {
        add_admin(&mut self.brand.admins, &self.authority.key(), new_admin)?;
        self.brand.last_updated = Clock::get()?.unix_timestamp;

        msg!("Brand admin added: {}", new_admin);

        Ok(())
    }
}
