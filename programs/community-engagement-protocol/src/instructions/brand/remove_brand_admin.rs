// Remove Brand Admin Instruction
//
// Any current brand admin may revoke another admin, never the last one.

use anchor_lang::prelude::*;

use crate::{helpers::*, state::*};

#[derive(Accounts)]
pub struct RemoveBrandAdmin<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub brand: Box<Account<'info, Brand>>,
}

impl<'info> RemoveBrandAdmin<'info> {
    pub fn remove_brand_admin(&mut self, admin: Pubkey) -> Result<()> {
        remove_admin(&mut self.brand.admins, &self.authority.key(), &admin)?;
        self.brand.last_updated = Clock::get()?.unix_timestamp;

        msg!("Brand admin removed: {}", admin);

        Ok(())
    }
}
