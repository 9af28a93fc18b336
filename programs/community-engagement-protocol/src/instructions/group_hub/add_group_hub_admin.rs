use anchor_lang::prelude::*;

use crate::{helpers::*, state::*};

#[derive(Accounts)]
pub struct AddGroupHubAdmin<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub group_hub: Box<Account<'info, GroupHub>>,
}

impl<'info> AddGroupHubAdmin<'info> {
    pub fn add_group_hub_admin(&mut self, new_admin: Pubkey) -> Result<()> {
        add_admin(&mut self.group_hub.admins, &self.authority.key(), new_admin)?;
        self.group_hub.last_updated = Clock::get()?.unix_timestamp;

        msg!("Group hub admin added: {}", new_admin);

        Ok(())
    }
}
