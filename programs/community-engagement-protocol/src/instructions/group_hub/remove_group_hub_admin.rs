use anchor_lang::prelude::*;

use crate::{helpers::*, state::*};

#[derive(Accounts)]
pub struct RemoveGroupHubAdmin<'info> {
    pub authority: Signer<'info>,

    #[account(mut)]
    pub group_hub: Box<Account<'info, GroupHub>>,
}

impl<'info> RemoveGroupHubAdmin<'info> {
    pub fn remove_group_hub_admin(&mut self, admin: Pubkey) -> Result<()> {
        remove_admin(&mut self.group_hub.admins, &self.authority.key(), &admin)?;
        self.group_hub.last_updated = Clock::get()?.unix_timestamp;

        msg!("Group hub admin removed: {}", admin);

        Ok(())
    }
}
