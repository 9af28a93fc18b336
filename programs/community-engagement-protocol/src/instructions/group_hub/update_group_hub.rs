use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct UpdateGroupHub<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        constraint = group_hub.is_admin(&authority.key()) @ CepError::Unauthorized,
    )]
    pub group_hub: Box<Account<'info, GroupHub>>,
}

impl<'info> UpdateGroupHub<'info> {
    pub fn update_group_hub(&mut self, name: String, description: String) -> Result<()> {
        validate_name(&name, MAX_GROUP_HUB_NAME_LENGTH)?;
        validate_description(&description)?;

        self.group_hub.name = name;
        self.group_hub.description = description;
        self.group_hub.last_updated = Clock::get()?.unix_timestamp;

        msg!("Group hub updated: {} ({})", self.group_hub.name, self.group_hub.key());

        Ok(())
    }
}
