use anchor_lang::prelude::*;

use crate::state::*;

#[derive(Accounts)]
pub struct GetGroupHubInfo<'info> {
    pub group_hub: Box<Account<'info, GroupHub>>,
}

impl<'info> GetGroupHubInfo<'info> {
    pub fn get_group_hub_info(&self) -> Result<GroupHubInfo> {
        Ok(self.group_hub.info())
    }
}
