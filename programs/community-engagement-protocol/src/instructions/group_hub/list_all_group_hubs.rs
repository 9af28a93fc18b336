use anchor_lang::prelude::*;

use crate::{constants::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct ListAllGroupHubs<'info> {
    #[account(seeds = [GROUP_HUB_LIST_SEED], bump = group_hub_list.bump)]
    pub group_hub_list: Box<Account<'info, GroupHubList>>,
}

impl<'info> ListAllGroupHubs<'info> {
    pub fn list_all_group_hubs(&self, offset: u32) -> Result<Vec<Pubkey>> {
        Ok(page(&self.group_hub_list.group_hubs, offset))
    }
}
