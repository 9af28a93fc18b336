use anchor_lang::prelude::*;

use crate::{helpers::*, state::*};

#[derive(Accounts)]
pub struct ListGroupHubAchievements<'info> {
    pub group_hub: Box<Account<'info, GroupHub>>,
}

impl<'info> ListGroupHubAchievements<'info> {
    pub fn list_group_hub_achievements(&self, offset: u32) -> Result<Vec<Pubkey>> {
        Ok(page(&self.group_hub.achievements, offset))
    }
}
