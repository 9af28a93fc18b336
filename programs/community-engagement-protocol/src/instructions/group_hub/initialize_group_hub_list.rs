use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializeGroupHubList<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + GroupHubList::INIT_SPACE,
        seeds = [GROUP_HUB_LIST_SEED],
        bump
    )]
    pub group_hub_list: Box<Account<'info, GroupHubList>>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeGroupHubList<'info> {
    pub fn initialize_group_hub_list(&mut self, bumps: &InitializeGroupHubListBumps) -> Result<()> {
        self.group_hub_list.set_inner(GroupHubList {
            group_hubs: Vec::new(),
            bump: bumps.group_hub_list,
        });

        msg!("Group hub list initialized: {}", self.group_hub_list.key());

        Ok(())
    }
}
