// Create Group Hub Instruction
//
// Anyone may open a group hub at a fresh keypair address and becomes its
// first admin. The hub is appended to the global group hub list.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct CreateGroupHub<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + GroupHub::INIT_SPACE,
    )]
    pub group_hub: Box<Account<'info, GroupHub>>,

    #[account(
        init_if_needed,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + GroupHubList::INIT_SPACE,
        seeds = [GROUP_HUB_LIST_SEED],
        bump
    )]
    pub group_hub_list: Box<Account<'info, GroupHubList>>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateGroupHub<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn create_group_hub(
        &mut self,
        name: String,
        description: String,
        website: Option<String>,
        social_media: Option<String>,
        category: Option<String>,
        tags: Vec<String>,
        bumps: &CreateGroupHubBumps,
    ) -> Result<()> {
        validate_name(&name, MAX_GROUP_HUB_NAME_LENGTH)?;
        validate_description(&description)?;
        validate_profile_metadata(&website, &social_media, &category, &tags)?;

        let now = Clock::get()?.unix_timestamp;

        self.group_hub.set_inner(GroupHub {
            name,
            description,
            admins: vec![self.creator.key()],
            achievements: Vec::new(),
            creation_date: now,
            last_updated: now,
            metadata: GroupHubMetadata {
                website,
                social_media,
                category,
                tags,
            },
        });

        if self.group_hub_list.group_hubs.is_empty() {
            self.group_hub_list.bump = bumps.group_hub_list;
        }
        push_bounded(
            &mut self.group_hub_list.group_hubs,
            self.group_hub.key(),
            MAX_LIST_ENTRIES,
            CepError::ListFull,
        )?;

        msg!("Group hub created: {}", self.group_hub.name);

        Ok(())
    }
}
