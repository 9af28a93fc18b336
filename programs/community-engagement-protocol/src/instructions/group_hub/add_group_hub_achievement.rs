// Add Group Hub Achievement Instruction
//
// A hub admin features an existing achievement in the hub.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct AddGroupHubAchievement<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        constraint = group_hub.is_admin(&authority.key()) @ CepError::Unauthorized,
    )]
    pub group_hub: Box<Account<'info, GroupHub>>,

    pub achievement: Box<Account<'info, Achievement>>,
}

impl<'info> AddGroupHubAchievement<'info> {
    pub fn add_group_hub_achievement(&mut self) -> Result<()> {
        let achievement = self.achievement.key();

        require!(
            !self.group_hub.achievements.contains(&achievement),
            CepError::AchievementAlreadyLinked
        );
        push_bounded(
            &mut self.group_hub.achievements,
            achievement,
            MAX_BRAND_ACHIEVEMENTS,
            CepError::TooManyAchievements,
        )?;
        self.group_hub.last_updated = Clock::get()?.unix_timestamp;

        msg!(
            "Achievement {} linked to group hub {}",
            achievement,
            self.group_hub.key()
        );

        Ok(())
    }
}
