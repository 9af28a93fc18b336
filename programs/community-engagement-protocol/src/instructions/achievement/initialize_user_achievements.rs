use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializeUserAchievements<'info> {
    pub user: Signer<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + UserAchievements::INIT_SPACE,
        seeds = [USER_ACHIEVEMENTS_SEED, user.key().as_ref()],
        bump
    )]
    pub user_achievements: Box<Account<'info, UserAchievements>>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeUserAchievements<'info> {
    pub fn initialize_user_achievements(
        &mut self,
        bumps: &InitializeUserAchievementsBumps,
    ) -> Result<()> {
        self.user_achievements.set_inner(UserAchievements {
            user: self.user.key(),
            achievements: Vec::new(),
            bump: bumps.user_achievements,
        });

        Ok(())
    }
}
