use anchor_lang::prelude::*;

use crate::{constants::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct ListUserAchievements<'info> {
    pub user: Signer<'info>,

    #[account(
        seeds = [USER_ACHIEVEMENTS_SEED, user.key().as_ref()],
        bump = user_achievements.bump,
        has_one = user,
    )]
    pub user_achievements: Box<Account<'info, UserAchievements>>,
}

impl<'info> ListUserAchievements<'info> {
    pub fn list_user_achievements(&self, offset: u32) -> Result<Vec<Pubkey>> {
        Ok(page(&self.user_achievements.achievements, offset))
    }
}
