use anchor_lang::prelude::*;

use crate::state::*;

#[derive(Accounts)]
pub struct GetAchievementInfo<'info> {
    pub achievement: Box<Account<'info, Achievement>>,
}

impl<'info> GetAchievementInfo<'info> {
    pub fn get_achievement_info(&self) -> Result<AchievementInfo> {
        Ok(self.achievement.info())
    }
}
