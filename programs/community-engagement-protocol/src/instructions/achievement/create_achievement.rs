// Create Achievement Instruction
//
// A brand admin defines a standard (record-only) achievement for the brand.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct CreateAchievement<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        constraint = brand.is_admin(&authority.key()) @ CepError::Unauthorized,
    )]
    pub brand: Box<Account<'info, Brand>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Achievement::INIT_SPACE,
    )]
    pub achievement: Box<Account<'info, Achievement>>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateAchievement<'info> {
    pub fn create_achievement(
        &mut self,
        name: String,
        description: String,
        criteria: String,
        points: u32,
    ) -> Result<()> {
        validate_name(&name, MAX_NAME_LENGTH)?;
        validate_description(&description)?;
        validate_criteria(&criteria)?;

        let now = Clock::get()?.unix_timestamp;

        self.achievement.set_inner(Achievement {
            brand: self.brand.key(),
            name,
            description,
            criteria,
            points,
            created_at: now,
            updated_at: now,
            achievement_type: AchievementType::Standard,
            token_mint: None,
            token_supply: None,
            metadata_uri: None,
        });

        push_bounded(
            &mut self.brand.achievements,
            self.achievement.key(),
            MAX_BRAND_ACHIEVEMENTS,
            CepError::TooManyAchievements,
        )?;
        self.brand.last_updated = now;

        msg!("Achievement created: {}", self.achievement.name);

        Ok(())
    }
}
