// Create Fungible Achievement Instruction
//
// Tronic admin defines an achievement backed by a new 0-decimal mint.
// The program state PDA holds mint and freeze authority; `supply` caps how many
// tokens can ever be awarded.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct CreateFungibleAchievement<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        constraint = program_state.is_tronic_admin(&authority.key()) @ CepError::UnauthorizedTronicAdmin,
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(mut)]
    pub brand: Box<Account<'info, Brand>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Achievement::INIT_SPACE,
    )]
    pub achievement: Box<Account<'info, Achievement>>,

    #[account(
        init,
        payer = authority,
        mint::decimals = 0,
        mint::authority = program_state,
        mint::freeze_authority = program_state,
    )]
    pub mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateFungibleAchievement<'info> {
    pub fn create_fungible_achievement(
        &mut self,
        name: String,
        description: String,
        criteria: String,
        points: u32,
        supply: u64,
    ) -> Result<()> {
        validate_name(&name, MAX_NAME_LENGTH)?;
        validate_description(&description)?;
        validate_criteria(&criteria)?;
        require!(supply > 0, CepError::InvalidSupply);

        let now = Clock::get()?.unix_timestamp;

        self.achievement.set_inner(Achievement {
            brand: self.brand.key(),
            name,
            description,
            criteria,
            points,
            created_at: now,
            updated_at: now,
            achievement_type: AchievementType::Fungible,
            token_mint: Some(self.mint.key()),
            token_supply: Some(supply),
            metadata_uri: None,
        });

        push_bounded(
            &mut self.brand.achievements,
            self.achievement.key(),
            MAX_BRAND_ACHIEVEMENTS,
            CepError::TooManyAchievements,
        )?;
        self.brand.last_updated = now;

        msg!(
            "Fungible achievement created: {} (mint {}, supply {})",
            self.achievement.name,
            self.mint.key(),
            supply
        );

        Ok(())
    }
}
