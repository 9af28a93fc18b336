// Award Fungible Achievement Instruction
//
// Tronic admin mints one achievement token to the user's associated token
// account. The user's index and the award receipt are created on demand;
// the receipt PDA makes a second award of the same achievement fail.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct AwardFungibleAchievement<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        constraint = program_state.is_tronic_admin(&authority.key()) @ CepError::UnauthorizedTronicAdmin,
    )]
    pub program_state: Account<'info, ProgramState>,

    pub brand: Box<Account<'info, Brand>>,

    #[account(
        mut,
        has_one = brand @ CepError::AchievementNotFound,
        constraint = achievement.achievement_type == AchievementType::Fungible @ CepError::InvalidAchievementType,
        constraint = achievement.token_mint == Some(mint.key()) @ CepError::InvalidAchievementType,
    )]
    pub achievement: Box<Account<'info, Achievement>>,

    #[account(mut)]
    pub mint: Box<Account<'info, Mint>>,

    pub user: SystemAccount<'info>,

    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = user,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + UserAchievements::INIT_SPACE,
        seeds = [USER_ACHIEVEMENTS_SEED, user.key().as_ref()],
        bump
    )]
    pub user_achievements: Box<Account<'info, UserAchievements>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + UserAchievement::INIT_SPACE,
        seeds = [USER_ACHIEVEMENT_SEED, achievement.key().as_ref(), user.key().as_ref()],
        bump
    )]
    pub user_achievement: Box<Account<'info, UserAchievement>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> AwardFungibleAchievement<'info> {
    pub fn award_fungible_achievement(
        &mut self,
        bumps: &AwardFungibleAchievementBumps,
    ) -> Result<()> {
        let cap = self.achievement.token_supply.unwrap_or_default();
        require!(
            self.mint.supply < cap,
            CepError::AchievementSupplyExhausted
        );

        let seeds = self.program_state.signer_seeds();
        mint_tokens(
            1,
            &self.token_program.to_account_info(),
            &self.mint.to_account_info(),
            &self.user_token_account.to_account_info(),
            &self.program_state.to_account_info(),
            &[&seeds[..]],
        )?;

        let user = self.user.key();
        let achievement = self.achievement.key();
        let now = Clock::get()?.unix_timestamp;

        self.user_achievements.claim(user, bumps.user_achievements);
        push_bounded(
            &mut self.user_achievements.achievements,
            achievement,
            MAX_USER_ENTRIES,
            CepError::ListFull,
        )?;

        self.user_achievement.set_inner(UserAchievement {
            user,
            achievement,
            brand: self.brand.key(),
            awarded_at: now,
            edition_mint: None,
            bump: bumps.user_achievement,
        });

        msg!("Fungible achievement {} awarded to {}", achievement, user);

        Ok(())
    }
}
