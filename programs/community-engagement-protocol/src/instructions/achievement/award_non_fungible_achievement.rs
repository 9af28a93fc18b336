// Award Non-Fungible Achievement Instruction
//
// Tronic admin prints the next numbered edition of the achievement's master
// edition into the user's wallet. The program state PDA signs as holder of
// the master token; token_supply tracks the last edition number.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::Metadata,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct AwardNonFungibleAchievement<'info> {
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
        constraint = achievement.achievement_type == AchievementType::NonFungible @ CepError::InvalidAchievementType,
    )]
    pub achievement: Box<Account<'info, Achievement>>,

    pub user: SystemAccount<'info>,

    #[account(
        constraint = achievement.token_mint == Some(master_mint.key()) @ CepError::InvalidAchievementType,
    )]
    pub master_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = master_mint,
        associated_token::authority = program_state,
    )]
    pub master_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: master metadata, owned by the token metadata program
    #[account(
        mut,
        seeds = [METADATA_SEED, token_metadata_program.key().as_ref(), master_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub master_metadata: UncheckedAccount<'info>,

    /// CHECK: master edition, owned by the token metadata program
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            token_metadata_program.key().as_ref(),
            master_mint.key().as_ref(),
            EDITION_SEED,
        ],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub master_edition: UncheckedAccount<'info>,

    #[account(
        init,
        payer = authority,
        mint::decimals = 0,
        mint::authority = program_state,
        mint::freeze_authority = program_state,
    )]
    pub edition_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        associated_token::mint = edition_mint,
        associated_token::authority = user,
    )]
    pub user_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: created by the token metadata program
    #[account(
        mut,
        seeds = [METADATA_SEED, token_metadata_program.key().as_ref(), edition_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub edition_metadata: UncheckedAccount<'info>,

    /// CHECK: created by the token metadata program
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            token_metadata_program.key().as_ref(),
            edition_mint.key().as_ref(),
            EDITION_SEED,
        ],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub edition: UncheckedAccount<'info>,

    /// CHECK: edition marker for the printed number, derived and checked by the token metadata program
    #[account(mut)]
    pub edition_marker: UncheckedAccount<'info>,

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

    pub token_metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> AwardNonFungibleAchievement<'info> {
    pub fn award_non_fungible_achievement(
        &mut self,
        bumps: &AwardNonFungibleAchievementBumps,
    ) -> Result<()> {
        let edition_number = self
            .achievement
            .token_supply
            .unwrap_or_default()
            .checked_add(1)
            .ok_or(CepError::Overflow)?;

        let seeds = self.program_state.signer_seeds();
        mint_tokens(
            1,
            &self.token_program.to_account_info(),
            &self.edition_mint.to_account_info(),
            &self.user_token_account.to_account_info(),
            &self.program_state.to_account_info(),
            &[&seeds[..]],
        )?;

        print_edition(
            EditionPrintAccounts {
                token_metadata_program: &self.token_metadata_program.to_account_info(),
                token_program: &self.token_program.to_account_info(),
                system_program: &self.system_program.to_account_info(),
                rent: &self.rent.to_account_info(),
                master_mint: &self.master_mint.to_account_info(),
                master_metadata: &self.master_metadata.to_account_info(),
                master_edition: &self.master_edition.to_account_info(),
                master_token_account: &self.master_token_account.to_account_info(),
                edition_mint: &self.edition_mint.to_account_info(),
                edition_metadata: &self.edition_metadata.to_account_info(),
                edition: &self.edition.to_account_info(),
                edition_marker: &self.edition_marker.to_account_info(),
                authority: &self.program_state.to_account_info(),
                payer: &self.authority.to_account_info(),
            },
            edition_number,
            &[&seeds[..]],
        )?;

        self.achievement.token_supply = Some(edition_number);

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
            edition_mint: Some(self.edition_mint.key()),
            bump: bumps.user_achievement,
        });

        msg!(
            "Non-fungible achievement {} awarded to {} as edition {}",
            achievement,
            user,
            edition_number
        );

        Ok(())
    }
}
