// Create Non-Fungible Achievement Instruction
//
// Tronic admin defines an achievement whose awards are numbered prints of a
// Metaplex master edition. The master token is held by the program state PDA,
// which also owns the update authority; token_supply starts at zero and
// counts printed editions.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::Metadata,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct CreateNonFungibleAchievement<'info> {
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
    pub master_mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        associated_token::mint = master_mint,
        associated_token::authority = program_state,
    )]
    pub master_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: created by the token metadata program
    #[account(
        mut,
        seeds = [METADATA_SEED, token_metadata_program.key().as_ref(), master_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub master_metadata: UncheckedAccount<'info>,

    /// CHECK: created by the token metadata program
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

    pub token_metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> CreateNonFungibleAchievement<'info> {
    pub fn create_non_fungible_achievement(
        &mut self,
        name: String,
        description: String,
        criteria: String,
        points: u32,
        metadata_uri: String,
    ) -> Result<()> {
        validate_name(&name, MAX_NAME_LENGTH)?;
        validate_description(&description)?;
        validate_criteria(&criteria)?;
        validate_uri(&metadata_uri)?;

        let seeds = self.program_state.signer_seeds();
        mint_tokens(
            1,
            &self.token_program.to_account_info(),
            &self.master_mint.to_account_info(),
            &self.master_token_account.to_account_info(),
            &self.program_state.to_account_info(),
            &[&seeds[..]],
        )?;

        create_nft_metadata(
            NftMetadataAccounts {
                token_metadata_program: &self.token_metadata_program.to_account_info(),
                token_program: &self.token_program.to_account_info(),
                system_program: &self.system_program.to_account_info(),
                rent: &self.rent.to_account_info(),
                metadata: &self.master_metadata.to_account_info(),
                master_edition: &self.master_edition.to_account_info(),
                mint: &self.master_mint.to_account_info(),
                authority: &self.program_state.to_account_info(),
                payer: &self.authority.to_account_info(),
            },
            name.clone(),
            ACHIEVEMENT_SYMBOL.to_string(),
            metadata_uri.clone(),
            None,
            &[&seeds[..]],
        )?;

        let now = Clock::get()?.unix_timestamp;

        self.achievement.set_inner(Achievement {
            brand: self.brand.key(),
            name,
            description,
            criteria,
            points,
            created_at: now,
            updated_at: now,
            achievement_type: AchievementType::NonFungible,
            token_mint: Some(self.master_mint.key()),
            token_supply: Some(0),
            metadata_uri: Some(metadata_uri),
        });

        push_bounded(
            &mut self.brand.achievements,
            self.achievement.key(),
            MAX_BRAND_ACHIEVEMENTS,
            CepError::TooManyAchievements,
        )?;
        self.brand.last_updated = now;

        msg!(
            "Non-fungible achievement created: {} (master mint {})",
            self.achievement.name,
            self.master_mint.key()
        );

        Ok(())
    }
}
