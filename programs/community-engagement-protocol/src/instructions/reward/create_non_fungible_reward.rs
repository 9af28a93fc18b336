// Create Non-Fungible Reward Instruction
//
// Tronic admin defines a brand reward whose instances are numbered and
// share one metadata URI.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct CreateNonFungibleReward<'info> {
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
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Reward::INIT_SPACE,
    )]
    pub reward: Box<Account<'info, Reward>>,

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

impl<'info> CreateNonFungibleReward<'info> {
    pub fn create_non_fungible_reward(
        &mut self,
        name: String,
        description: String,
        metadata_uri: String,
    ) -> Result<()> {
        validate_name(&name, MAX_NAME_LENGTH)?;
        validate_description(&description)?;
        validate_uri(&metadata_uri)?;

        let now = Clock::get()?.unix_timestamp;

        self.reward.set_inner(Reward {
            brand: self.brand.key(),
            name,
            description,
            reward_type: RewardType::NonFungible {
                token_mint: self.mint.key(),
                metadata_uri,
            },
            created_at: now,
            updated_at: now,
            issued_count: 0,
        });

        msg!("Non-fungible reward created: {}", self.reward.name);

        Ok(())
    }
}
