// Create Fungible Reward Instruction
//
// Tronic admin defines a brand reward paid out in a new 0-decimal token
// with a fixed total supply.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct CreateFungibleReward<'info> {
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

impl<'info> CreateFungibleReward<'info> {
    pub fn create_fungible_reward(
        &mut self,
        name: String,
        description: String,
        supply: u64,
    ) -> Result<()> {
        validate_name(&name, MAX_NAME_LENGTH)?;
        validate_description(&description)?;
        require!(supply > 0, CepError::InvalidSupply);

        let now = Clock::get()?.unix_timestamp;

        self.reward.set_inner(Reward {
            brand: self.brand.key(),
            name,
            description,
            reward_type: RewardType::Fungible {
                token_mint: self.mint.key(),
                token_supply: supply,
            },
            created_at: now,
            updated_at: now,
            issued_count: 0,
        });

        msg!("Fungible reward created: {} (supply {})", self.reward.name, supply);

        Ok(())
    }
}
