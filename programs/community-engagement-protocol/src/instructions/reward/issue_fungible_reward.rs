// Issue Fungible Reward Instruction
//
// Tronic admin mints `amount` reward tokens to a user, bounded by the
// reward's total supply, and records the reward in the user's index.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct IssueFungibleReward<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        constraint = program_state.is_tronic_admin(&authority.key()) @ CepError::UnauthorizedTronicAdmin,
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        mut,
        constraint = matches!(reward.reward_type, RewardType::Fungible { .. }) @ CepError::InvalidRewardType,
        constraint = reward.reward_type.token_mint() == mint.key() @ CepError::InvalidRewardType,
    )]
    pub reward: Box<Account<'info, Reward>>,

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
        space = ANCHOR_DISCRIMINATOR + UserRewards::INIT_SPACE,
        seeds = [USER_REWARDS_SEED, user.key().as_ref()],
        bump
    )]
    pub user_rewards: Box<Account<'info, UserRewards>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> IssueFungibleReward<'info> {
    pub fn issue_fungible_reward(
        &mut self,
        amount: u64,
        bumps: &IssueFungibleRewardBumps,
    ) -> Result<()> {
        require!(amount > 0, CepError::InvalidAmount);
        let issued = self
            .reward
            .checked_issue(amount)
            .ok_or(CepError::InsufficientRewardSupply)?;

        let seeds = self.program_state.signer_seeds();
        mint_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.mint.to_account_info(),
            &self.user_token_account.to_account_info(),
            &self.program_state.to_account_info(),
            &[&seeds[..]],
        )?;

        self.reward.issued_count = issued;
        self.reward.updated_at = Clock::get()?.unix_timestamp;

        let user = self.user.key();
        let reward = self.reward.key();
        self.user_rewards.claim(user, bumps.user_rewards);
        if !self.user_rewards.rewards.contains(&reward) {
            push_bounded(
                &mut self.user_rewards.rewards,
                reward,
                MAX_USER_ENTRIES,
                CepError::ListFull,
            )?;
        }

        msg!("Issued {} of reward {} to {}", amount, reward, user);

        Ok(())
    }
}
