// Issue Non-Fungible Reward Instruction
//
// Tronic admin issues the next numbered instance of an NFT reward: one
// token of the reward mint goes to the user and a NonFungibleRewardInstance
// records the token id.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct IssueNonFungibleReward<'info> {
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
        constraint = matches!(reward.reward_type, RewardType::NonFungible { .. }) @ CepError::InvalidRewardType,
        constraint = reward.reward_type.token_mint() == mint.key() @ CepError::InvalidRewardType,
    )]
    pub reward: Box<Account<'info, Reward>>,

    #[account(mut)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + NonFungibleRewardInstance::INIT_SPACE,
    )]
    pub reward_instance: Box<Account<'info, NonFungibleRewardInstance>>,

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

impl<'info> IssueNonFungibleReward<'info> {
    pub fn issue_non_fungible_reward(
        &mut self,
        bumps: &IssueNonFungibleRewardBumps,
    ) -> Result<()> {
        let token_id = self
            .reward
            .issued_count
            .checked_add(1)
            .ok_or(CepError::Overflow)?;

        let seeds = self.program_state.signer_seeds();
        mint_tokens(
            1,
            &self.token_program.to_account_info(),
            &self.mint.to_account_info(),
            &self.user_token_account.to_account_info(),
            &self.program_state.to_account_info(),
            &[&seeds[..]],
        )?;

        let now = Clock::get()?.unix_timestamp;
        let user = self.user.key();
        let reward = self.reward.key();

        self.reward.issued_count = token_id;
        self.reward.updated_at = now;

        self.reward_instance.set_inner(NonFungibleRewardInstance {
            reward,
            owner: user,
            token_id,
            issued_at: now,
        });

        self.user_rewards.claim(user, bumps.user_rewards);
        if !self.user_rewards.rewards.contains(&reward) {
            push_bounded(
                &mut self.user_rewards.rewards,
                reward,
                MAX_USER_ENTRIES,
                CepError::ListFull,
            )?;
        }

        msg!("Issued reward {} token #{} to {}", reward, token_id, user);

        Ok(())
    }
}
