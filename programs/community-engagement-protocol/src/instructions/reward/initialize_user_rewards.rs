use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializeUserRewards<'info> {
    pub user: Signer<'info>,

    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + UserRewards::INIT_SPACE,
        seeds = [USER_REWARDS_SEED, user.key().as_ref()],
        bump
    )]
    pub user_rewards: Box<Account<'info, UserRewards>>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeUserRewards<'info> {
    pub fn initialize_user_rewards(&mut self, bumps: &InitializeUserRewardsBumps) -> Result<()> {
        self.user_rewards.set_inner(UserRewards {
            user: self.user.key(),
            rewards: Vec::new(),
            bump: bumps.user_rewards,
        });

        Ok(())
    }
}
