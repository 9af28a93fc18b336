use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct SetTierStatus<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            MEMBERSHIP_SEED,
            membership.brand.as_ref(),
            &membership.membership_id.to_le_bytes(),
        ],
        bump = membership.bump,
        constraint = membership.admin == authority.key() @ CepError::Unauthorized,
    )]
    pub membership: Box<Account<'info, MembershipData>>,
}

impl<'info> SetTierStatus<'info> {
    pub fn set_tier_status(&mut self, tier_index: u8, is_open: bool) -> Result<()> {
        let tier = self
            .membership
            .tiers
            .get_mut(tier_index as usize)
            .ok_or(CepError::InvalidTierIndex)?;
        tier.is_open = is_open;

        msg!(
            "Tier {} ({}) is now {}",
            tier_index,
            tier.tier_id,
            if is_open { "open" } else { "closed" }
        );

        Ok(())
    }
}
