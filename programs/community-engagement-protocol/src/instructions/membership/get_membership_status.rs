use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct GetMembershipStatus<'info> {
    pub membership: Box<Account<'info, MembershipData>>,

    #[account(
        seeds = [MEMBERSHIP_TOKEN_SEED, membership_token.mint.as_ref()],
        bump = membership_token.bump,
        has_one = membership,
    )]
    pub membership_token: Box<Account<'info, MembershipToken>>,
}

impl<'info> GetMembershipStatus<'info> {
    pub fn get_membership_status(&self) -> Result<MembershipStatus> {
        let token = &self.membership_token;
        let tier_id = self
            .membership
            .tiers
            .get(token.tier_index as usize)
            .map(|tier| tier.tier_id.clone())
            .unwrap_or_default();

        Ok(MembershipStatus {
            tier_id,
            issued_at: token.issued_at,
            expires_at: token.expires_at,
            active: token.is_active(Clock::get()?.unix_timestamp),
        })
    }
}
