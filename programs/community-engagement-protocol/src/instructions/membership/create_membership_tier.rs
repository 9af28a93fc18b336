// Create Membership Tier Instruction
//
// The membership admin appends a tier. Tier ids are unique within the
// collection and the full token URI (base_uri + tier_uri) must fit the
// metadata URI limit.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct CreateMembershipTier<'info> {
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

impl<'info> CreateMembershipTier<'info> {
    pub fn create_membership_tier(
        &mut self,
        tier_id: String,
        duration: i64,
        is_open: bool,
        tier_uri: String,
    ) -> Result<()> {
        let membership = &mut self.membership;

        require!(
            membership.tiers.len() < membership.max_tiers as usize,
            CepError::MaxTiersReached
        );
        require!(
            !tier_id.is_empty() && tier_id.len() <= MAX_TIER_ID_LENGTH,
            CepError::InvalidTierId
        );
        require!(!membership.has_tier(&tier_id), CepError::TierAlreadyExists);
        require!(duration >= 0, CepError::InvalidDuration);
        require!(
            membership.base_uri.len() + tier_uri.len() <= MAX_URI_LENGTH,
            CepError::UriTooLong
        );

        membership.tiers.push(MembershipTier {
            tier_id,
            duration,
            is_open,
            tier_uri,
        });

        msg!("Tier {} added to membership {}", membership.tiers.len() - 1, membership.membership_id);

        Ok(())
    }
}
