// Initialize Membership Instruction
//
// A brand admin opens a membership NFT collection for the brand.
// The collection lives at ["membership", brand, membership_id] and the
// signing admin becomes its sole manager.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
#[instruction(membership_id: u64)]
pub struct InitializeMembership<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        constraint = brand.is_admin(&authority.key()) @ CepError::Unauthorized,
    )]
    pub brand: Box<Account<'info, Brand>>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + MembershipData::INIT_SPACE,
        seeds = [MEMBERSHIP_SEED, brand.key().as_ref(), &membership_id.to_le_bytes()],
        bump
    )]
    pub membership: Box<Account<'info, MembershipData>>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeMembership<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_membership(
        &mut self,
        membership_id: u64,
        name: String,
        symbol: String,
        base_uri: String,
        max_supply: u64,
        is_elastic: bool,
        max_tiers: u8,
        bumps: &InitializeMembershipBumps,
    ) -> Result<()> {
        validate_name(&name, MAX_NAME_LENGTH)?;
        require!(symbol.len() <= MAX_SYMBOL_LENGTH, CepError::SymbolTooLong);
        validate_uri(&base_uri)?;
        require!(max_supply > 0, CepError::InvalidSupply);
        require!(
            max_tiers >= 1 && max_tiers as usize <= MAX_TIERS,
            CepError::InvalidMaxTiers
        );

        self.membership.set_inner(MembershipData {
            brand: self.brand.key(),
            membership_id,
            name,
            symbol,
            base_uri,
            max_supply,
            is_elastic,
            max_tiers,
            total_minted: 0,
            total_burned: 0,
            tiers: Vec::new(),
            admin: self.authority.key(),
            bump: bumps.membership,
        });

        push_bounded(
            &mut self.brand.memberships,
            self.membership.key(),
            MAX_BRAND_MEMBERSHIPS,
            CepError::TooManyMemberships,
        )?;
        self.brand.last_updated = Clock::get()?.unix_timestamp;

        msg!(
            "Membership {} initialized for brand {}",
            membership_id,
            self.brand.key()
        );

        Ok(())
    }
}
