// Update Max Supply Instruction
//
// Elastic collections may resize, never below what is in circulation.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct UpdateMaxSupply<'info> {
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

impl<'info> UpdateMaxSupply<'info> {
    pub fn update_max_supply(&mut self, new_max_supply: u64) -> Result<()> {
        require!(self.membership.is_elastic, CepError::SupplyNotElastic);
        require!(new_max_supply > 0, CepError::InvalidSupply);
        require!(
            new_max_supply >= self.membership.circulating_supply(),
            CepError::SupplyBelowCirculating
        );

        self.membership.max_supply = new_max_supply;

        msg!(
            "Membership {} max supply set to {}",
            self.membership.key(),
            new_max_supply
        );

        Ok(())
    }
}
