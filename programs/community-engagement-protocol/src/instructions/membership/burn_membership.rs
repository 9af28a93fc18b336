// Burn Membership Instruction
//
// The current holder burns their membership NFT. The MembershipToken
// record is closed and its rent returned to the membership admin.

use anchor_lang::prelude::*;
use anchor_spl::token::{burn, Burn, Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct BurnMembership<'info> {
    pub holder: Signer<'info>,

    #[account(
        mut,
        seeds = [
            MEMBERSHIP_SEED,
            membership.brand.as_ref(),
            &membership.membership_id.to_le_bytes(),
        ],
        bump = membership.bump,
    )]
    pub membership: Box<Account<'info, MembershipData>>,

    #[account(mut)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = holder_token_account.owner == holder.key() @ CepError::NotMembershipHolder,
        constraint = holder_token_account.mint == mint.key() @ CepError::NotMembershipHolder,
        constraint = holder_token_account.amount >= 1 @ CepError::NotMembershipHolder,
    )]
    pub holder_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [MEMBERSHIP_TOKEN_SEED, mint.key().as_ref()],
        bump = membership_token.bump,
        has_one = membership,
        has_one = mint,
        close = admin,
    )]
    pub membership_token: Box<Account<'info, MembershipToken>>,

    #[account(mut, address = membership.admin)]
    pub admin: SystemAccount<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> BurnMembership<'info> {
    pub fn burn_membership(&mut self) -> Result<()> {
        burn(
            CpiContext::new(
                self.token_program.to_account_info(),
                Burn {
                    mint: self.mint.to_account_info(),
                    from: self.holder_token_account.to_account_info(),
                    authority: self.holder.to_account_info(),
                },
            ),
            1,
        )?;

        self.membership.total_burned = self
            .membership
            .total_burned
            .checked_add(1)
            .ok_or(CepError::Overflow)?;

        msg!("Membership {} burned by {}", self.mint.key(), self.holder.key());

        Ok(())
    }
}
