// Mint Membership Instruction
//
// The membership admin mints a 1-of-1 membership NFT of an open tier to a
// recipient. Metadata uses the collection name and symbol with
// uri = base_uri + tier_uri. A MembershipToken PDA keyed by the mint
// records tier and expiry.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    metadata::Metadata,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct MintMembership<'info> {
    #[account(mut)]
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

    pub recipient: SystemAccount<'info>,

    #[account(
        init,
        payer = authority,
        mint::decimals = 0,
        mint::authority = authority,
        mint::freeze_authority = authority,
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = authority,
        associated_token::mint = mint,
        associated_token::authority = recipient,
    )]
    pub recipient_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: created by the token metadata program
    #[account(
        mut,
        seeds = [METADATA_SEED, token_metadata_program.key().as_ref(), mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata: UncheckedAccount<'info>,

    /// CHECK: created by the token metadata program
    #[account(
        mut,
        seeds = [
            METADATA_SEED,
            token_metadata_program.key().as_ref(),
            mint.key().as_ref(),
            EDITION_SEED,
        ],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub master_edition: UncheckedAccount<'info>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + MembershipToken::INIT_SPACE,
        seeds = [MEMBERSHIP_TOKEN_SEED, mint.key().as_ref()],
        bump
    )]
    pub membership_token: Box<Account<'info, MembershipToken>>,

    pub token_metadata_program: Program<'info, Metadata>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

impl<'info> MintMembership<'info> {
    pub fn mint_membership(&mut self, tier_index: u8, bumps: &MintMembershipBumps) -> Result<()> {
        let tier = self
            .membership
            .tiers
            .get(tier_index as usize)
            .cloned()
            .ok_or(CepError::InvalidTierIndex)?;
        require!(tier.is_open, CepError::TierClosed);
        require!(self.membership.can_mint(), CepError::MaxSupplyReached);

        mint_tokens(
            1,
            &self.token_program.to_account_info(),
            &self.mint.to_account_info(),
            &self.recipient_token_account.to_account_info(),
            &self.authority.to_account_info(),
            &[],
        )?;

        create_nft_metadata(
            NftMetadataAccounts {
                token_metadata_program: &self.token_metadata_program.to_account_info(),
                token_program: &self.token_program.to_account_info(),
                system_program: &self.system_program.to_account_info(),
                rent: &self.rent.to_account_info(),
                metadata: &self.metadata.to_account_info(),
                master_edition: &self.master_edition.to_account_info(),
                mint: &self.mint.to_account_info(),
                authority: &self.authority.to_account_info(),
                payer: &self.authority.to_account_info(),
            },
            self.membership.name.clone(),
            self.membership.symbol.clone(),
            self.membership.token_uri(&tier),
            Some(0),
            &[],
        )?;

        let issued_at = Clock::get()?.unix_timestamp;

        self.membership_token.set_inner(MembershipToken {
            membership: self.membership.key(),
            mint: self.mint.key(),
            owner: self.recipient.key(),
            tier_index,
            issued_at,
            expires_at: MembershipToken::expiry(issued_at, tier.duration),
            bump: bumps.membership_token,
        });

        self.membership.total_minted = self
            .membership
            .total_minted
            .checked_add(1)
            .ok_or(CepError::Overflow)?;

        msg!(
            "Membership {} tier {} minted to {}",
            self.mint.key(),
            tier.tier_id,
            self.recipient.key()
        );

        Ok(())
    }
}
