// Create Brand Instruction
//
// Registers a brand under the PDA ["brand", sha256(name)]. Only the Tronic admin
// may create brands and becomes the first brand admin. The brand list is
// created on first use.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, helpers::*, state::*};

#[derive(Accounts)]
#[instruction(name: String)]
pub struct CreateBrand<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PROGRAM_STATE_SEED],
        bump = program_state.bump,
        constraint = program_state.is_tronic_admin(&authority.key()) @ CepError::UnauthorizedTronicAdmin,
    )]
    pub program_state: Account<'info, ProgramState>,

    #[account(
        init,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + Brand::INIT_SPACE,
        seeds = [BRAND_SEED, Brand::name_seed(&name).as_ref()],
        bump
    )]
    pub brand: Box<Account<'info, Brand>>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + BrandList::INIT_SPACE,
        seeds = [BRAND_LIST_SEED],
        bump
    )]
    pub brand_list: Box<Account<'info, BrandList>>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateBrand<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn create_brand(
        &mut self,
        name: String,
        description: String,
        website: Option<String>,
        social_media: Option<String>,
        category: Option<String>,
        tags: Vec<String>,
        bumps: &CreateBrandBumps,
    ) -> Result<()> {
        validate_name(&name, MAX_NAME_LENGTH)?;
        validate_description(&description)?;
        validate_profile_metadata(&website, &social_media, &category, &tags)?;

        let now = Clock::get()?.unix_timestamp;

        self.brand.set_inner(Brand {
            name,
            description,
            admins: vec![self.authority.key()],
            achievements: Vec::new(),
            memberships: Vec::new(),
            creation_date: now,
            last_updated: now,
            metadata: BrandMetadata {
                website,
                social_media,
                category,
                tags,
            },
            bump: bumps.brand,
        });

        // Fresh list created by init_if_needed
        if self.brand_list.brands.is_empty() {
            self.brand_list.bump = bumps.brand_list;
        }
        push_bounded(
            &mut self.brand_list.brands,
            self.brand.key(),
            MAX_LIST_ENTRIES,
            CepError::ListFull,
        )?;

        msg!("Brand created: {}", self.brand.name);

        Ok(())
    }
}
