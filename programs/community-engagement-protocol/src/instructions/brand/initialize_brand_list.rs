use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializeBrandList<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + BrandList::INIT_SPACE,
        seeds = [BRAND_LIST_SEED],
        bump
    )]
    pub brand_list: Box<Account<'info, BrandList>>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeBrandList<'info> {
    pub fn initialize_brand_list(&mut self, bumps: &InitializeBrandListBumps) -> Result<()> {
        self.brand_list.set_inner(BrandList {
            brands: Vec::new(),
            bump: bumps.brand_list,
        });

        msg!("Brand list initialized: {}", self.brand_list.key());

        Ok(())
    }
}
