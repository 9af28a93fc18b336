use anchor_lang::prelude::*;

use crate::{constants::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct ListAllBrands<'info> {
    #[account(seeds = [BRAND_LIST_SEED], bump = brand_list.bump)]
    pub brand_list: Box<Account<'info, BrandList>>,
}

impl<'info> ListAllBrands<'info> {
    pub fn list_all_brands(&self, offset: u32) -> Result<Vec<Pubkey>> {
        Ok(page(&self.brand_list.brands, offset))
    }
}
