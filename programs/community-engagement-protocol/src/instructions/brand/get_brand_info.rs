use anchor_lang::prelude::*;

use crate::state::*;

#[derive(Accounts)]
pub struct GetBrandInfo<'info> {
    pub brand: Box<Account<'info, Brand>>,
}

impl<'info> GetBrandInfo<'info> {
    pub fn get_brand_info(&self) -> Result<BrandInfo> {
        Ok(self.brand.info())
    }
}
