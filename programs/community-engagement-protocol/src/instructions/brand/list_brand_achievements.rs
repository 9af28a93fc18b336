use anchor_lang::prelude::*;

use crate::{helpers::*, state::*};

#[derive(Accounts)]
pub struct ListBrandAchievements<'info> {
    pub brand: Box<Account<'info, Brand>>,
}

impl<'info> ListBrandAchievements<'info> {
    pub fn list_brand_achievements(&self, offset: u32) -> Result<Vec<Pubkey>> {
        Ok(page(&self.brand.achievements, offset))
    }
}
