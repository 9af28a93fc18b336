use anchor_lang::{prelude::*, solana_program::hash::hash};

use crate::constants::*;

// Optional public profile of a brand
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, InitSpace)]
pub struct BrandMetadata {
    #[max_len(MAX_WEBSITE_LENGTH)]
    pub website: Option<String>,

    #[max_len(MAX_SOCIAL_MEDIA_LENGTH)]
    pub social_media: Option<String>,

    #[max_len(MAX_CATEGORY_LENGTH)]
    pub category: Option<String>,

    #[max_len(MAX_TAGS, MAX_TAG_LENGTH)]
    pub tags: Vec<String>,
}

// Brand account
// PDA: ["brand", sha256(name)]
#[account]
#[derive(InitSpace)]
pub struct Brand {
    // Renaming does not move the account: its address stays derived
    // from the name given at creation
    #[max_len(MAX_NAME_LENGTH)]
    pub name: String,

    #[max_len(MAX_DESCRIPTION_LENGTH)]
    pub description: String,

    // First entry is the Tronic admin that created the brand
    #[max_len(MAX_ADMINS)]
    pub admins: Vec<Pubkey>,

    #[max_len(MAX_BRAND_ACHIEVEMENTS)]
    pub achievements: Vec<Pubkey>,

    // MembershipData PDAs linked by initialize_membership
    #[max_len(MAX_BRAND_MEMBERSHIPS)]
    pub memberships: Vec<Pubkey>,

    pub creation_date: i64,
    pub last_updated: i64,
    pub metadata: BrandMetadata,
    pub bump: u8,
}

impl Brand {
    // Seeds are capped at 32 bytes, so the name is hashed
    pub fn name_seed(name: &str) -> [u8; 32] {
        hash(name.as_bytes()).to_bytes()
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admins.contains(key)
    }

    pub fn info(&self) -> BrandInfo {
        BrandInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            admins: self.admins.clone(),
            achievement_count: self.achievements.len() as u32,
            membership_count: self.memberships.len() as u32,
            creation_date: self.creation_date,
            last_updated: self.last_updated,
        }
    }
}

// Registry of every brand
// PDA: ["brand-list"]
#[account]
#[derive(InitSpace)]
pub struct BrandList {
    #[max_len(MAX_LIST_ENTRIES)]
    pub brands: Vec<Pubkey>,

    pub bump: u8,
}

// Return data of get_brand_info
// Collections are reported as counts and paged through the list views
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct BrandInfo {
    pub name: String,
    pub description: String,
    pub admins: Vec<Pubkey>,
    pub achievement_count: u32,
    pub membership_count: u32,
    pub creation_date: i64,
    pub last_updated: i64,
}
