use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

use crate::constants::*;

// How an achievement is represented to the user
//
// Standard: on-chain record only
// Fungible: one token of a 0-decimal mint per award, capped by token_supply
// NonFungible: numbered prints of a master edition; token_supply is the last edition printed
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug, InitSpace)]
pub enum AchievementType {
    Standard,
    Fungible,
    NonFungible,
}

// Achievement account
// Keypair account, owned by a brand
#[account]
#[derive(InitSpace)]
pub struct Achievement {
    pub brand: Pubkey,

    #[max_len(MAX_NAME_LENGTH)]
    pub name: String,

    #[max_len(MAX_DESCRIPTION_LENGTH)]
    pub description: String,

    #[max_len(MAX_CRITERIA_LENGTH)]
    pub criteria: String,

    pub points: u32,
    pub created_at: i64,
    pub updated_at: i64,
    pub achievement_type: AchievementType,

    // Fungible: the award mint. NonFungible: the master mint
    pub token_mint: Option<Pubkey>,

    // Fungible: award cap. NonFungible: editions awarded so far
    pub token_supply: Option<u64>,

    #[max_len(MAX_URI_LENGTH)]
    pub metadata_uri: Option<String>,
}

impl Achievement {
    pub fn info(&self) -> AchievementInfo {
        AchievementInfo {
            brand: self.brand,
            name: self.name.clone(),
            description: self.description.clone(),
            criteria: self.criteria.clone(),
            points: self.points,
            achievement_type: self.achievement_type,
            token_mint: self.token_mint,
            token_supply: self.token_supply,
            metadata_uri: self.metadata_uri.clone(),
        }
    }
}

// Per-user index of awarded achievements
// PDA: ["user-achievements", user]
#[account]
#[derive(InitSpace)]
pub struct UserAchievements {
    pub user: Pubkey,

    #[max_len(MAX_USER_ENTRIES)]
    pub achievements: Vec<Pubkey>,

    pub bump: u8,
}

impl UserAchievements {
    // Claims a list freshly created by init_if_needed
    pub fn claim(&mut self, user: Pubkey, bump: u8) {
        if self.user == Pubkey::default() {
            self.user = user;
            self.bump = bump;
        }
    }
}

// Receipt of a single award; its existence blocks a second award
// PDA: ["user-achievement", achievement, user]
#[account]
#[derive(InitSpace)]
pub struct UserAchievement {
    pub user: Pubkey,
    pub achievement: Pubkey,
    pub brand: Pubkey,
    pub awarded_at: i64,

    // Mint of the NFT handed out for non-fungible achievements
    pub edition_mint: Option<Pubkey>,

    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct AchievementInfo {
    pub brand: Pubkey,
    pub name: String,
    pub description: String,
    pub criteria: String,
    pub points: u32,
    pub achievement_type: AchievementType,
    pub token_mint: Option<Pubkey>,
    pub token_supply: Option<u64>,
    pub metadata_uri: Option<String>,
}
