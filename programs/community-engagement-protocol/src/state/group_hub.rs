use anchor_lang::prelude::*;

use crate::constants::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, InitSpace)]
pub struct GroupHubMetadata {
    #[max_len(MAX_WEBSITE_LENGTH)]
    pub website: Option<String>,

    #[max_len(MAX_SOCIAL_MEDIA_LENGTH)]
    pub social_media: Option<String>,

    #[max_len(MAX_CATEGORY_LENGTH)]
    pub category: Option<String>,

    #[max_len(MAX_TAGS, MAX_TAG_LENGTH)]
    pub tags: Vec<String>,
}

// Community hub, created by anyone
// Keypair account: the creator supplies a fresh address
#[account]
#[derive(InitSpace)]
pub struct GroupHub {
    #[max_len(MAX_GROUP_HUB_NAME_LENGTH)]
    pub name: String,

    #[max_len(MAX_DESCRIPTION_LENGTH)]
    pub description: String,

    // First entry is the creator
    #[max_len(MAX_ADMINS)]
    pub admins: Vec<Pubkey>,

    // Achievements featured by the hub
    #[max_len(MAX_BRAND_ACHIEVEMENTS)]
    pub achievements: Vec<Pubkey>,

    pub creation_date: i64,
    pub last_updated: i64,
    pub metadata: GroupHubMetadata,
}

impl GroupHub {
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admins.contains(key)
    }

    pub fn info(&self) -> GroupHubInfo {
        GroupHubInfo {
            name: self.name.clone(),
            description: self.description.clone(),
            admins: self.admins.clone(),
            achievement_count: self.achievements.len() as u32,
            creation_date: self.creation_date,
            last_updated: self.last_updated,
        }
    }
}

// PDA: ["group-hub-list"]
#[account]
#[derive(InitSpace)]
pub struct GroupHubList {
    #[max_len(MAX_LIST_ENTRIES)]
    pub group_hubs: Vec<Pubkey>,

    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct GroupHubInfo {
    pub name: String,
    pub description: String,
    pub admins: Vec<Pubkey>,
    pub achievement_count: u32,
    pub creation_date: i64,
    pub last_updated: i64,
}
