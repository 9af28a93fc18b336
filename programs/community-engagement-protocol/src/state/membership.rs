use anchor_lang::prelude::*;

use crate::constants::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Default, Debug, PartialEq, InitSpace)]
pub struct MembershipTier {
    #[max_len(MAX_TIER_ID_LENGTH)]
    pub tier_id: String,

    // Validity in seconds, 0 never expires
    pub duration: i64,

    // Closed tiers cannot be minted
    pub is_open: bool,

    // Appended to the membership base_uri to form the token metadata uri
    #[max_len(MAX_URI_LENGTH)]
    pub tier_uri: String,
}

// Membership collection of a brand
// PDA: ["membership", brand, membership_id (le bytes)]
#[account]
#[derive(InitSpace)]
pub struct MembershipData {
    pub brand: Pubkey,
    pub membership_id: u64,

    #[max_len(MAX_NAME_LENGTH)]
    pub name: String,

    #[max_len(MAX_SYMBOL_LENGTH)]
    pub symbol: String,

    #[max_len(MAX_URI_LENGTH)]
    pub base_uri: String,

    // Cap on circulating supply (minted - burned)
    pub max_supply: u64,

    // Elastic collections may change max_supply after creation
    pub is_elastic: bool,

    pub max_tiers: u8,
    pub total_minted: u64,
    pub total_burned: u64,

    #[max_len(MAX_TIERS)]
    pub tiers: Vec<MembershipTier>,

    // Brand admin that initialized the collection, sole manager of tiers and mints
    pub admin: Pubkey,

    pub bump: u8,
}

impl MembershipData {
    pub fn circulating_supply(&self) -> u64 {
        self.total_minted.saturating_sub(self.total_burned)
    }

    pub fn can_mint(&self) -> bool {
        self.circulating_supply() < self.max_supply
    }

    pub fn has_tier(&self, tier_id: &str) -> bool {
        self.tiers.iter().any(|tier| tier.tier_id == tier_id)
    }

    pub fn token_uri(&self, tier: &MembershipTier) -> String {
        format!("{}{}", self.base_uri, tier.tier_uri)
    }
}

// Record of one minted membership NFT
// PDA: ["membership-token", mint]
#[account]
#[derive(InitSpace)]
pub struct MembershipToken {
    pub membership: Pubkey,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub tier_index: u8,
    pub issued_at: i64,

    // None for tiers with a zero duration
    pub expires_at: Option<i64>,

    pub bump: u8,
}

impl MembershipToken {
    pub fn expiry(issued_at: i64, duration: i64) -> Option<i64> {
        (duration > 0).then(|| issued_at.saturating_add(duration))
    }

    pub fn is_active(&self, now: i64) -> bool {
        self.expires_at.map_or(true, |expires_at| now < expires_at)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq)]
pub struct MembershipStatus {
    pub tier_id: String,
    pub issued_at: i64,
    pub expires_at: Option<i64>,
    pub active: bool,
}
