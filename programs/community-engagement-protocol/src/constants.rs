// Community Engagement Protocol Constants

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["program-state"]
pub const PROGRAM_STATE_SEED: &[u8] = b"program-state";

// Seeds for PDA derivation: ["brand", name]
pub const BRAND_SEED: &[u8] = b"brand";

// Seeds for PDA derivation: ["brand-list"]
pub const BRAND_LIST_SEED: &[u8] = b"brand-list";

// Seeds for PDA derivation: ["group-hub-list"]
pub const GROUP_HUB_LIST_SEED: &[u8] = b"group-hub-list";

// Seeds for PDA derivation: ["user-achievements", user]
pub const USER_ACHIEVEMENTS_SEED: &[u8] = b"user-achievements";

// Seeds for PDA derivation: ["user-achievement", achievement, user]
pub const USER_ACHIEVEMENT_SEED: &[u8] = b"user-achievement";

// Seeds for PDA derivation: ["user-rewards", user]
pub const USER_REWARDS_SEED: &[u8] = b"user-rewards";

// Seeds for PDA derivation: ["membership", brand, membership_id]
pub const MEMBERSHIP_SEED: &[u8] = b"membership";

// Seeds for PDA derivation: ["membership-token", mint]
pub const MEMBERSHIP_TOKEN_SEED: &[u8] = b"membership-token";

// Token Metadata program PDAs: ["metadata", program, mint] and
// ["metadata", program, mint, "edition"]
pub const METADATA_SEED: &[u8] = b"metadata";
pub const EDITION_SEED: &[u8] = b"edition";

// Field limits
pub const MAX_NAME_LENGTH: usize = 32; // also the Metaplex name limit
pub const MAX_GROUP_HUB_NAME_LENGTH: usize = 50;
pub const MAX_DESCRIPTION_LENGTH: usize = 200;
pub const MAX_CRITERIA_LENGTH: usize = 200;
pub const MAX_URI_LENGTH: usize = 200;
pub const MAX_WEBSITE_LENGTH: usize = 100;
pub const MAX_SOCIAL_MEDIA_LENGTH: usize = 100;
pub const MAX_CATEGORY_LENGTH: usize = 50;
pub const MAX_TAG_LENGTH: usize = 20;
pub const MAX_TAGS: usize = 5;
pub const MAX_SYMBOL_LENGTH: usize = 10;
pub const MAX_TIER_ID_LENGTH: usize = 10;

// Collection capacities
pub const MAX_ADMINS: usize = 10;
pub const MAX_BRAND_ACHIEVEMENTS: usize = 50;
pub const MAX_BRAND_MEMBERSHIPS: usize = 10;
pub const MAX_LIST_ENTRIES: usize = 200;
pub const MAX_USER_ENTRIES: usize = 200;
pub const MAX_TIERS: usize = 10;

// Metaplex symbol used for achievement editions
pub const ACHIEVEMENT_SYMBOL: &str = "CEPA";

// List views return at most this many keys per call (return data is capped at 1024 bytes)
pub const MAX_PAGE_KEYS: usize = 30;
