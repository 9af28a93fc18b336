use anchor_lang::prelude::*;

#[error_code]
pub enum CepError {
    // Field validation errors
    #[msg("Name exceeds its byte limit")]
    NameTooLong,

    #[msg("Description must be 200 bytes or less")]
    DescriptionTooLong,

    #[msg("URI must be 200 bytes or less")]
    UriTooLong,

    #[msg("Criteria must be 200 bytes or less")]
    CriteriaTooLong,

    #[msg("A maximum of 5 tags are allowed")]
    TooManyTags,

    #[msg("Tags must be 20 bytes or less")]
    TagTooLong,

    #[msg("Website, social media or category exceeds its byte limit")]
    MetadataFieldTooLong,

    #[msg("Symbol must be 10 bytes or less")]
    SymbolTooLong,

    // Authorization errors
    #[msg("You are not authorized to perform this action")]
    Unauthorized,

    #[msg("Unauthorized: only Tronic Admin can perform this action")]
    UnauthorizedTronicAdmin,

    // Program state errors
    #[msg("Program has already been initialized")]
    AlreadyInitialized,

    #[msg("Invalid initial admin")]
    InvalidInitialAdmin,

    #[msg("New admin cannot be the default public key")]
    InvalidNewAdmin,

    // Admin list errors
    #[msg("This admin already exists")]
    AdminAlreadyExists,

    #[msg("Admin not found")]
    AdminNotFound,

    #[msg("Cannot remove the last admin")]
    CannotRemoveLastAdmin,

    #[msg("Maximum number of admins reached")]
    TooManyAdmins,

    // Capacity errors
    #[msg("List is full")]
    ListFull,

    #[msg("Maximum number of achievements reached for this brand")]
    TooManyAchievements,

    #[msg("Maximum number of memberships reached for this brand")]
    TooManyMemberships,

    // Achievement errors
    #[msg("Achievement not found")]
    AchievementNotFound,

    #[msg("Achievement type does not match this instruction")]
    InvalidAchievementType,

    #[msg("Achievement token supply is exhausted")]
    AchievementSupplyExhausted,

    #[msg("Achievement is already linked")]
    AchievementAlreadyLinked,

    // Reward errors
    #[msg("Invalid reward type")]
    InvalidRewardType,

    #[msg("Insufficient reward supply")]
    InsufficientRewardSupply,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Supply must be greater than zero")]
    InvalidSupply,

    // Membership errors
    #[msg("Max supply reached")]
    MaxSupplyReached,

    #[msg("Invalid tier index")]
    InvalidTierIndex,

    #[msg("Tier already exists")]
    TierAlreadyExists,

    #[msg("Max tiers reached")]
    MaxTiersReached,

    #[msg("Max tiers must be between 1 and 10")]
    InvalidMaxTiers,

    #[msg("Tier id must be between 1 and 10 bytes")]
    InvalidTierId,

    #[msg("Tier duration cannot be negative")]
    InvalidDuration,

    #[msg("Tier is closed for minting")]
    TierClosed,

    #[msg("Membership supply is not elastic")]
    SupplyNotElastic,

    #[msg("New max supply is below the circulating supply")]
    SupplyBelowCirculating,

    #[msg("Token account does not hold this membership")]
    NotMembershipHolder,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    Overflow,
}
