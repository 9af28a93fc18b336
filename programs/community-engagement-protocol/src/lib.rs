use anchor_lang::prelude::*;
pub mod constants;
pub mod errors;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use errors::*;
pub use instructions::*;
pub use state::*;

declare_id!("7FQ74JMt2Eeca2RD2aLVBv4No8e9PUt8SHfGsUzKhqje");

#[program]
pub mod community_engagement_protocol {
    use super::*;

    // PROGRAM STATE

    // Create the global state and set the Tronic admin (once)
    pub fn initialize_program(ctx: Context<InitializeProgram>, initial_admin: Pubkey) -> Result<()> {
        ctx.accounts.initialize_program(initial_admin, &ctx.bumps)
    }

    // Rotate the Tronic admin, signed by the current one
    pub fn update_tronic_admin(ctx: Context<UpdateTronicAdmin>, new_admin: Pubkey) -> Result<()> {
        ctx.accounts.update_tronic_admin(new_admin)
    }

    // BRANDS

    pub fn initialize_brand_list(ctx: Context<InitializeBrandList>) -> Result<()> {
        ctx.accounts.initialize_brand_list(&ctx.bumps)
    }

    // Tronic admin only
    pub fn create_brand(
        ctx: Context<CreateBrand>,
        name: String,
        description: String,
        website: Option<String>,
        social_media: Option<String>,
        category: Option<String>,
        tags: Vec<String>,
    ) -> Result<()> {
        ctx.accounts.create_brand(
            name,
            description,
            website,
            social_media,
            category,
            tags,
            &ctx.bumps,
        )
    }

    // Tronic admin only
    pub fn update_brand(ctx: Context<UpdateBrand>, name: String, description: String) -> Result<()> {
        ctx.accounts.update_brand(name, description)
    }

    pub fn get_brand_info(ctx: Context<GetBrandInfo>) -> Result<BrandInfo> {
        ctx.accounts.get_brand_info()
    }

    // Paged, MAX_PAGE_KEYS per call
    pub fn list_all_brands(ctx: Context<ListAllBrands>, offset: u32) -> Result<Vec<Pubkey>> {
        ctx.accounts.list_all_brands(offset)
    }

    pub fn list_brand_achievements(
        ctx: Context<ListBrandAchievements>,
        offset: u32,
    ) -> Result<Vec<Pubkey>> {
        ctx.accounts.list_brand_achievements(offset)
    }

    pub fn add_brand_admin(ctx: Context<AddBrandAdmin>, new_admin: Pubkey) -> Result<()> {
        ctx.accounts.add_brand_admin(new_admin)
    }

    pub fn remove_brand_admin(ctx: Context<RemoveBrandAdmin>, admin: Pubkey) -> Result<()> {
        ctx.accounts.remove_brand_admin(admin)
    }

    // GROUP HUBS

    pub fn initialize_group_hub_list(ctx: Context<InitializeGroupHubList>) -> Result<()> {
        ctx.accounts.initialize_group_hub_list(&ctx.bumps)
    }

    // Open to anyone; the creator becomes the first hub admin
    pub fn create_group_hub(
        ctx: Context<CreateGroupHub>,
        name: String,
        description: String,
        website: Option<String>,
        social_media: Option<String>,
        category: Option<String>,
        tags: Vec<String>,
    ) -> Result<()> {
        ctx.accounts.create_group_hub(
            name,
            description,
            website,
            social_media,
            category,
            tags,
            &ctx.bumps,
        )
    }

    pub fn update_group_hub(
        ctx: Context<UpdateGroupHub>,
        name: String,
        description: String,
    ) -> Result<()> {
        ctx.accounts.update_group_hub(name, description)
    }

    pub fn get_group_hub_info(ctx: Context<GetGroupHubInfo>) -> Result<GroupHubInfo> {
        ctx.accounts.get_group_hub_info()
    }

    pub fn list_all_group_hubs(ctx: Context<ListAllGroupHubs>, offset: u32) -> Result<Vec<Pubkey>> {
        ctx.accounts.list_all_group_hubs(offset)
    }

    pub fn list_group_hub_achievements(
        ctx: Context<ListGroupHubAchievements>,
        offset: u32,
    ) -> Result<Vec<Pubkey>> {
        ctx.accounts.list_group_hub_achievements(offset)
    }

    pub fn add_group_hub_achievement(ctx: Context<AddGroupHubAchievement>) -> Result<()> {
        ctx.accounts.add_group_hub_achievement()
    }

    pub fn add_group_hub_admin(ctx: Context<AddGroupHubAdmin>, new_admin: Pubkey) -> Result<()> {
        ctx.accounts.add_group_hub_admin(new_admin)
    }

    pub fn remove_group_hub_admin(ctx: Context<RemoveGroupHubAdmin>, admin: Pubkey) -> Result<()> {
        ctx.accounts.remove_group_hub_admin(admin)
    }

    // ACHIEVEMENTS

    // Brand admin only
    pub fn create_achievement(
        ctx: Context<CreateAchievement>,
        name: String,
        description: String,
        criteria: String,
        points: u32,
    ) -> Result<()> {
        ctx.accounts.create_achievement(name, description, criteria, points)
    }

    // Tronic admin only; `supply` caps the number of awards
    pub fn create_fungible_achievement(
        ctx: Context<CreateFungibleAchievement>,
        name: String,
        description: String,
        criteria: String,
        points: u32,
        supply: u64,
    ) -> Result<()> {
        ctx.accounts
            .create_fungible_achievement(name, description, criteria, points, supply)
    }

    // Tronic admin only
    pub fn create_non_fungible_achievement(
        ctx: Context<CreateNonFungibleAchievement>,
        name: String,
        description: String,
        criteria: String,
        points: u32,
        metadata_uri: String,
    ) -> Result<()> {
        ctx.accounts
            .create_non_fungible_achievement(name, description, criteria, points, metadata_uri)
    }

    pub fn initialize_user_achievements(ctx: Context<InitializeUserAchievements>) -> Result<()> {
        ctx.accounts.initialize_user_achievements(&ctx.bumps)
    }

    pub fn award_fungible_achievement(ctx: Context<AwardFungibleAchievement>) -> Result<()> {
        ctx.accounts.award_fungible_achievement(&ctx.bumps)
    }

    pub fn award_non_fungible_achievement(
        ctx: Context<AwardNonFungibleAchievement>,
    ) -> Result<()> {
        ctx.accounts.award_non_fungible_achievement(&ctx.bumps)
    }

    pub fn get_achievement_info(ctx: Context<GetAchievementInfo>) -> Result<AchievementInfo> {
        ctx.accounts.get_achievement_info()
    }

    pub fn list_user_achievements(
        ctx: Context<ListUserAchievements>,
        offset: u32,
    ) -> Result<Vec<Pubkey>> {
        ctx.accounts.list_user_achievements(offset)
    }

    // REWARDS

    pub fn initialize_user_rewards(ctx: Context<InitializeUserRewards>) -> Result<()> {
        ctx.accounts.initialize_user_rewards(&ctx.bumps)
    }

    pub fn create_fungible_reward(
        ctx: Context<CreateFungibleReward>,
        name: String,
        description: String,
        supply: u64,
    ) -> Result<()> {
        ctx.accounts.create_fungible_reward(name, description, supply)
    }

    pub fn create_non_fungible_reward(
        ctx: Context<CreateNonFungibleReward>,
        name: String,
        description: String,
        metadata_uri: String,
    ) -> Result<()> {
        ctx.accounts
            .create_non_fungible_reward(name, description, metadata_uri)
    }

    pub fn issue_fungible_reward(ctx: Context<IssueFungibleReward>, amount: u64) -> Result<()> {
        ctx.accounts.issue_fungible_reward(amount, &ctx.bumps)
    }

    pub fn issue_non_fungible_reward(ctx: Context<IssueNonFungibleReward>) -> Result<()> {
        ctx.accounts.issue_non_fungible_reward(&ctx.bumps)
    }

    // MEMBERSHIPS

    // Brand admin only; the signer manages tiers and mints afterwards
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_membership(
        ctx: Context<InitializeMembership>,
        membership_id: u64,
        name: String,
        symbol: String,
        base_uri: String,
        max_supply: u64,
        is_elastic: bool,
        max_tiers: u8,
    ) -> Result<()> {
        ctx.accounts.initialize_membership(
            membership_id,
            name,
            symbol,
            base_uri,
            max_supply,
            is_elastic,
            max_tiers,
            &ctx.bumps,
        )
    }

    pub fn create_membership_tier(
        ctx: Context<CreateMembershipTier>,
        tier_id: String,
        duration: i64,
        is_open: bool,
        tier_uri: String,
    ) -> Result<()> {
        ctx.accounts
            .create_membership_tier(tier_id, duration, is_open, tier_uri)
    }

    pub fn set_tier_status(ctx: Context<SetTierStatus>, tier_index: u8, is_open: bool) -> Result<()> {
        ctx.accounts.set_tier_status(tier_index, is_open)
    }

    pub fn update_max_supply(ctx: Context<UpdateMaxSupply>, new_max_supply: u64) -> Result<()> {
        ctx.accounts.update_max_supply(new_max_supply)
    }

    pub fn mint_membership(ctx: Context<MintMembership>, tier_index: u8) -> Result<()> {
        ctx.accounts.mint_membership(tier_index, &ctx.bumps)
    }

    pub fn burn_membership(ctx: Context<BurnMembership>) -> Result<()> {
        ctx.accounts.burn_membership()
    }

    pub fn get_membership_status(ctx: Context<GetMembershipStatus>) -> Result<MembershipStatus> {
        ctx.accounts.get_membership_status()
    }
}
