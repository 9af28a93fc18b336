pub mod award_fungible_achievement;
pub mod award_non_fungible_achievement;
pub mod create_achievement;
pub mod create_fungible_achievement;
pub mod create_non_fungible_achievement;
pub mod get_achievement_info;
pub mod initialize_user_achievements;
pub mod list_user_achievements;

pub use award_fungible_achievement::*;
pub use award_non_fungible_achievement::*;
pub use create_achievement::*;
pub use create_fungible_achievement::*;
pub use create_non_fungible_achievement::*;
pub use get_achievement_info::*;
pub use initialize_user_achievements::*;
pub use list_user_achievements::*;
