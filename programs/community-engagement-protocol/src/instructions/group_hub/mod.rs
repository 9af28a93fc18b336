pub mod add_group_hub_achievement;
pub mod add_group_hub_admin;
pub mod create_group_hub;
pub mod get_group_hub_info;
pub mod initialize_group_hub_list;
pub mod list_all_group_hubs;
pub mod list_group_hub_achievements;
pub mod remove_group_hub_admin;
pub mod update_group_hub;

pub use add_group_hub_achievement::*;
pub use add_group_hub_admin::*;
pub use create_group_hub::*;
pub use get_group_hub_info::*;
pub use initialize_group_hub_list::*;
pub use list_all_group_hubs::*;
pub use list_group_hub_achievements::*;
pub use remove_group_hub_admin::*;
pub use update_group_hub::*;
