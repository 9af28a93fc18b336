pub mod add_brand_admin;
pub mod create_brand;
pub mod get_brand_info;
pub mod initialize_brand_list;
pub mod list_all_brands;
pub mod list_brand_achievements;
pub mod remove_brand_admin;
pub mod update_brand;

pub use add_brand_admin::*;
pub use create_brand::*;
pub use get_brand_info::*;
pub use initialize_brand_list::*;
pub use list_all_brands::*;
pub use list_brand_achievements::*;
pub use remove_brand_admin::*;
pub use update_brand::*;
