pub mod burn_membership;
pub mod create_membership_tier;
pub mod get_membership_status;
pub mod initialize_membership;
pub mod mint_membership;
pub mod set_tier_status;
pub mod update_max_supply;

pub use burn_membership::*;
pub use create_membership_tier::*;
pub use get_membership_status::*;
pub use initialize_membership::*;
pub use mint_membership::*;
pub use set_tier_status::*;
pub use update_max_supply::*;
