// Instructions module
// - program_state: initialize_program, update_tronic_admin
// - brand: registry, profile and admin management (Tronic admin creates)
// - group_hub: open community hubs with their own admins
// - achievement: standard, fungible and NFT achievements and their awards
// - reward: fungible and NFT rewards issued by the Tronic admin
// - membership: tiered membership NFT collections of a brand

pub mod achievement;
pub mod brand;
pub mod group_hub;
pub mod membership;
pub mod program_state;
pub mod reward;

pub use achievement::*;
pub use brand::*;
pub use group_hub::*;
pub use membership::*;
pub use program_state::*;
pub use reward::*;
