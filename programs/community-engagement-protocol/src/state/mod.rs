mod achievement;
mod brand;
mod group_hub;
mod membership;
mod program_state;
mod reward;

pub use achievement::*;
pub use brand::*;
pub use group_hub::*;
pub use membership::*;
pub use program_state::*;
pub use reward::*;
