pub mod create_fungible_reward;
pub mod create_non_fungible_reward;
pub mod initialize_user_rewards;
pub mod issue_fungible_reward;
pub mod issue_non_fungible_reward;

pub use create_fungible_reward::*;
pub use create_non_fungible_reward::*;
pub use initialize_user_rewards::*;
pub use issue_fungible_reward::*;
pub use issue_non_fungible_reward::*;
