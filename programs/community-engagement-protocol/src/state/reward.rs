use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

use crate::constants::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, Debug, InitSpace)]
pub enum RewardType {
    Fungible {
        token_mint: Pubkey,
        token_supply: u64,
    },
    NonFungible {
        token_mint: Pubkey,
        #[max_len(MAX_URI_LENGTH)]
        metadata_uri: String,
    },
}

impl RewardType {
    pub fn token_mint(&self) -> Pubkey {
        match self {
            RewardType::Fungible { token_mint, .. } | RewardType::NonFungible { token_mint, .. } => {
                *token_mint
            }
        }
    }
}

// Reward account
// Keypair account, issued on behalf of a brand
#[account]
#[derive(InitSpace)]
pub struct Reward {
    pub brand: Pubkey,

    #[max_len(MAX_NAME_LENGTH)]
    pub name: String,

    #[max_len(MAX_DESCRIPTION_LENGTH)]
    pub description: String,

    pub reward_type: RewardType,
    pub created_at: i64,
    pub updated_at: i64,

    // Fungible: tokens issued. NonFungible: instances issued, also the last token id
    pub issued_count: u64,
}

impl Reward {
    // Remaining fungible supply check, returns the new issued count
    pub fn checked_issue(&self, amount: u64) -> Option<u64> {
        match self.reward_type {
            RewardType::Fungible { token_supply, .. } => self
                .issued_count
                .checked_add(amount)
                .filter(|issued| *issued <= token_supply),
            RewardType::NonFungible { .. } => None,
        }
    }
}

// One issued non-fungible reward
#[account]
#[derive(InitSpace)]
pub struct NonFungibleRewardInstance {
    pub reward: Pubkey,
    pub owner: Pubkey,
    pub token_id: u64,
    pub issued_at: i64,
}

// PDA: ["user-rewards", user]
#[account]
#[derive(InitSpace)]
pub struct UserRewards {
    pub user: Pubkey,

    #[max_len(MAX_USER_ENTRIES)]
    pub rewards: Vec<Pubkey>,

    pub bump: u8,
}

impl UserRewards {
    pub fn claim(&mut self, user: Pubkey, bump: u8) {
        if self.user == Pubkey::default() {
            self.user = user;
            self.bump = bump;
        }
    }
}
