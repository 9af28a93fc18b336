// Connection settings shared by every command

use std::{path::PathBuf, rc::Rc, str::FromStr};

use anchor_client::{
    solana_sdk::{
        commitment_config::CommitmentConfig,
        pubkey::Pubkey,
        signature::{read_keypair_file, Keypair},
    },
    Client, Cluster,
};
use anyhow::{anyhow, Context, Result};
use community_engagement_protocol::{BRAND_LIST_SEED, PROGRAM_STATE_SEED};

pub const DEFAULT_URL: &str = "localnet";
pub const DEFAULT_KEYPAIR: &str = "~/.config/solana/id.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub cluster: Cluster,
    pub keypair_path: PathBuf,
}

impl Config {
    // `url` is a cluster moniker (localnet, devnet, mainnet, ...) or an RPC URL
    pub fn resolve(url: &str, keypair: &str) -> Result<Self> {
        let cluster = Cluster::from_str(url)
            .map_err(|e| anyhow!("invalid cluster '{}': {}", url, e))?;
        let keypair_path = PathBuf::from(shellexpand::tilde(keypair).as_ref());

        Ok(Self {
            cluster,
            keypair_path,
        })
    }

    pub fn payer(&self) -> Result<Keypair> {
        read_keypair_file(&self.keypair_path)
            .map_err(|e| anyhow!("{}", e))
            .with_context(|| format!("failed to read keypair {}", self.keypair_path.display()))
    }

    pub fn client(&self, payer: Rc<Keypair>) -> Client<Rc<Keypair>> {
        Client::new_with_options(self.cluster.clone(), payer, CommitmentConfig::confirmed())
    }
}

pub fn program_state_address() -> Pubkey {
    Pubkey::find_program_address(&[PROGRAM_STATE_SEED], &community_engagement_protocol::ID).0
}

pub fn brand_list_address() -> Pubkey {
    Pubkey::find_program_address(&[BRAND_LIST_SEED], &community_engagement_protocol::ID).0
}
