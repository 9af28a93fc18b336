//! cep-admin: bootstrap and Tronic admin management for the Community
//! Engagement Protocol program.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `init --admin <pubkey>` | Create the program state with its first Tronic admin |
//! | `rotate-admin --new-admin <pubkey>` | Hand the Tronic admin role to another key |
//! | `show` | Print the current Tronic admin |
//! | `brands` | Print every registered brand |
//!
//! Connection settings come from `--url`/`CEP_RPC_URL` and
//! `--keypair`/`CEP_KEYPAIR`. Set `RUST_LOG=debug` for more output.

use std::rc::Rc;

use anchor_client::{
    anchor_lang::AccountDeserialize,
    solana_sdk::{
        commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Keypair, signer::Signer,
    },
    Program,
};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use community_engagement_protocol::{accounts, instruction, Brand, BrandList, ProgramState};
use log::{debug, info};

mod config;

use config::{brand_list_address, program_state_address, Config, DEFAULT_KEYPAIR, DEFAULT_URL};

#[derive(Parser)]
#[command(name = "cep-admin")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Cluster moniker or RPC URL
    #[arg(long, env = "CEP_RPC_URL", default_value = DEFAULT_URL, global = true)]
    url: String,

    /// Fee payer and signer keypair
    #[arg(long, env = "CEP_KEYPAIR", default_value = DEFAULT_KEYPAIR, global = true)]
    keypair: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the program state. Fails if it already exists.
    Init {
        /// First Tronic admin, defaults to the signer
        #[arg(long)]
        admin: Option<Pubkey>,
    },

    /// Rotate the Tronic admin. The signer must be the current admin.
    RotateAdmin {
        #[arg(long)]
        new_admin: Pubkey,
    },

    /// Show the program state
    Show,

    /// List registered brands
    Brands,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::resolve(&cli.url, &cli.keypair)?;
    debug!("cluster {:?}, keypair {}", config.cluster, config.keypair_path.display());

    let payer = Rc::new(config.payer()?);
    let client = config.client(payer.clone());
    let program = client
        .program(community_engagement_protocol::ID)
        .context("failed to build program client")?;

    match cli.command {
        Commands::Init { admin } => cmd_init(&program, &payer, admin.unwrap_or_else(|| payer.pubkey())),
        Commands::RotateAdmin { new_admin } => cmd_rotate_admin(&program, &payer, new_admin),
        Commands::Show => cmd_show(&program),
        Commands::Brands => cmd_brands(&program),
    }
}

fn fetch_state(program: &Program<Rc<Keypair>>) -> Result<ProgramState> {
    program
        .account::<ProgramState>(program_state_address())
        .context("program state not found, run `cep-admin init` first")
}

fn cmd_init(program: &Program<Rc<Keypair>>, payer: &Keypair, admin: Pubkey) -> Result<()> {
    if admin == Pubkey::default() {
        bail!("initial admin cannot be the default public key");
    }

    let signature = program
        .request()
        .accounts(accounts::InitializeProgram {
            payer: payer.pubkey(),
            program_state: program_state_address(),
            system_program: anchor_client::anchor_lang::system_program::ID,
        })
        .args(instruction::InitializeProgram {
            initial_admin: admin,
        })
        .send()
        .context("initialize_program failed")?;

    info!("Program initialized with Tronic admin {} ({})", admin, signature);
    Ok(())
}

fn cmd_rotate_admin(program: &Program<Rc<Keypair>>, payer: &Keypair, new_admin: Pubkey) -> Result<()> {
    let state = fetch_state(program)?;
    if state.tronic_admin != payer.pubkey() {
        bail!(
            "signer {} is not the Tronic admin ({})",
            payer.pubkey(),
            state.tronic_admin
        );
    }

    let signature = program
        .request()
        .accounts(accounts::UpdateTronicAdmin {
            current_admin: payer.pubkey(),
            program_state: program_state_address(),
        })
        .args(instruction::UpdateTronicAdmin { new_admin })
        .send()
        .context("update_tronic_admin failed")?;

    info!("Tronic admin rotated from {} to {} ({})", state.tronic_admin, new_admin, signature);
    Ok(())
}

fn cmd_show(program: &Program<Rc<Keypair>>) -> Result<()> {
    let state = fetch_state(program)?;

    println!("program:      {}", community_engagement_protocol::ID);
    println!("state:        {}", program_state_address());
    println!("tronic admin: {}", state.tronic_admin);
    Ok(())
}

fn cmd_brands(program: &Program<Rc<Keypair>>) -> Result<()> {
    let address = brand_list_address();
    let account = program
        .rpc()
        .get_account_with_commitment(&address, CommitmentConfig::confirmed())
        .with_context(|| format!("failed to fetch brand list {}", address))?
        .value;

    let brands = registered_brands(account.map(|account| account.data))?;
    if brands.is_empty() {
        println!("No brands registered");
        return Ok(());
    }

    for key in brands {
        let brand = program
            .account::<Brand>(key)
            .with_context(|| format!("failed to fetch brand {}", key))?;
        println!(
            "{}  {}  admins: {}  achievements: {}",
            key,
            brand.name,
            brand.admins.len(),
            brand.achievements.len()
        );
    }
    Ok(())
}

// A brand list that was never created means an empty registry
fn registered_brands(data: Option<Vec<u8>>) -> Result<Vec<Pubkey>> {
    let Some(data) = data else {
        debug!("brand list account does not exist");
        return Ok(Vec::new());
    };
    let list = BrandList::try_deserialize(&mut data.as_slice())
        .context("failed to decode the brand list account")?;
    Ok(list.brands)
}
