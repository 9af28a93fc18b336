// Test utilities for the community engagement protocol
//
// Program loading, funded accounts, PDA derivation, instruction builders
// and send/decode helpers shared by every integration suite.
//
// The compiled program is embedded from target/deploy, so run `anchor build`
// first. Tests that mint NFTs also load the Token Metadata program from
// tests/fixtures/mpl_token_metadata.so or $CEP_TOKEN_METADATA_SO and panic
// when it is missing (see tests/fixtures/README.md).

#![allow(dead_code)]

use std::path::PathBuf;

use anchor_lang::{AccountDeserialize, AnchorDeserialize};
use borsh::BorshSerialize;
use litesvm::{types::TransactionMetadata, LiteSVM};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(community_engagement_protocol::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
pub const TOKEN_METADATA_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");
pub const RENT_SYSVAR_ID: Pubkey = solana_sdk::pubkey!("SysvarRent111111111111111111111111111111111");

// PDA Seeds (must match constants.rs)
pub const PROGRAM_STATE_SEED: &[u8] = b"program-state";
pub const BRAND_SEED: &[u8] = b"brand";
pub const BRAND_LIST_SEED: &[u8] = b"brand-list";
pub const GROUP_HUB_LIST_SEED: &[u8] = b"group-hub-list";
pub const USER_ACHIEVEMENTS_SEED: &[u8] = b"user-achievements";
pub const USER_ACHIEVEMENT_SEED: &[u8] = b"user-achievement";
pub const USER_REWARDS_SEED: &[u8] = b"user-rewards";
pub const MEMBERSHIP_SEED: &[u8] = b"membership";
pub const MEMBERSHIP_TOKEN_SEED: &[u8] = b"membership-token";

// ======================== SETUP ========================

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

fn token_metadata_so_path() -> PathBuf {
    match std::env::var("CEP_TOKEN_METADATA_SO") {
        Ok(path) => PathBuf::from(path),
        Err(_) => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/mpl_token_metadata.so"),
    }
}

// Setup LiteSVM with the protocol program (SPL Token and ATA are built in)
pub fn setup_svm() -> LiteSVM {
    let program_bytes = include_bytes!("../../../target/deploy/community_engagement_protocol.so");
    let mut svm = LiteSVM::new();
    svm.add_program(PROGRAM_ID, program_bytes)
        .expect("Failed to add protocol program");
    svm
}

// Setup LiteSVM with the protocol and Token Metadata programs
pub fn setup_svm_with_metadata() -> LiteSVM {
    let path = token_metadata_so_path();
    let metadata_bytes = std::fs::read(&path).unwrap_or_else(|e| {
        panic!(
            "Token Metadata program not found at {} ({}); see tests/fixtures/README.md",
            path.display(),
            e
        )
    });
    let mut svm = setup_svm();
    svm.add_program(TOKEN_METADATA_PROGRAM_ID, &metadata_bytes)
        .expect("Failed to add token metadata program");
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Fresh SVM account with the program initialized and `admin` as Tronic admin
pub fn setup_initialized(svm: &mut LiteSVM) -> Keypair {
    let admin = create_funded_account(svm, 100 * LAMPORTS_PER_SOL);
    send_tx_expect_success(
        svm,
        build_initialize_program_ix(&admin.pubkey(), &admin.pubkey()),
        &admin,
        &[&admin],
    );
    admin
}

// Tronic admin creates a brand with no optional metadata
pub fn create_test_brand(svm: &mut LiteSVM, admin: &Keypair, name: &str) -> Pubkey {
    let ix = build_create_brand_ix(
        &admin.pubkey(),
        name,
        "A test brand",
        None,
        None,
        None,
        vec![],
    );
    send_tx_expect_success(svm, ix, admin, &[admin]);
    derive_brand_pda(name).0
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);
}

// ======================== SEND HELPERS ========================

// Send a transaction and expect success
// The blockhash is expired afterwards so identical view calls are not deduplicated
pub fn send_tx_expect_success(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> TransactionMetadata {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    svm.expire_blockhash();
    result.expect("Transaction should succeed")
}

// Send a transaction and expect failure, returning the error with its logs
pub fn send_tx_expect_failure(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> String {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    svm.expire_blockhash();
    assert!(result.is_err(), "Transaction should have failed");
    format!("{:?}", result.err().unwrap())
}

// Decode the return value of a view instruction
// Trailing zero bytes are stripped by the runtime, so pad before decoding
pub fn decode_return<T: AnchorDeserialize>(meta: &TransactionMetadata) -> T {
    let mut data = meta.return_data.data.clone();
    data.resize(1024, 0);
    T::deserialize(&mut data.as_slice()).expect("Failed to decode return data")
}

// Fetch and decode a program account
pub fn fetch_account<T: AccountDeserialize>(svm: &LiteSVM, address: &Pubkey) -> T {
    let account = svm.get_account(address).expect("Account should exist");
    assert_eq!(account.owner, PROGRAM_ID);
    T::try_deserialize(&mut account.data.as_slice()).expect("Failed to decode account")
}

pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        litesvm_token::get_spl_account(svm, token_account).expect("Token account should exist");
    account.amount
}

pub fn mint_supply(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let mint: spl_token::state::Mint =
        litesvm_token::get_spl_account(svm, mint).expect("Mint should exist");
    mint.supply
}

pub fn mint_authority(svm: &LiteSVM, mint: &Pubkey) -> Option<Pubkey> {
    let mint: spl_token::state::Mint =
        litesvm_token::get_spl_account(svm, mint).expect("Mint should exist");
    mint.mint_authority
        .map(|key| Pubkey::new_from_array(key.to_bytes()))
        .into()
}

// Program types use anchor's Pubkey
pub fn anchor_key(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

pub fn sdk_key(key: &anchor_lang::prelude::Pubkey) -> Pubkey {
    Pubkey::new_from_array(key.to_bytes())
}

// ======================== PDA DERIVATION ========================

pub fn derive_program_state_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROGRAM_STATE_SEED], &PROGRAM_ID)
}

// Brand names are hashed into the seed
pub fn derive_brand_pda(name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BRAND_SEED, hash(name.as_bytes()).as_ref()], &PROGRAM_ID)
}

pub fn derive_brand_list_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[BRAND_LIST_SEED], &PROGRAM_ID)
}

pub fn derive_group_hub_list_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[GROUP_HUB_LIST_SEED], &PROGRAM_ID)
}

pub fn derive_user_achievements_pda(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_ACHIEVEMENTS_SEED, user.as_ref()], &PROGRAM_ID)
}

pub fn derive_user_achievement_pda(achievement: &Pubkey, user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[USER_ACHIEVEMENT_SEED, achievement.as_ref(), user.as_ref()],
        &PROGRAM_ID,
    )
}

pub fn derive_user_rewards_pda(user: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_REWARDS_SEED, user.as_ref()], &PROGRAM_ID)
}

pub fn derive_membership_pda(brand: &Pubkey, membership_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[MEMBERSHIP_SEED, brand.as_ref(), &membership_id.to_le_bytes()],
        &PROGRAM_ID,
    )
}

pub fn derive_membership_token_pda(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MEMBERSHIP_TOKEN_SEED, mint.as_ref()], &PROGRAM_ID)
}

pub fn derive_metadata_pda(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[b"metadata", TOKEN_METADATA_PROGRAM_ID.as_ref(), mint.as_ref()],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .0
}

pub fn derive_master_edition_pda(mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[
            b"metadata",
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            mint.as_ref(),
            b"edition",
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .0
}

// One marker account tracks 248 printed editions
pub fn derive_edition_marker_pda(master_mint: &Pubkey, edition: u64) -> Pubkey {
    let marker = (edition / 248).to_string();
    Pubkey::find_program_address(
        &[
            b"metadata",
            TOKEN_METADATA_PROGRAM_ID.as_ref(),
            master_mint.as_ref(),
            b"edition",
            marker.as_bytes(),
        ],
        &TOKEN_METADATA_PROGRAM_ID,
    )
    .0
}

// Master tokens are held by the program state PDA
pub fn program_state_token_account(mint: &Pubkey) -> Pubkey {
    get_associated_token_address(&derive_program_state_pda().0, mint)
}

// ======================== INSTRUCTION BUILDERS ========================

// Discriminator followed by borsh-encoded arguments
fn ix_data<A: BorshSerialize>(method: &str, args: A) -> Vec<u8> {
    let mut data = anchor_discriminator(method).to_vec();
    args.serialize(&mut data).expect("Failed to serialize args");
    data
}

fn ix(accounts: Vec<AccountMeta>, data: Vec<u8>) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data,
    }
}

// --- program state ---

pub fn build_initialize_program_ix(payer: &Pubkey, initial_admin: &Pubkey) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(derive_program_state_pda().0, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data("initialize_program", initial_admin.to_bytes()),
    )
}

pub fn build_update_tronic_admin_ix(current_admin: &Pubkey, new_admin: &Pubkey) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*current_admin, true),
            AccountMeta::new(derive_program_state_pda().0, false),
        ],
        ix_data("update_tronic_admin", new_admin.to_bytes()),
    )
}

// --- brand ---

pub fn build_initialize_brand_list_ix(payer: &Pubkey) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(derive_brand_list_pda().0, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data("initialize_brand_list", ()),
    )
}

pub fn build_create_brand_ix(
    authority: &Pubkey,
    name: &str,
    description: &str,
    website: Option<&str>,
    social_media: Option<&str>,
    category: Option<&str>,
    tags: Vec<&str>,
) -> Instruction {
    let owned = |v: Option<&str>| v.map(str::to_string);
    let tags: Vec<String> = tags.into_iter().map(str::to_string).collect();

    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(derive_program_state_pda().0, false),
            AccountMeta::new(derive_brand_pda(name).0, false),
            AccountMeta::new(derive_brand_list_pda().0, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data(
            "create_brand",
            (
                name.to_string(),
                description.to_string(),
                owned(website),
                owned(social_media),
                owned(category),
                tags,
            ),
        ),
    )
}

pub fn build_update_brand_ix(
    authority: &Pubkey,
    brand: &Pubkey,
    name: &str,
    description: &str,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new_readonly(derive_program_state_pda().0, false),
            AccountMeta::new(*brand, false),
        ],
        ix_data("update_brand", (name.to_string(), description.to_string())),
    )
}

pub fn build_get_brand_info_ix(brand: &Pubkey) -> Instruction {
    ix(
        vec![AccountMeta::new_readonly(*brand, false)],
        ix_data("get_brand_info", ()),
    )
}

pub fn build_list_all_brands_ix(offset: u32) -> Instruction {
    ix(
        vec![AccountMeta::new_readonly(derive_brand_list_pda().0, false)],
        ix_data("list_all_brands", offset),
    )
}

pub fn build_list_brand_achievements_ix(brand: &Pubkey, offset: u32) -> Instruction {
    ix(
        vec![AccountMeta::new_readonly(*brand, false)],
        ix_data("list_brand_achievements", offset),
    )
}

pub fn build_add_brand_admin_ix(authority: &Pubkey, brand: &Pubkey, new_admin: &Pubkey) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*brand, false),
        ],
        ix_data("add_brand_admin", new_admin.to_bytes()),
    )
}

pub fn build_remove_brand_admin_ix(authority: &Pubkey, brand: &Pubkey, admin: &Pubkey) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*brand, false),
        ],
        ix_data("remove_brand_admin", admin.to_bytes()),
    )
}

// --- group hub ---

pub fn build_initialize_group_hub_list_ix(payer: &Pubkey) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(derive_group_hub_list_pda().0, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data("initialize_group_hub_list", ()),
    )
}

pub fn build_create_group_hub_ix(
    creator: &Pubkey,
    group_hub: &Pubkey,
    name: &str,
    description: &str,
    website: Option<&str>,
    tags: Vec<&str>,
) -> Instruction {
    let tags: Vec<String> = tags.into_iter().map(str::to_string).collect();

    ix(
        vec![
            AccountMeta::new(*creator, true),
            AccountMeta::new(*group_hub, true),
            AccountMeta::new(derive_group_hub_list_pda().0, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data(
            "create_group_hub",
            (
                name.to_string(),
                description.to_string(),
                website.map(str::to_string),
                None::<String>,
                None::<String>,
                tags,
            ),
        ),
    )
}

pub fn build_update_group_hub_ix(
    authority: &Pubkey,
    group_hub: &Pubkey,
    name: &str,
    description: &str,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*group_hub, false),
        ],
        ix_data("update_group_hub", (name.to_string(), description.to_string())),
    )
}

pub fn build_get_group_hub_info_ix(group_hub: &Pubkey) -> Instruction {
    ix(
        vec![AccountMeta::new_readonly(*group_hub, false)],
        ix_data("get_group_hub_info", ()),
    )
}

pub fn build_list_all_group_hubs_ix(offset: u32) -> Instruction {
    ix(
        vec![AccountMeta::new_readonly(derive_group_hub_list_pda().0, false)],
        ix_data("list_all_group_hubs", offset),
    )
}

pub fn build_list_group_hub_achievements_ix(group_hub: &Pubkey, offset: u32) -> Instruction {
    ix(
        vec![AccountMeta::new_readonly(*group_hub, false)],
        ix_data("list_group_hub_achievements", offset),
    )
}

pub fn build_add_group_hub_achievement_ix(
    authority: &Pubkey,
    group_hub: &Pubkey,
    achievement: &Pubkey,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*group_hub, false),
            AccountMeta::new_readonly(*achievement, false),
        ],
        ix_data("add_group_hub_achievement", ()),
    )
}

pub fn build_add_group_hub_admin_ix(
    authority: &Pubkey,
    group_hub: &Pubkey,
    new_admin: &Pubkey,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*group_hub, false),
        ],
        ix_data("add_group_hub_admin", new_admin.to_bytes()),
    )
}

pub fn build_remove_group_hub_admin_ix(
    authority: &Pubkey,
    group_hub: &Pubkey,
    admin: &Pubkey,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*group_hub, false),
        ],
        ix_data("remove_group_hub_admin", admin.to_bytes()),
    )
}

// --- achievement ---

pub fn build_create_achievement_ix(
    authority: &Pubkey,
    brand: &Pubkey,
    achievement: &Pubkey,
    name: &str,
    description: &str,
    criteria: &str,
    points: u32,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(*brand, false),
            AccountMeta::new(*achievement, true),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data(
            "create_achievement",
            (
                name.to_string(),
                description.to_string(),
                criteria.to_string(),
                points,
            ),
        ),
    )
}

pub fn build_create_fungible_achievement_ix(
    authority: &Pubkey,
    brand: &Pubkey,
    achievement: &Pubkey,
    mint: &Pubkey,
    name: &str,
    points: u32,
    supply: u64,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(derive_program_state_pda().0, false),
            AccountMeta::new(*brand, false),
            AccountMeta::new(*achievement, true),
            AccountMeta::new(*mint, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data(
            "create_fungible_achievement",
            (
                name.to_string(),
                "Test Description".to_string(),
                "Test Criteria".to_string(),
                points,
                supply,
            ),
        ),
    )
}

pub fn build_create_non_fungible_achievement_ix(
    authority: &Pubkey,
    brand: &Pubkey,
    achievement: &Pubkey,
    master_mint: &Pubkey,
    name: &str,
    points: u32,
    metadata_uri: &str,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(derive_program_state_pda().0, false),
            AccountMeta::new(*brand, false),
            AccountMeta::new(*achievement, true),
            AccountMeta::new(*master_mint, true),
            AccountMeta::new(program_state_token_account(master_mint), false),
            AccountMeta::new(derive_metadata_pda(master_mint), false),
            AccountMeta::new(derive_master_edition_pda(master_mint), false),
            AccountMeta::new_readonly(TOKEN_METADATA_PROGRAM_ID, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
            AccountMeta::new_readonly(RENT_SYSVAR_ID, false),
        ],
        ix_data(
            "create_non_fungible_achievement",
            (
                name.to_string(),
                "Test NFT Description".to_string(),
                "Test NFT Criteria".to_string(),
                points,
                metadata_uri.to_string(),
            ),
        ),
    )
}

pub fn build_initialize_user_achievements_ix(user: &Pubkey, authority: &Pubkey) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*user, true),
            AccountMeta::new(*authority, true),
            AccountMeta::new(derive_user_achievements_pda(user).0, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data("initialize_user_achievements", ()),
    )
}

pub fn build_award_fungible_achievement_ix(
    authority: &Pubkey,
    brand: &Pubkey,
    achievement: &Pubkey,
    mint: &Pubkey,
    user: &Pubkey,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(derive_program_state_pda().0, false),
            AccountMeta::new_readonly(*brand, false),
            AccountMeta::new(*achievement, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*user, false),
            AccountMeta::new(get_associated_token_address(user, mint), false),
            AccountMeta::new(derive_user_achievements_pda(user).0, false),
            AccountMeta::new(derive_user_achievement_pda(achievement, user).0, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data("award_fungible_achievement", ()),
    )
}

pub fn build_award_non_fungible_achievement_ix(
    authority: &Pubkey,
    brand: &Pubkey,
    achievement: &Pubkey,
    master_mint: &Pubkey,
    user: &Pubkey,
    edition_mint: &Pubkey,
    edition_number: u64,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(derive_program_state_pda().0, false),
            AccountMeta::new_readonly(*brand, false),
            AccountMeta::new(*achievement, false),
            AccountMeta::new_readonly(*user, false),
            AccountMeta::new_readonly(*master_mint, false),
            AccountMeta::new(program_state_token_account(master_mint), false),
            AccountMeta::new(derive_metadata_pda(master_mint), false),
            AccountMeta::new(derive_master_edition_pda(master_mint), false),
            AccountMeta::new(*edition_mint, true),
            AccountMeta::new(get_associated_token_address(user, edition_mint), false),
            AccountMeta::new(derive_metadata_pda(edition_mint), false),
            AccountMeta::new(derive_master_edition_pda(edition_mint), false),
            AccountMeta::new(derive_edition_marker_pda(master_mint, edition_number), false),
            AccountMeta::new(derive_user_achievements_pda(user).0, false),
            AccountMeta::new(derive_user_achievement_pda(achievement, user).0, false),
            AccountMeta::new_readonly(TOKEN_METADATA_PROGRAM_ID, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
            AccountMeta::new_readonly(RENT_SYSVAR_ID, false),
        ],
        ix_data("award_non_fungible_achievement", ()),
    )
}

pub fn build_get_achievement_info_ix(achievement: &Pubkey) -> Instruction {
    ix(
        vec![AccountMeta::new_readonly(*achievement, false)],
        ix_data("get_achievement_info", ()),
    )
}

pub fn build_list_user_achievements_ix(user: &Pubkey, offset: u32) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*user, true),
            AccountMeta::new_readonly(derive_user_achievements_pda(user).0, false),
        ],
        ix_data("list_user_achievements", offset),
    )
}

// --- reward ---

pub fn build_initialize_user_rewards_ix(user: &Pubkey, authority: &Pubkey) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*user, true),
            AccountMeta::new(*authority, true),
            AccountMeta::new(derive_user_rewards_pda(user).0, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data("initialize_user_rewards", ()),
    )
}

pub fn build_create_fungible_reward_ix(
    authority: &Pubkey,
    brand: &Pubkey,
    reward: &Pubkey,
    mint: &Pubkey,
    name: &str,
    supply: u64,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(derive_program_state_pda().0, false),
            AccountMeta::new_readonly(*brand, false),
            AccountMeta::new(*reward, true),
            AccountMeta::new(*mint, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data(
            "create_fungible_reward",
            (name.to_string(), "Test Description".to_string(), supply),
        ),
    )
}

pub fn build_create_non_fungible_reward_ix(
    authority: &Pubkey,
    brand: &Pubkey,
    reward: &Pubkey,
    mint: &Pubkey,
    name: &str,
    metadata_uri: &str,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(derive_program_state_pda().0, false),
            AccountMeta::new_readonly(*brand, false),
            AccountMeta::new(*reward, true),
            AccountMeta::new(*mint, true),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data(
            "create_non_fungible_reward",
            (
                name.to_string(),
                "Test NFT Description".to_string(),
                metadata_uri.to_string(),
            ),
        ),
    )
}

pub fn build_issue_fungible_reward_ix(
    authority: &Pubkey,
    reward: &Pubkey,
    mint: &Pubkey,
    user: &Pubkey,
    amount: u64,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(derive_program_state_pda().0, false),
            AccountMeta::new(*reward, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new_readonly(*user, false),
            AccountMeta::new(get_associated_token_address(user, mint), false),
            AccountMeta::new(derive_user_rewards_pda(user).0, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data("issue_fungible_reward", amount),
    )
}

pub fn build_issue_non_fungible_reward_ix(
    authority: &Pubkey,
    reward: &Pubkey,
    mint: &Pubkey,
    reward_instance: &Pubkey,
    user: &Pubkey,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(derive_program_state_pda().0, false),
            AccountMeta::new(*reward, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new(*reward_instance, true),
            AccountMeta::new_readonly(*user, false),
            AccountMeta::new(get_associated_token_address(user, mint), false),
            AccountMeta::new(derive_user_rewards_pda(user).0, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data("issue_non_fungible_reward", ()),
    )
}

// --- membership ---

#[allow(clippy::too_many_arguments)]
pub fn build_initialize_membership_ix(
    authority: &Pubkey,
    brand: &Pubkey,
    membership_id: u64,
    name: &str,
    symbol: &str,
    base_uri: &str,
    max_supply: u64,
    is_elastic: bool,
    max_tiers: u8,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(*brand, false),
            AccountMeta::new(derive_membership_pda(brand, membership_id).0, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        ix_data(
            "initialize_membership",
            (
                membership_id,
                name.to_string(),
                symbol.to_string(),
                base_uri.to_string(),
                max_supply,
                is_elastic,
                max_tiers,
            ),
        ),
    )
}

pub fn build_create_membership_tier_ix(
    authority: &Pubkey,
    membership: &Pubkey,
    tier_id: &str,
    duration: i64,
    is_open: bool,
    tier_uri: &str,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*membership, false),
        ],
        ix_data(
            "create_membership_tier",
            (tier_id.to_string(), duration, is_open, tier_uri.to_string()),
        ),
    )
}

pub fn build_set_tier_status_ix(
    authority: &Pubkey,
    membership: &Pubkey,
    tier_index: u8,
    is_open: bool,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*membership, false),
        ],
        ix_data("set_tier_status", (tier_index, is_open)),
    )
}

pub fn build_update_max_supply_ix(
    authority: &Pubkey,
    membership: &Pubkey,
    new_max_supply: u64,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*membership, false),
        ],
        ix_data("update_max_supply", new_max_supply),
    )
}

pub fn build_mint_membership_ix(
    authority: &Pubkey,
    membership: &Pubkey,
    recipient: &Pubkey,
    mint: &Pubkey,
    tier_index: u8,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(*membership, false),
            AccountMeta::new_readonly(*recipient, false),
            AccountMeta::new(*mint, true),
            AccountMeta::new(get_associated_token_address(recipient, mint), false),
            AccountMeta::new(derive_metadata_pda(mint), false),
            AccountMeta::new(derive_master_edition_pda(mint), false),
            AccountMeta::new(derive_membership_token_pda(mint).0, false),
            AccountMeta::new_readonly(TOKEN_METADATA_PROGRAM_ID, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
            AccountMeta::new_readonly(RENT_SYSVAR_ID, false),
        ],
        ix_data("mint_membership", tier_index),
    )
}

pub fn build_burn_membership_ix(
    holder: &Pubkey,
    membership: &Pubkey,
    mint: &Pubkey,
    admin: &Pubkey,
) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*holder, true),
            AccountMeta::new(*membership, false),
            AccountMeta::new(*mint, false),
            AccountMeta::new(get_associated_token_address(holder, mint), false),
            AccountMeta::new(derive_membership_token_pda(mint).0, false),
            AccountMeta::new(*admin, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        ix_data("burn_membership", ()),
    )
}

pub fn build_get_membership_status_ix(membership: &Pubkey, mint: &Pubkey) -> Instruction {
    ix(
        vec![
            AccountMeta::new_readonly(*membership, false),
            AccountMeta::new_readonly(derive_membership_token_pda(mint).0, false),
        ],
        ix_data("get_membership_status", ()),
    )
}
