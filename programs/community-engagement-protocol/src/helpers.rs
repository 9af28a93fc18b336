// Protocol Helper Functions
//
// Field validation, admin-list bookkeeping and token CPI helpers shared
// by the brand, group hub, achievement, reward and membership instructions.
// Lengths are measured in bytes because account space is allocated in bytes.

use anchor_lang::prelude::*;
use anchor_spl::{
    metadata::{
        create_master_edition_v3, create_metadata_accounts_v3,
        mint_new_edition_from_master_edition_via_token, mpl_token_metadata::types::DataV2,
        CreateMasterEditionV3, CreateMetadataAccountsV3, MintNewEditionFromMasterEditionViaToken,
    },
    token::{mint_to, MintTo},
};

use crate::{constants::*, errors::*};

// VALIDATION HELPERS

pub fn validate_name(name: &str, max_len: usize) -> Result<()> {
    require!(name.len() <= max_len, CepError::NameTooLong);
    Ok(())
}

pub fn validate_description(description: &str) -> Result<()> {
    require!(
        description.len() <= MAX_DESCRIPTION_LENGTH,
        CepError::DescriptionTooLong
    );
    Ok(())
}

pub fn validate_criteria(criteria: &str) -> Result<()> {
    require!(
        criteria.len() <= MAX_CRITERIA_LENGTH,
        CepError::CriteriaTooLong
    );
    Ok(())
}

pub fn validate_uri(uri: &str) -> Result<()> {
    require!(uri.len() <= MAX_URI_LENGTH, CepError::UriTooLong);
    Ok(())
}

// Optional profile fields shared by brands and group hubs
pub fn validate_profile_metadata(
    website: &Option<String>,
    social_media: &Option<String>,
    category: &Option<String>,
    tags: &[String],
) -> Result<()> {
    let within = |field: &Option<String>, max: usize| field.as_ref().map_or(true, |v| v.len() <= max);

    require!(
        within(website, MAX_WEBSITE_LENGTH)
            && within(social_media, MAX_SOCIAL_MEDIA_LENGTH)
            && within(category, MAX_CATEGORY_LENGTH),
        CepError::MetadataFieldTooLong
    );
    require!(tags.len() <= MAX_TAGS, CepError::TooManyTags);
    require!(
        tags.iter().all(|tag| tag.len() <= MAX_TAG_LENGTH),
        CepError::TagTooLong
    );
    Ok(())
}

// ADMIN LIST HELPERS

// Caller must already be an admin; the new key must not be present yet
pub fn add_admin(admins: &mut Vec<Pubkey>, caller: &Pubkey, new_admin: Pubkey) -> Result<()> {
    require!(admins.contains(caller), CepError::Unauthorized);
    require!(!admins.contains(&new_admin), CepError::AdminAlreadyExists);
    require!(admins.len() < MAX_ADMINS, CepError::TooManyAdmins);

    admins.push(new_admin);
    Ok(())
}

// The last remaining admin can never be removed
pub fn remove_admin(admins: &mut Vec<Pubkey>, caller: &Pubkey, admin: &Pubkey) -> Result<()> {
    require!(admins.contains(caller), CepError::Unauthorized);
    require!(admins.contains(admin), CepError::AdminNotFound);
    require!(admins.len() > 1, CepError::CannotRemoveLastAdmin);

    admins.retain(|key| key != admin);
    Ok(())
}

// Bounded push used by every on-chain key list
pub fn push_bounded(list: &mut Vec<Pubkey>, key: Pubkey, capacity: usize, full: CepError) -> Result<()> {
    require!(list.len() < capacity, Into::<CepError>::into(full));
    list.push(key);
    Ok(())
}

// One page of a key list, starting at `offset`
pub fn page(keys: &[Pubkey], offset: u32) -> Vec<Pubkey> {
    keys.iter()
        .skip(offset as usize)
        .take(MAX_PAGE_KEYS)
        .copied()
        .collect()
}

// CPI HELPERS

// Mint tokens. `signer_seeds` is empty when the authority signs the
// transaction itself, or holds the program state seeds for PDA-held mints.
pub fn mint_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Accounts needed to turn a freshly minted token into a Metaplex master edition
pub struct NftMetadataAccounts<'a, 'info> {
    pub token_metadata_program: &'a AccountInfo<'info>,
    pub token_program: &'a AccountInfo<'info>,
    pub system_program: &'a AccountInfo<'info>,
    pub rent: &'a AccountInfo<'info>,
    pub metadata: &'a AccountInfo<'info>,
    pub master_edition: &'a AccountInfo<'info>,
    pub mint: &'a AccountInfo<'info>,
    // Mint authority, also set as update authority
    pub authority: &'a AccountInfo<'info>,
    pub payer: &'a AccountInfo<'info>,
}

// Create metadata and a master edition for `mint`, which must hold exactly
// one token. `max_supply` of Some(0) makes a 1-of-1, None allows unlimited prints.
pub fn create_nft_metadata(
    accounts: NftMetadataAccounts<'_, '_>,
    name: String,
    symbol: String,
    uri: String,
    max_supply: Option<u64>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    let data = DataV2 {
        name,
        symbol,
        uri,
        seller_fee_basis_points: 0,
        creators: None,
        collection: None,
        uses: None,
    };

    create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            accounts.token_metadata_program.clone(),
            CreateMetadataAccountsV3 {
                metadata: accounts.metadata.clone(),
                mint: accounts.mint.clone(),
                mint_authority: accounts.authority.clone(),
                payer: accounts.payer.clone(),
                update_authority: accounts.authority.clone(),
                system_program: accounts.system_program.clone(),
                rent: accounts.rent.clone(),
            },
            signer_seeds,
        ),
        data,
        true,
        true,
        None,
    )?;

    create_master_edition_v3(
        CpiContext::new_with_signer(
            accounts.token_metadata_program.clone(),
            CreateMasterEditionV3 {
                edition: accounts.master_edition.clone(),
                mint: accounts.mint.clone(),
                update_authority: accounts.authority.clone(),
                mint_authority: accounts.authority.clone(),
                payer: accounts.payer.clone(),
                metadata: accounts.metadata.clone(),
                token_program: accounts.token_program.clone(),
                system_program: accounts.system_program.clone(),
                rent: accounts.rent.clone(),
            },
            signer_seeds,
        ),
        max_supply,
    )
}

// Accounts needed to print a numbered edition of a master edition
pub struct EditionPrintAccounts<'a, 'info> {
    pub token_metadata_program: &'a AccountInfo<'info>,
    pub token_program: &'a AccountInfo<'info>,
    pub system_program: &'a AccountInfo<'info>,
    pub rent: &'a AccountInfo<'info>,
    pub master_mint: &'a AccountInfo<'info>,
    pub master_metadata: &'a AccountInfo<'info>,
    pub master_edition: &'a AccountInfo<'info>,
    pub master_token_account: &'a AccountInfo<'info>,
    pub edition_mint: &'a AccountInfo<'info>,
    pub edition_metadata: &'a AccountInfo<'info>,
    pub edition: &'a AccountInfo<'info>,
    pub edition_marker: &'a AccountInfo<'info>,
    // Holds the master token, the edition mint and the update authority
    pub authority: &'a AccountInfo<'info>,
    pub payer: &'a AccountInfo<'info>,
}

// Print edition `edition_number`. The edition mint must already hold its one token.
pub fn print_edition(
    accounts: EditionPrintAccounts<'_, '_>,
    edition_number: u64,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    mint_new_edition_from_master_edition_via_token(
        CpiContext::new_with_signer(
            accounts.token_metadata_program.clone(),
            MintNewEditionFromMasterEditionViaToken {
                new_metadata: accounts.edition_metadata.clone(),
                new_edition: accounts.edition.clone(),
                master_edition: accounts.master_edition.clone(),
                new_mint: accounts.edition_mint.clone(),
                edition_mark_pda: accounts.edition_marker.clone(),
                new_mint_authority: accounts.authority.clone(),
                payer: accounts.payer.clone(),
                token_account_owner: accounts.authority.clone(),
                token_account: accounts.master_token_account.clone(),
                new_metadata_update_authority: accounts.authority.clone(),
                metadata: accounts.master_metadata.clone(),
                token_program: accounts.token_program.clone(),
                system_program: accounts.system_program.clone(),
                rent: accounts.rent.clone(),
                metadata_mint: accounts.master_mint.clone(),
            },
            signer_seeds,
        ),
        edition_number,
    )
}
