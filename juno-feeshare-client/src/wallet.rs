use std::{fmt::Debug, str::FromStr};

use anyhow::anyhow;
use bip39::Mnemonic;
use cosmrs::{
    crypto::{secp256k1::SigningKey, PublicKey},
    tx::{Raw, SignDoc},
};

use crate::{traits::IntoAnyhowResult, AnyResult};

/// Identity sending a transaction: knows its address and signs sign docs.
pub trait TxSigner: Send + Sync {
    fn address(&self) -> AnyResult<String>;

    fn public_key(&self) -> PublicKey;

    fn sign(&self, sign_doc: SignDoc) -> AnyResult<Raw>;
}

/// In memory secp256k1 key with its bech32 prefix.
#[non_exhaustive]
pub struct Wallet {
    sign_key: SigningKey,
    pub prefix: String,
}

impl Wallet {
    pub fn random(chain_prefix: impl Into<String>) -> Wallet {
        Wallet {
            sign_key: SigningKey::random(),
            prefix: chain_prefix.into(),
        }
    }

    /// `private_key` is hex encoded.
    pub fn from_private_key(
        private_key: impl Into<String>,
        chain_prefix: impl Into<String>,
    ) -> AnyResult<Wallet> {
        let private_key: String = private_key.into();

        let bytes = subtle_encoding::hex::decode(private_key.trim().trim_start_matches("0x"))
            .map_err(|err| anyhow!("Invalid private key, error: {err}"))?;

        let sign_key = SigningKey::from_slice(&bytes).into_anyresult()?;

        Ok(Wallet {
            sign_key,
            prefix: chain_prefix.into(),
        })
    }

    pub fn from_seed_phrase(
        seed_phrase: impl Into<String>,
        chain_prefix: impl Into<String>,
        coin_type: impl Into<u64>,
        account_index: u64,
    ) -> AnyResult<Wallet> {
        let seed = Mnemonic::from_str(&seed_phrase.into())?.to_seed("");

        let derivation_path = bip32::DerivationPath::from_str(&format!(
            "m/44'/{}'/0'/0/{account_index}",
            coin_type.into()
        ))?;
        let sign_key = SigningKey::derive_from_path(seed, &derivation_path).into_anyresult()?;

        Ok(Wallet {
            sign_key,
            prefix: chain_prefix.into(),
        })
    }

    pub fn account_address(&self) -> AnyResult<String> {
        Ok(self
            .sign_key
            .public_key()
            .account_id(&self.prefix)
            .into_anyresult()?
            .into())
    }
}

impl TxSigner for Wallet {
    fn address(&self) -> AnyResult<String> {
        self.account_address()
    }

    fn public_key(&self) -> PublicKey {
        self.sign_key.public_key()
    }

    fn sign(&self, sign_doc: SignDoc) -> AnyResult<Raw> {
        sign_doc.sign(&self.sign_key).into_anyresult()
    }
}

impl Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet")
            .field("account_address", &self.account_address())
            .field("prefix", &self.prefix)
            .finish()
    }
}
