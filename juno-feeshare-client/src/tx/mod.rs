//! Prepare, sign and broadcast pipeline for fee share transactions.

mod grpc;
mod rest;

use std::str::FromStr;

use async_trait::async_trait;
use cosmrs::{
    tx::{Fee, SignDoc, SignerInfo},
    Coin, Denom,
};
use cosmwasm_std::Uint128;
use prost_types::Any;
use serde::{Deserialize, Serialize};
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

use crate::{
    config::{ClientConfig, NetworkConfig},
    definitions::BroadcastMode,
    errors::BroadcastError,
    math::{IntoUint128, TryIntoU64},
    msgs::Transaction,
    proto::serde_helpers::u64_string,
    traits::IntoAnyhowResult,
    wallet::TxSigner,
    AnyResult, FeeShareResult,
};

pub use {grpc::GrpcChainTransport, rest::RestChainTransport};

/// Outcome of a tx as reported by the node.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxResult {
    #[serde(rename = "txhash")]
    pub hash: String,
    #[serde(with = "u64_string")]
    pub height: u64,
    pub code: u32,
    pub raw_log: String,
    #[serde(with = "u64_string")]
    pub gas_wanted: u64,
    #[serde(with = "u64_string")]
    pub gas_used: u64,
}

impl TxResult {
    pub fn is_ok(&self) -> bool {
        self.code == 0
    }

    fn into_checked(self) -> FeeShareResult<TxResult> {
        if self.is_ok() {
            Ok(self)
        } else {
            warn!(hash = %self.hash, code = self.code, raw_log = %self.raw_log, "tx rejected");
            Err(BroadcastError::Rejected {
                code: self.code,
                raw_log: self.raw_log,
            }
            .into())
        }
    }
}

/// A broadcast tx that passed `CheckTx`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmittedTx {
    pub hash: String,
    pub check: TxResult,
}

/// Chain endpoints the pipeline needs.
#[async_trait]
pub trait ChainTransport: Send + Sync {
    /// `(account_number, sequence)`, `(0, 0)` for an account unknown to the chain.
    async fn account(&self, address: &str) -> FeeShareResult<(u64, u64)>;

    /// Gas used by the simulated tx.
    async fn simulate(&self, tx_bytes: Vec<u8>) -> FeeShareResult<u64>;

    async fn broadcast(&self, tx_bytes: Vec<u8>, mode: BroadcastMode) -> FeeShareResult<TxResult>;

    /// `None` while the tx is not included in a block.
    async fn get_tx(&self, hash: &str) -> FeeShareResult<Option<TxResult>>;
}

#[async_trait]
pub trait TxPipeline: Send + Sync {
    /// Sign `tx` for `sender` and broadcast it. Gas is simulated unless
    /// `gas_limit` is given.
    async fn prepare_and_broadcast(
        &self,
        tx: Transaction,
        sender: &dyn TxSigner,
        gas_limit: Option<u64>,
        memo: Option<String>,
    ) -> FeeShareResult<SubmittedTx>;

    /// Poll until `hash` is included in a block or the query timeout elapses.
    async fn wait_for_tx(&self, hash: &str) -> FeeShareResult<TxResult>;
}

pub struct BasicTxPipeline<T> {
    transport: T,
    network: NetworkConfig,
    config: ClientConfig,
}

impl<T: ChainTransport> BasicTxPipeline<T> {
    pub fn new(transport: T, network: NetworkConfig, config: ClientConfig) -> Self {
        Self {
            transport,
            network,
            config,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn fee(&self, gas_limit: u64) -> AnyResult<Fee> {
        let amount = gas_limit.as_uint128() * self.network.fee_minimum_gas_price + Uint128::one();

        Ok(Fee::from_amount_and_gas(
            Coin {
                denom: Denom::from_str(&self.network.fee_denomination).into_anyresult()?,
                amount: amount.into(),
            },
            gas_limit,
        ))
    }

    fn create_tx(
        &self,
        msgs: &[Any],
        sender: &dyn TxSigner,
        memo: &str,
        fee: Fee,
        account_number: u64,
        sequence: u64,
    ) -> AnyResult<Vec<u8>> {
        let tx_body = cosmrs::tx::BodyBuilder::new()
            .msgs(msgs.to_vec())
            .memo(memo)
            .finish();

        let auth_info = SignerInfo::single_direct(Some(sender.public_key()), sequence).auth_info(fee);

        let chain_id = self
            .network
            .chain_id
            .parse::<cosmrs::tendermint::chain::Id>()
            .into_anyresult()?;

        let sign_doc =
            SignDoc::new(&tx_body, &auth_info, &chain_id, account_number).into_anyresult()?;

        sender.sign(sign_doc)?.to_bytes().into_anyresult()
    }

    async fn estimate_gas(
        &self,
        msgs: &[Any],
        sender: &dyn TxSigner,
        memo: &str,
        account_number: u64,
        sequence: u64,
    ) -> FeeShareResult<u64> {
        let empty_fee = Fee {
            amount: vec![],
            gas_limit: 0,
            payer: None,
            granter: None,
        };

        let tx_bytes = self
            .create_tx(msgs, sender, memo, empty_fee, account_number, sequence)
            .map_err(BroadcastError::Signing)?;

        let gas_used = self.transport.simulate(tx_bytes).await?;

        let gas_limit = (gas_used.as_uint128() * self.config.gas_adjustment)
            .try_as_u64()
            .map_err(BroadcastError::Signing)?;

        debug!(gas_used, gas_limit, "simulated tx");

        Ok(gas_limit)
    }
}

#[async_trait]
impl<T: ChainTransport> TxPipeline for BasicTxPipeline<T> {
    async fn prepare_and_broadcast(
        &self,
        tx: Transaction,
        sender: &dyn TxSigner,
        gas_limit: Option<u64>,
        memo: Option<String>,
    ) -> FeeShareResult<SubmittedTx> {
        let address = sender.address().map_err(BroadcastError::Signing)?;
        let (account_number, sequence) = self.transport.account(&address).await?;

        let msgs = tx.into_msgs();
        let memo = memo.unwrap_or_default();

        let gas_limit = match gas_limit {
            Some(gas_limit) => gas_limit,
            None => {
                self.estimate_gas(&msgs, sender, &memo, account_number, sequence)
                    .await?
            }
        };

        let tx_bytes = self
            .fee(gas_limit)
            .and_then(|fee| self.create_tx(&msgs, sender, &memo, fee, account_number, sequence))
            .map_err(BroadcastError::Signing)?;

        let check = self
            .transport
            .broadcast(tx_bytes, self.config.broadcast_mode)
            .await?
            .into_checked()?;

        info!(hash = %check.hash, sender = %address, gas_limit, "broadcast tx");

        Ok(SubmittedTx {
            hash: check.hash.clone(),
            check,
        })
    }

    async fn wait_for_tx(&self, hash: &str) -> FeeShareResult<TxResult> {
        let deadline = Instant::now() + self.config.query_timeout;

        loop {
            if let Some(res) = self.transport.get_tx(hash).await? {
                return res.into_checked();
            }

            if Instant::now() >= deadline {
                return Err(BroadcastError::Timeout {
                    hash: hash.to_string(),
                    secs: self.config.query_timeout.as_secs(),
                }
                .into());
            }

            sleep(self.config.query_interval).await;
        }
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use std::{collections::VecDeque, sync::Mutex};

    use super::*;

    /// Canned chain answers, records what was sent.
    #[derive(Default)]
    pub struct MockChainTransport {
        pub account: (u64, u64),
        pub gas_used: u64,
        pub check: TxResult,
        pub tx_results: Mutex<VecDeque<Option<TxResult>>>,
        pub simulated: Mutex<u32>,
        pub broadcasted: Mutex<Vec<Vec<u8>>>,
        pub polled: Mutex<u32>,
    }

    #[async_trait]
    impl ChainTransport for MockChainTransport {
        async fn account(&self, _address: &str) -> FeeShareResult<(u64, u64)> {
            Ok(self.account)
        }

        async fn simulate(&self, _tx_bytes: Vec<u8>) -> FeeShareResult<u64> {
            *self.simulated.lock().unwrap() += 1;
            Ok(self.gas_used)
        }

        async fn broadcast(
            &self,
            tx_bytes: Vec<u8>,
            _mode: BroadcastMode,
        ) -> FeeShareResult<TxResult> {
            self.broadcasted.lock().unwrap().push(tx_bytes);
            Ok(self.check.clone())
        }

        async fn get_tx(&self, _hash: &str) -> FeeShareResult<Option<TxResult>> {
            *self.polled.lock().unwrap() += 1;
            Ok(self.tx_results.lock().unwrap().pop_front().flatten())
        }
    }
}

#[cfg(test)]
mod test {
    use std::{collections::VecDeque, sync::Mutex, time::Duration};

    use cosmrs::Tx;

    use super::{mock::MockChainTransport, *};
    use crate::{
        definitions::JUNO_PREFIX,
        msgs::{create_cancel_feeshare_msg, create_register_feeshare_msg},
        wallet::Wallet,
        FeeShareError,
    };

    fn ok_check(hash: &str) -> TxResult {
        TxResult {
            hash: hash.to_string(),
            ..Default::default()
        }
    }

    fn pipeline(transport: MockChainTransport) -> BasicTxPipeline<MockChainTransport> {
        BasicTxPipeline::new(
            transport,
            NetworkConfig::juno_local(),
            ClientConfig {
                query_interval: Duration::from_secs(1),
                query_timeout: Duration::from_secs(5),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn simulates_and_signs() {
        let wallet = Wallet::random(JUNO_PREFIX);
        let pipeline = pipeline(MockChainTransport {
            account: (12, 3),
            gas_used: 100_000,
            check: ok_check("ABCD"),
            ..Default::default()
        });

        let tx = Transaction::new().with_message(create_register_feeshare_msg(
            wallet.account_address().unwrap(),
            "juno1contract",
            "juno1withdrawer",
        ));

        let submitted = pipeline
            .prepare_and_broadcast(tx, &wallet, None, Some("fee share".to_string()))
            .await
            .unwrap();

        assert_eq!(submitted.hash, "ABCD");
        assert_eq!(*pipeline.transport().simulated.lock().unwrap(), 1);

        let broadcasted = pipeline.transport().broadcasted.lock().unwrap();
        assert_eq!(broadcasted.len(), 1);

        let tx = Tx::from_bytes(&broadcasted[0]).unwrap();
        assert_eq!(tx.body.memo, "fee share");
        assert_eq!(tx.body.messages.len(), 1);
        assert_eq!(
            tx.body.messages[0].type_url,
            "/juno.feeshare.v1.MsgRegisterFeeShare"
        );
        assert_eq!(tx.auth_info.signer_infos[0].sequence, 3);
        // 100_000 * 1.5
        assert_eq!(tx.auth_info.fee.gas_limit, 150_000);
        // 150_000 * 0.025 + 1
        assert_eq!(tx.auth_info.fee.amount[0].amount, 3_751);
        assert_eq!(tx.auth_info.fee.amount[0].denom.to_string(), "ujuno");
    }

    #[tokio::test]
    async fn gas_limit_override_skips_simulation() {
        let wallet = Wallet::random(JUNO_PREFIX);
        let pipeline = pipeline(MockChainTransport {
            check: ok_check("ABCD"),
            ..Default::default()
        });

        let tx = Transaction::new().with_message(create_cancel_feeshare_msg(
            wallet.account_address().unwrap(),
            "juno1contract",
        ));

        pipeline
            .prepare_and_broadcast(tx, &wallet, Some(200_000), None)
            .await
            .unwrap();

        assert_eq!(*pipeline.transport().simulated.lock().unwrap(), 0);

        let broadcasted = pipeline.transport().broadcasted.lock().unwrap();
        let tx = Tx::from_bytes(&broadcasted[0]).unwrap();
        assert_eq!(tx.auth_info.fee.gas_limit, 200_000);
        assert_eq!(tx.body.memo, "");
    }

    #[tokio::test]
    async fn rejected_check_is_broadcast_error() {
        let wallet = Wallet::random(JUNO_PREFIX);
        let pipeline = pipeline(MockChainTransport {
            check: TxResult {
                hash: "ABCD".to_string(),
                code: 5,
                raw_log: "insufficient funds".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });

        let err = pipeline
            .prepare_and_broadcast(
                Transaction::new()
                    .with_message(create_cancel_feeshare_msg("juno1sender", "juno1contract")),
                &wallet,
                Some(100_000),
                None,
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FeeShareError::Broadcast(BroadcastError::Rejected { code: 5, .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_for_tx_polls_until_found() {
        let pipeline = pipeline(MockChainTransport {
            tx_results: Mutex::new(VecDeque::from([None, None, Some(ok_check("ABCD"))])),
            ..Default::default()
        });

        let res = pipeline.wait_for_tx("ABCD").await.unwrap();

        assert_eq!(res.hash, "ABCD");
        assert_eq!(*pipeline.transport().polled.lock().unwrap(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_for_tx_times_out() {
        let pipeline = pipeline(MockChainTransport::default());

        let err = pipeline.wait_for_tx("ABCD").await.unwrap_err();

        assert!(matches!(
            err,
            FeeShareError::Broadcast(BroadcastError::Timeout { secs: 5, .. })
        ));
    }
}
