
pub const LOCAL_NODE_GRPC: &str = "grpc+http://localhost:9090";

pub const JUNO_GRPC_MAINNET: &str = "grpc+https://juno-grpc.polkachu.com:12690";
pub const JUNO_GRPC_TESTNET: &str = "grpc+https://juno-testnet-grpc.polkachu.com:12690";
pub const COSMOS_DIRECTORY_JUNO_REST: &str = "rest+https://rest.cosmos.directory/juno";

pub const JUNO_MAINNET_CHAIN_ID: &str = "juno-1";
pub const JUNO_TESTNET_CHAIN_ID: &str = "uni-6";
pub const JUNO_LOCAL_CHAIN_ID: &str = "testing";

pub const JUNO_PREFIX: &str = "juno";
pub const JUNO_DENOM: &str = "ujuno";
pub const JUNO_TESTNET_DENOM: &str = "ujunox";

/// BIP-44 coin type shared by juno and the cosmos hub.
pub const COSMOS_COIN_TYPE: u64 = 118;

pub const DEFAULT_QUERY_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_QUERY_INTERVAL_SECS: u64 = 2;

pub const DEFAULT_SECURE_PORT: u16 = 443;
pub const DEFAULT_INSECURE_PORT: u16 = 80;

pub mod rest_paths {
    pub const FEE_SHARES: &str = "/juno/feeshare/v1/fee_shares";
    pub const PARAMS: &str = "/juno/feeshare/v1/params";

    pub const AUTH_ACCOUNTS: &str = "/cosmos/auth/v1beta1/accounts";
    pub const TX_SIMULATE: &str = "/cosmos/tx/v1beta1/simulate";
    pub const TXS: &str = "/cosmos/tx/v1beta1/txs";

    /// `/juno/feeshare/v1/fee_shares/{address}`. The address is inserted as is.
    pub fn fee_shares_of(address: &str) -> String {
        format!("{FEE_SHARES}/{address}")
    }
}

pub mod grpc_paths {
    pub const FEE_SHARE: &str = "/juno.feeshare.v1.Query/FeeShare";
    pub const FEE_SHARES: &str = "/juno.feeshare.v1.Query/FeeShares";
    pub const DEPLOYER_FEE_SHARES: &str = "/juno.feeshare.v1.Query/DeployerFeeShares";
    pub const WITHDRAWER_FEE_SHARES: &str = "/juno.feeshare.v1.Query/WithdrawerFeeShares";
    pub const PARAMS: &str = "/juno.feeshare.v1.Query/Params";
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BroadcastMode {
    #[default]
    Sync = 2,
    Async = 3,
}

impl BroadcastMode {
    /// Value of `cosmos.tx.v1beta1.BroadcastMode`.
    pub fn repr(&self) -> i32 {
        *self as i32
    }

    /// Name used by the REST gateway.
    pub fn as_rest_str(&self) -> &'static str {
        match self {
            BroadcastMode::Sync => "BROADCAST_MODE_SYNC",
            BroadcastMode::Async => "BROADCAST_MODE_ASYNC",
        }
    }
}
