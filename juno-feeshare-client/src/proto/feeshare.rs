use serde::{Deserialize, Serialize};

use super::pagination::{PageRequest, PageResponse};

/// FeeShare defines an instance that organizes fee distribution conditions for
/// the owner of a given smart contract
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeShare {
    #[prost(string, tag = "1")]
    pub contract_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub deployer_address: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub withdrawer_address: ::prost::alloc::string::String,
}
/// Params defines the feeshare module params
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    #[prost(bool, tag = "1")]
    pub enable_fee_share: bool,
    /// share of the transaction fees that goes to the withdrawer, sdk.Dec as string
    #[prost(string, tag = "2")]
    pub developer_shares: ::prost::alloc::string::String,
    #[prost(string, repeated, tag = "3")]
    pub allowed_denoms: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
/// QueryFeeSharesRequest is the request type for the Query/FeeShares RPC method.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFeeSharesRequest {
    #[prost(message, optional, tag = "1")]
    pub pagination: ::core::option::Option<PageRequest>,
}
/// QueryFeeSharesResponse is the response type for the Query/FeeShares RPC method.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFeeSharesResponse {
    #[prost(message, repeated, tag = "1")]
    pub feeshare: ::prost::alloc::vec::Vec<FeeShare>,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<PageResponse>,
}
/// QueryFeeShareRequest is the request type for the Query/FeeShare RPC method.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFeeShareRequest {
    #[prost(string, tag = "1")]
    pub contract_address: ::prost::alloc::string::String,
}
/// QueryFeeShareResponse is the response type for the Query/FeeShare RPC method.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFeeShareResponse {
    #[prost(message, optional, tag = "1")]
    pub feeshare: ::core::option::Option<FeeShare>,
}
/// QueryParamsRequest is the request type for the Query/Params RPC method.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct QueryParamsRequest {}
/// QueryParamsResponse is the response type for the Query/Params RPC method.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryParamsResponse {
    #[prost(message, optional, tag = "1")]
    pub params: ::core::option::Option<Params>,
}
/// QueryDeployerFeeSharesRequest is the request type for the
/// Query/DeployerFeeShares RPC method.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDeployerFeeSharesRequest {
    #[prost(string, tag = "1")]
    pub deployer_address: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<PageRequest>,
}
/// QueryDeployerFeeSharesResponse is the response type for the
/// Query/DeployerFeeShares RPC method.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDeployerFeeSharesResponse {
    #[prost(string, repeated, tag = "1")]
    pub contract_addresses: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<PageResponse>,
}
/// QueryWithdrawerFeeSharesRequest is the request type for the
/// Query/WithdrawerFeeShares RPC method.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryWithdrawerFeeSharesRequest {
    #[prost(string, tag = "1")]
    pub withdrawer_address: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<PageRequest>,
}
/// QueryWithdrawerFeeSharesResponse is the response type for the
/// Query/WithdrawerFeeShares RPC method.
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryWithdrawerFeeSharesResponse {
    #[prost(string, repeated, tag = "1")]
    pub contract_addresses: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
    #[prost(message, optional, tag = "2")]
    pub pagination: ::core::option::Option<PageResponse>,
}
/// MsgRegisterFeeShare defines a message that registers a FeeShare
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgRegisterFeeShare {
    #[prost(string, tag = "1")]
    pub contract_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub deployer_address: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub withdrawer_address: ::prost::alloc::string::String,
}
/// MsgUpdateFeeShare defines a message that updates the withdrawer address for a
/// registered FeeShare
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgUpdateFeeShare {
    #[prost(string, tag = "1")]
    pub contract_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub deployer_address: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub withdrawer_address: ::prost::alloc::string::String,
}
/// MsgCancelFeeShare defines a message that cancels a registered FeeShare
#[derive(Clone, PartialEq, ::prost::Message, Serialize, Deserialize)]
pub struct MsgCancelFeeShare {
    #[prost(string, tag = "1")]
    pub contract_address: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub deployer_address: ::prost::alloc::string::String,
}

