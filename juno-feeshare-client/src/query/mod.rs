//! Feeshare query router: one set of operations served either over gRPC or REST.

mod grpc;
mod rest;

use async_trait::async_trait;

use crate::{
    proto::{
        QueryDeployerFeeSharesRequest, QueryDeployerFeeSharesResponse, QueryFeeShareRequest,
        QueryFeeShareResponse, QueryFeeSharesRequest, QueryFeeSharesResponse, QueryParamsRequest,
        QueryParamsResponse, QueryWithdrawerFeeSharesRequest, QueryWithdrawerFeeSharesResponse,
    },
    FeeShareResult,
};

pub use {
    grpc::{build_channel, GrpcFeeShareQueryClient},
    rest::RestFeeShareQueryClient,
};

/// Queries of the `juno.feeshare.v1.Query` service.
///
/// Both implementations return the response default (for instance a
/// [`QueryFeeShareResponse`] without `feeshare`) when the node reports that
/// nothing matched, and an error only when the request itself failed.
#[async_trait]
pub trait FeeShareQueryPort: Send + Sync {
    async fn fee_share(&self, request: QueryFeeShareRequest)
        -> FeeShareResult<QueryFeeShareResponse>;

    async fn fee_shares(
        &self,
        request: QueryFeeSharesRequest,
    ) -> FeeShareResult<QueryFeeSharesResponse>;

    async fn deployer_fee_shares(
        &self,
        request: QueryDeployerFeeSharesRequest,
    ) -> FeeShareResult<QueryDeployerFeeSharesResponse>;

    async fn withdrawer_fee_shares(
        &self,
        request: QueryWithdrawerFeeSharesRequest,
    ) -> FeeShareResult<QueryWithdrawerFeeSharesResponse>;

    async fn params(&self, request: QueryParamsRequest) -> FeeShareResult<QueryParamsResponse>;
}
