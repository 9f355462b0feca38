use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    definitions::rest_paths,
    proto::{
        PageRequest, QueryDeployerFeeSharesRequest, QueryDeployerFeeSharesResponse,
        QueryFeeShareRequest, QueryFeeShareResponse, QueryFeeSharesRequest,
        QueryFeeSharesResponse, QueryParamsRequest, QueryParamsResponse,
        QueryWithdrawerFeeSharesRequest, QueryWithdrawerFeeSharesResponse,
    },
    rest_client::{HttpRestClient, RestClient},
    FeeShareResult,
};

use super::FeeShareQueryPort;

/// Feeshare queries over the REST gateway.
///
/// Path parameters are substituted verbatim into the templates, addresses
/// containing reserved url characters are not escaped.
pub struct RestFeeShareQueryClient<C = HttpRestClient> {
    rest: C,
}

impl<C: RestClient> RestFeeShareQueryClient<C> {
    pub fn new(rest: C) -> Self {
        Self { rest }
    }

    pub fn rest_client(&self) -> &C {
        &self.rest
    }

    async fn get<R>(
        &self,
        path: &str,
        pagination: Option<&PageRequest>,
        empty_on_not_found: bool,
    ) -> FeeShareResult<R>
    where
        R: DeserializeOwned + Default,
    {
        let params = pagination
            .map(PageRequest::to_query_params)
            .unwrap_or_default();

        debug!(path, "feeshare rest query");

        let res = self.rest.get(path, &params).await?;

        if empty_on_not_found && res.is_not_found() {
            return Ok(R::default());
        }

        res.json()
    }
}

#[async_trait]
impl<C: RestClient> FeeShareQueryPort for RestFeeShareQueryClient<C> {
    async fn fee_share(
        &self,
        request: QueryFeeShareRequest,
    ) -> FeeShareResult<QueryFeeShareResponse> {
        self.get(
            &rest_paths::fee_shares_of(&request.contract_address),
            None,
            true,
        )
        .await
    }

    async fn fee_shares(
        &self,
        request: QueryFeeSharesRequest,
    ) -> FeeShareResult<QueryFeeSharesResponse> {
        self.get(rest_paths::FEE_SHARES, request.pagination.as_ref(), false)
            .await
    }

    async fn deployer_fee_shares(
        &self,
        request: QueryDeployerFeeSharesRequest,
    ) -> FeeShareResult<QueryDeployerFeeSharesResponse> {
        self.get(
            &rest_paths::fee_shares_of(&request.deployer_address),
            request.pagination.as_ref(),
            false,
        )
        .await
    }

    async fn withdrawer_fee_shares(
        &self,
        request: QueryWithdrawerFeeSharesRequest,
    ) -> FeeShareResult<QueryWithdrawerFeeSharesResponse> {
        self.get(
            &rest_paths::fee_shares_of(&request.withdrawer_address),
            request.pagination.as_ref(),
            false,
        )
        .await
    }

    async fn params(&self, _request: QueryParamsRequest) -> FeeShareResult<QueryParamsResponse> {
        self.get(rest_paths::PARAMS, None, false).await
    }
}
