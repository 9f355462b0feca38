use async_trait::async_trait;
use prost::Message;
use tonic::{
    codec::ProstCodec,
    codegen::http::uri::PathAndQuery,
    transport::{Certificate, Channel, ClientTlsConfig},
    Code,
};
use tracing::debug;

use crate::{
    config::ClientConfig,
    definitions::grpc_paths,
    errors::{FeeShareError, TransportError},
    proto::{
        QueryDeployerFeeSharesRequest, QueryDeployerFeeSharesResponse, QueryFeeShareRequest,
        QueryFeeShareResponse, QueryFeeSharesRequest, QueryFeeSharesResponse, QueryParamsRequest,
        QueryParamsResponse, QueryWithdrawerFeeSharesRequest, QueryWithdrawerFeeSharesResponse,
    },
    urls::ParsedUrl,
    FeeShareResult,
};

use super::FeeShareQueryPort;

/// Lazily connected channel for `url`.
///
/// Secure channels trust the platform roots. The PEM bundle at
/// [`ClientConfig::ca_bundle`] is trusted in addition to them, it does not
/// replace them. The bundle is read here, once.
pub async fn build_channel(url: &ParsedUrl, config: &ClientConfig) -> FeeShareResult<Channel> {
    let uri = url.grpc_uri();

    let mut endpoint = Channel::from_shared(uri.clone())
        .map_err(|err| FeeShareError::invalid_url(&uri, err.to_string()))?
        .timeout(config.query_timeout);

    if url.secure() {
        let mut tls = ClientTlsConfig::new().domain_name(url.host());

        if let Some(path) = &config.ca_bundle {
            let pem = tokio::fs::read(path).await?;
            tls = tls.ca_certificate(Certificate::from_pem(pem));
        }

        endpoint = endpoint.tls_config(tls)?;
    }

    debug!(uri = %uri, secure = url.secure(), "grpc channel");

    Ok(endpoint.connect_lazy())
}

/// Feeshare queries over gRPC, one unary call per operation.
#[derive(Clone)]
pub struct GrpcFeeShareQueryClient {
    inner: tonic::client::Grpc<Channel>,
}

impl GrpcFeeShareQueryClient {
    pub fn new(channel: Channel) -> Self {
        Self {
            inner: tonic::client::Grpc::new(channel),
        }
    }

    async fn unary<Q, R>(&self, request: Q, path: &'static str) -> FeeShareResult<R>
    where
        Q: Message + Send + Sync + 'static,
        R: Message + Default + Send + Sync + 'static,
    {
        let mut client = self.inner.clone();

        client.ready().await?;

        debug!(path, "feeshare grpc query");

        let codec: ProstCodec<Q, R> = ProstCodec::default();

        Ok(client
            .unary(
                tonic::Request::new(request),
                PathAndQuery::from_static(path),
                codec,
            )
            .await?
            .into_inner())
    }
}

#[async_trait]
impl FeeShareQueryPort for GrpcFeeShareQueryClient {
    async fn fee_share(
        &self,
        request: QueryFeeShareRequest,
    ) -> FeeShareResult<QueryFeeShareResponse> {
        match self.unary(request, grpc_paths::FEE_SHARE).await {
            Err(FeeShareError::Transport(TransportError::Grpc(status)))
                if status.code() == Code::NotFound =>
            {
                Ok(QueryFeeShareResponse::default())
            }
            res => res,
        }
    }

    async fn fee_shares(
        &self,
        request: QueryFeeSharesRequest,
    ) -> FeeShareResult<QueryFeeSharesResponse> {
        self.unary(request, grpc_paths::FEE_SHARES).await
    }

    async fn deployer_fee_shares(
        &self,
        request: QueryDeployerFeeSharesRequest,
    ) -> FeeShareResult<QueryDeployerFeeSharesResponse> {
        self.unary(request, grpc_paths::DEPLOYER_FEE_SHARES).await
    }

    async fn withdrawer_fee_shares(
        &self,
        request: QueryWithdrawerFeeSharesRequest,
    ) -> FeeShareResult<QueryWithdrawerFeeSharesResponse> {
        self.unary(request, grpc_paths::WITHDRAWER_FEE_SHARES).await
    }

    async fn params(&self, request: QueryParamsRequest) -> FeeShareResult<QueryParamsResponse> {
        self.unary(request, grpc_paths::PARAMS).await
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use super::*;
    use crate::{
        definitions::{JUNO_GRPC_MAINNET, LOCAL_NODE_GRPC},
        parse_url,
    };

    #[tokio::test]
    async fn unreachable_node_is_transport_error() {
        let url = parse_url("grpc+http://127.0.0.1:1").unwrap();
        let channel = build_channel(&url, &ClientConfig::default())
            .await
            .unwrap();
        let client = GrpcFeeShareQueryClient::new(channel);

        let err = client
            .fee_share(QueryFeeShareRequest {
                contract_address: "juno1contract".to_string(),
            })
            .await
            .unwrap_err();

        assert!(err.is_transport(), "{err}");
    }

    #[tokio::test]
    async fn missing_ca_bundle_fails_at_construction() {
        let url = parse_url(JUNO_GRPC_MAINNET).unwrap();
        let config = ClientConfig {
            ca_bundle: Some(PathBuf::from("/nonexistent/ca-bundle.pem")),
            ..Default::default()
        };

        assert!(matches!(
            build_channel(&url, &config).await.unwrap_err(),
            FeeShareError::Io(_)
        ));
    }

    #[tokio::test]
    async fn ca_bundle_is_loaded_for_secure_channels() {
        let url = parse_url("grpc+https://localhost:9090").unwrap();
        let config = ClientConfig {
            ca_bundle: Some(PathBuf::from(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/testdata/local-ca.pem"
            ))),
            ..Default::default()
        };

        assert!(build_channel(&url, &config).await.is_ok());
    }

    #[tokio::test]
    async fn insecure_channel_ignores_ca_bundle() {
        let url = parse_url(LOCAL_NODE_GRPC).unwrap();
        let config = ClientConfig {
            ca_bundle: Some(PathBuf::from("/nonexistent/ca-bundle.pem")),
            ..Default::default()
        };

        assert!(build_channel(&url, &config).await.is_ok());
    }

    #[test]
    fn request_wire_encoding() {
        let request = QueryFeeShareRequest {
            contract_address: "juno1contract".to_string(),
        };

        let decoded = QueryFeeShareRequest::decode(request.encode_to_vec().as_slice()).unwrap();
        assert_eq!(decoded, request);
        // field 1, length delimited
        assert_eq!(request.encode_to_vec()[0], 0x0a);
    }

    #[tokio::test]
    #[ignore = "requires a live juno node"]
    async fn live_params() {
        let url = parse_url(JUNO_GRPC_MAINNET).unwrap();
        let channel = build_channel(&url, &ClientConfig::default())
            .await
            .unwrap();
        let client = GrpcFeeShareQueryClient::new(channel);

        let _res = client.params(QueryParamsRequest {}).await.unwrap();
    }
}
