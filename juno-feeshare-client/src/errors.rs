use thiserror::Error;

pub type FeeShareResult<T> = Result<T, FeeShareError>;

#[derive(Debug, Error)]
pub enum FeeShareError {
    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("broadcast error: {0}")]
    Broadcast(#[from] BroadcastError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl FeeShareError {
    pub fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        FeeShareError::InvalidUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    /// True for network level failures, as opposed to bad input or decode errors.
    pub fn is_transport(&self) -> bool {
        matches!(self, FeeShareError::Transport(_))
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("grpc status: {0}")]
    Grpc(#[from] tonic::Status),

    #[error("grpc connection: {0}")]
    Connect(#[from] tonic::transport::Error),

    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    #[error("http status {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Debug, Error)]
pub enum BroadcastError {
    #[error("tx rejected with code {code}: {raw_log}")]
    Rejected { code: u32, raw_log: String },

    #[error("tx {hash} not found after {secs}s")]
    Timeout { hash: String, secs: u64 },

    #[error("signing failed: {0}")]
    Signing(anyhow::Error),
}

impl From<tonic::Status> for FeeShareError {
    fn from(value: tonic::Status) -> Self {
        TransportError::Grpc(value).into()
    }
}

impl From<tonic::transport::Error> for FeeShareError {
    fn from(value: tonic::transport::Error) -> Self {
        TransportError::Connect(value).into()
    }
}

impl From<reqwest::Error> for FeeShareError {
    fn from(value: reqwest::Error) -> Self {
        TransportError::Http(value).into()
    }
}

impl From<serde_json::Error> for FeeShareError {
    fn from(value: serde_json::Error) -> Self {
        FeeShareError::Decode(value.to_string())
    }
}

impl From<prost::DecodeError> for FeeShareError {
    fn from(value: prost::DecodeError) -> Self {
        FeeShareError::Decode(value.to_string())
    }
}
