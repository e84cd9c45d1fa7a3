use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timed out after {duration_ms}ms")]
    Timeout { duration_ms: u64 },
}

pub type RpcResult<T> = Result<T, RpcError>;
