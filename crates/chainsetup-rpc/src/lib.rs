//! RPC plumbing for chainsetup
//!
//! Two outbound concerns live here: asking a candidate JSON-RPC endpoint for
//! its current block height under a time budget, and fetching the list of
//! advertised endpoints for a network from the chain registry. Both are
//! exposed behind small traits so the workflow can be driven by stubs.

pub mod error;
pub mod probe;
pub mod registry;
pub mod types;

pub use error::{RpcError, RpcResult};
pub use probe::{EndpointProber, RpcProber, DEFAULT_PROBE_TIMEOUT};
pub use registry::{CandidateSource, RegistryClient};
pub use types::{ChainRecord, ProbeResult};
