//! Async client for the OPPWA (Open Payment Platform) COPYandPAY REST API.
//!
//! The crate is a thin request layer: it resolves a logical operation to one
//! of the gateway's fixed `/v1` endpoints, performs a single HTTP call, and
//! hands the decoded JSON body back untouched. It keeps no state between
//! calls and imposes no schema on responses.
//!
//! ```no_run
//! use oppwa_client::{Dispatcher, GatewayConfig, IntegrationType, TransactionRequest};
//!
//! # async fn run() -> Result<(), oppwa_client::GatewayError> {
//! let dispatcher = Dispatcher::new(GatewayConfig::default())?;
//! let response = dispatcher
//!     .submit_transaction(TransactionRequest::new(
//!         IntegrationType::CopyAndPay,
//!         "OGE4Mjk0MTc0YjdlY2IyO...",
//!         "entityId=8a8294174b7ecb28014b9699220015ca&amount=92.00&currency=EUR&paymentType=DB",
//!     ))
//!     .await?;
//! println!("checkout id: {:?}", response.get("id"));
//! # Ok(())
//! # }
//! ```

mod config;
mod dispatcher;
mod error;
mod transport;
mod types;

pub use config::{GatewayConfig, DEFAULT_GATEWAY_DOMAIN, DEFAULT_TIMEOUT_SECS};
pub use dispatcher::Dispatcher;
pub use error::{GatewayError, GatewayResult};
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest};
pub use types::{
    Environment, GatewayResponse, IntegrationType, RegistrationDeletion, StatusIdType, StatusQuery,
    TransactionRequest,
};
