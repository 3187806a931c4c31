use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::transport::{HttpTransport, ReqwestTransport, TransportRequest};
use crate::types::{
    Environment, GatewayResponse, RegistrationDeletion, StatusIdType, StatusQuery,
    TransactionRequest,
};
use tracing::debug;

/// Stateless front door of the crate. Resolves each logical operation to a
/// fully qualified URL plus method and hands the call to the injected
/// transport; every invocation is independent and may run concurrently with
/// any other.
pub struct Dispatcher<T: HttpTransport = ReqwestTransport> {
    config: GatewayConfig,
    transport: T,
}

impl Dispatcher<ReqwestTransport> {
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self { config, transport })
    }

    pub fn from_env() -> GatewayResult<Self> {
        Self::new(GatewayConfig::from_env())
    }
}

impl<T: HttpTransport> Dispatcher<T> {
    /// Builds a dispatcher over a caller-supplied transport.
    pub fn with_transport(config: GatewayConfig, transport: T) -> Self {
        Self { config, transport }
    }

    /// Submits transaction data to the endpoint selected by the request's
    /// integration type. The response body is returned verbatim; gateway
    /// result codes inside it are the caller's business.
    pub async fn submit_transaction(
        &self,
        request: TransactionRequest,
    ) -> GatewayResult<GatewayResponse> {
        if request.access_token.is_empty() {
            return Err(GatewayError::required("access_token"));
        }

        let url = self.resolve_submit_url(&request)?;
        debug!(integration_type = %request.integration_type, %url, "submitting transaction");

        self.transport
            .execute(TransportRequest {
                method: reqwest::Method::POST,
                url,
                bearer_token: request.access_token,
                form_body: Some(request.parameters),
            })
            .await
    }

    /// Fetches a transaction result by checkout, payment, or merchant
    /// transaction ID.
    pub async fn query_status(&self, query: StatusQuery) -> GatewayResult<GatewayResponse> {
        if query.access_token.is_empty() {
            return Err(GatewayError::required("access_token"));
        }
        if query.entity_id.is_empty() {
            return Err(GatewayError::required("entity_id"));
        }
        if query.id.is_empty() {
            return Err(GatewayError::required("id"));
        }

        let url = self.resolve_status_url(&query);
        debug!(id_type = %query.id_type, %url, "querying payment status");

        self.transport
            .execute(TransportRequest {
                method: reqwest::Method::GET,
                url,
                bearer_token: query.access_token,
                form_body: None,
            })
            .await
    }

    /// Deletes a stored registration ID.
    pub async fn delete_registration(
        &self,
        request: RegistrationDeletion,
    ) -> GatewayResult<GatewayResponse> {
        if request.access_token.is_empty() {
            return Err(GatewayError::required("access_token"));
        }
        if request.entity_id.is_empty() {
            return Err(GatewayError::required("entity_id"));
        }
        if request.registration_id.is_empty() {
            return Err(GatewayError::required("registration_id"));
        }

        let url = self.resolve_deletion_url(&request);
        debug!(%url, "deleting registration");

        self.transport
            .execute(TransportRequest {
                method: reqwest::Method::DELETE,
                url,
                bearer_token: request.access_token,
                form_body: None,
            })
            .await
    }

    fn endpoint(&self, environment: Environment, path: &str) -> String {
        format!("{}{}", self.config.base_url(environment), path)
    }

    fn resolve_submit_url(&self, request: &TransactionRequest) -> GatewayResult<String> {
        use crate::types::IntegrationType::*;

        // Exact empty-string check, no trimming: callers own their whitespace.
        if request.integration_type.requires_reference_id() && request.reference_id.is_empty() {
            return Err(GatewayError::MissingReferenceId {
                integration_type: request.integration_type,
            });
        }

        let path = match request.integration_type {
            CopyAndPay => "/v1/checkouts".to_string(),
            ServerToServer => "/v1/payments".to_string(),
            ThreeDSecure => "/v1/threeDSecure".to_string(),
            TokenizeStandAlone => "/v1/registrations".to_string(),
            Manage => format!("/v1/payments/{}", request.reference_id),
            Recurring => format!("/v1/registrations/{}/payments", request.reference_id),
        };
        Ok(self.endpoint(request.environment, &path))
    }

    fn resolve_status_url(&self, query: &StatusQuery) -> String {
        let path = match query.id_type {
            StatusIdType::CheckoutId => {
                format!("/v1/checkouts/{}/payment?entityId={}", query.id, query.entity_id)
            }
            StatusIdType::PaymentId => {
                format!("/v1/query/{}?entityId={}", query.id, query.entity_id)
            }
            StatusIdType::MerchantTransactionId => format!(
                "/v1/query?entityId={}&merchantTransactionId={}",
                query.entity_id, query.id
            ),
        };
        self.endpoint(query.environment, &path)
    }

    fn resolve_deletion_url(&self, request: &RegistrationDeletion) -> String {
        self.endpoint(
            request.environment,
            &format!(
                "/v1/registrations/{}?entityId={}",
                request.registration_id, request.entity_id
            ),
        )
    }
}
