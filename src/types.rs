use crate::error::GatewayError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Decoded JSON body returned verbatim from the gateway. No schema is
/// imposed or validated locally.
pub type GatewayResponse = serde_json::Value;

/// Workflow selector for [`submit_transaction`](crate::Dispatcher::submit_transaction).
///
/// `CopyAndPay` returns a checkout ID for the hosted payment widget.
/// `ServerToServer` runs synchronous transactions. `ThreeDSecure` requests a
/// standalone 3-D Secure check and returns the intermediate response without
/// redirecting. `TokenizeStandAlone` registers payment data on its own.
/// `Manage` operates on an existing transaction (refund, capture, reverse,
/// receipt) and `Recurring` charges against a registration; both require a
/// reference ID.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IntegrationType {
    CopyAndPay,
    ServerToServer,
    #[serde(rename = "threeDSecure")]
    ThreeDSecure,
    TokenizeStandAlone,
    Manage,
    Recurring,
}

impl IntegrationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntegrationType::CopyAndPay => "CopyAndPay",
            IntegrationType::ServerToServer => "ServerToServer",
            IntegrationType::ThreeDSecure => "threeDSecure",
            IntegrationType::TokenizeStandAlone => "TokenizeStandAlone",
            IntegrationType::Manage => "Manage",
            IntegrationType::Recurring => "Recurring",
        }
    }

    /// Whether this workflow addresses an existing transaction or
    /// registration and therefore needs a non-empty reference ID.
    pub fn requires_reference_id(&self) -> bool {
        matches!(self, IntegrationType::Manage | IntegrationType::Recurring)
    }
}

impl std::fmt::Display for IntegrationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IntegrationType {
    type Err = GatewayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "CopyAndPay" => Ok(IntegrationType::CopyAndPay),
            "ServerToServer" => Ok(IntegrationType::ServerToServer),
            "threeDSecure" => Ok(IntegrationType::ThreeDSecure),
            "TokenizeStandAlone" => Ok(IntegrationType::TokenizeStandAlone),
            "Manage" => Ok(IntegrationType::Manage),
            "Recurring" => Ok(IntegrationType::Recurring),
            _ => Err(GatewayError::UnknownIntegrationType {
                value: value.to_string(),
            }),
        }
    }
}

/// Kind of identifier handed to [`query_status`](crate::Dispatcher::query_status).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatusIdType {
    #[serde(rename = "checkoutId")]
    CheckoutId,
    #[serde(rename = "paymentId")]
    PaymentId,
    #[serde(rename = "merchantTransactionId")]
    MerchantTransactionId,
}

impl StatusIdType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusIdType::CheckoutId => "checkoutId",
            StatusIdType::PaymentId => "paymentId",
            StatusIdType::MerchantTransactionId => "merchantTransactionId",
        }
    }
}

impl std::fmt::Display for StatusIdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusIdType {
    type Err = GatewayError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "checkoutId" => Ok(StatusIdType::CheckoutId),
            "paymentId" => Ok(StatusIdType::PaymentId),
            "merchantTransactionId" => Ok(StatusIdType::MerchantTransactionId),
            _ => Err(GatewayError::UnknownIdType {
                value: value.to_string(),
            }),
        }
    }
}

/// Sandbox vs. production gateway. Selects the host subdomain; every other
/// part of the request is identical across the two.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    #[default]
    Test,
    Live,
}

impl Environment {
    /// Pure subdomain resolution: `eu-test` for the sandbox, `eu-prod` live.
    pub fn subdomain(&self) -> &'static str {
        match self {
            Environment::Test => "eu-test",
            Environment::Live => "eu-prod",
        }
    }

    /// For callers still holding the legacy `test_mode` boolean.
    pub fn from_test_flag(test_mode: bool) -> Self {
        if test_mode {
            Environment::Test
        } else {
            Environment::Live
        }
    }
}

/// One transaction submission. `parameters` is the caller's pre-encoded
/// `application/x-www-form-urlencoded` string and is sent as the body
/// untouched; this layer never encodes or validates form content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub integration_type: IntegrationType,
    pub access_token: String,
    pub parameters: String,
    /// Registration ID or previously approved transaction ID. Required for
    /// `Manage` and `Recurring`, ignored otherwise.
    pub reference_id: String,
    pub environment: Environment,
}

impl TransactionRequest {
    pub fn new(
        integration_type: IntegrationType,
        access_token: impl Into<String>,
        parameters: impl Into<String>,
    ) -> Self {
        Self {
            integration_type,
            access_token: access_token.into(),
            parameters: parameters.into(),
            reference_id: String::new(),
            environment: Environment::default(),
        }
    }

    pub fn with_reference_id(mut self, reference_id: impl Into<String>) -> Self {
        self.reference_id = reference_id.into();
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

/// Lookup of a transaction result by checkout, payment, or merchant
/// transaction ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusQuery {
    pub access_token: String,
    /// Merchant/channel entity ID assigned by the service provider.
    pub entity_id: String,
    pub id: String,
    pub id_type: StatusIdType,
    pub environment: Environment,
}

impl StatusQuery {
    pub fn new(
        access_token: impl Into<String>,
        entity_id: impl Into<String>,
        id: impl Into<String>,
        id_type: StatusIdType,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            entity_id: entity_id.into(),
            id: id.into(),
            id_type,
            environment: Environment::default(),
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

/// Removal of a stored registration ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDeletion {
    pub access_token: String,
    pub entity_id: String,
    pub registration_id: String,
    pub environment: Environment,
}

impl RegistrationDeletion {
    pub fn new(
        access_token: impl Into<String>,
        entity_id: impl Into<String>,
        registration_id: impl Into<String>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            entity_id: entity_id.into(),
            registration_id: registration_id.into(),
            environment: Environment::default(),
        }
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}
