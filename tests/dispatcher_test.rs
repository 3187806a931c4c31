use oppwa_client::{
    Dispatcher, Environment, GatewayConfig, GatewayError, GatewayResult, GatewayResponse,
    HttpTransport, IntegrationType, RegistrationDeletion, StatusIdType, StatusQuery,
    TransactionRequest, TransportRequest,
};
use serde_json::json;
use std::sync::Mutex;

/// Records every request it sees and answers with a fixed body, so tests can
/// assert the exact wire call without a network.
struct EchoTransport {
    seen: Mutex<Vec<TransportRequest>>,
    reply: GatewayResponse,
}

impl EchoTransport {
    fn new(reply: GatewayResponse) -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
            reply,
        }
    }

    fn requests(&self) -> Vec<TransportRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl HttpTransport for &EchoTransport {
    async fn execute(&self, request: TransportRequest) -> GatewayResult<GatewayResponse> {
        self.seen.lock().unwrap().push(request);
        Ok(self.reply.clone())
    }
}

fn dispatcher(transport: &EchoTransport) -> Dispatcher<&EchoTransport> {
    Dispatcher::with_transport(GatewayConfig::default(), transport)
}

#[tokio::test]
async fn submit_posts_form_body_to_resolved_endpoint() {
    let transport = EchoTransport::new(json!({"ok": true}));
    let response = dispatcher(&transport)
        .submit_transaction(
            TransactionRequest::new(
                IntegrationType::ServerToServer,
                "tok_abc",
                "entityId=ENT&amount=92.00&currency=EUR",
            )
            .with_environment(Environment::Live),
        )
        .await
        .expect("submission should succeed");

    assert_eq!(response, json!({"ok": true}));
    let seen = transport.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, reqwest::Method::POST);
    assert_eq!(seen[0].url, "https://eu-prod.oppwa.com/v1/payments");
    assert_eq!(seen[0].bearer_token, "tok_abc");
    assert_eq!(
        seen[0].form_body.as_deref(),
        Some("entityId=ENT&amount=92.00&currency=EUR")
    );
}

#[tokio::test]
async fn every_integration_type_hits_its_documented_url() {
    let transport = EchoTransport::new(json!({"ok": true}));
    let dispatcher = dispatcher(&transport);

    for (integration_type, reference_id, expected) in [
        (IntegrationType::CopyAndPay, "", "https://eu-test.oppwa.com/v1/checkouts"),
        (IntegrationType::ServerToServer, "", "https://eu-test.oppwa.com/v1/payments"),
        (IntegrationType::ThreeDSecure, "", "https://eu-test.oppwa.com/v1/threeDSecure"),
        (
            IntegrationType::TokenizeStandAlone,
            "",
            "https://eu-test.oppwa.com/v1/registrations",
        ),
        (
            IntegrationType::Manage,
            "pay_1",
            "https://eu-test.oppwa.com/v1/payments/pay_1",
        ),
        (
            IntegrationType::Recurring,
            "reg_1",
            "https://eu-test.oppwa.com/v1/registrations/reg_1/payments",
        ),
    ] {
        dispatcher
            .submit_transaction(
                TransactionRequest::new(integration_type, "tok", "amount=1")
                    .with_reference_id(reference_id),
            )
            .await
            .expect("submission should succeed");
        assert_eq!(transport.requests().last().unwrap().url, expected);
    }
}

#[tokio::test]
async fn manage_without_reference_performs_no_call() {
    let transport = EchoTransport::new(json!({"ok": true}));
    let err = dispatcher(&transport)
        .submit_transaction(TransactionRequest::new(
            IntegrationType::Manage,
            "tok",
            "amount=1",
        ))
        .await
        .expect_err("empty reference_id must fail");

    assert!(matches!(
        err,
        GatewayError::MissingReferenceId {
            integration_type: IntegrationType::Manage
        }
    ));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn status_queries_use_get_with_exact_urls() {
    let transport = EchoTransport::new(json!({"ok": true}));
    let dispatcher = dispatcher(&transport);

    for (id_type, expected) in [
        (
            StatusIdType::CheckoutId,
            "https://eu-test.oppwa.com/v1/checkouts/CK_9/payment?entityId=ENT_1",
        ),
        (
            StatusIdType::PaymentId,
            "https://eu-test.oppwa.com/v1/query/CK_9?entityId=ENT_1",
        ),
        (
            StatusIdType::MerchantTransactionId,
            "https://eu-test.oppwa.com/v1/query?entityId=ENT_1&merchantTransactionId=CK_9",
        ),
    ] {
        let response = dispatcher
            .query_status(StatusQuery::new("tok", "ENT_1", "CK_9", id_type))
            .await
            .expect("query should succeed");
        assert_eq!(response, json!({"ok": true}));

        let last = transport.requests().pop().unwrap();
        assert_eq!(last.method, reqwest::Method::GET);
        assert_eq!(last.url, expected);
        assert_eq!(last.form_body, None);
    }
}

#[tokio::test]
async fn deletion_issues_delete_and_returns_body_unchanged() {
    let reply = json!({"result": {"code": "000.100.110"}});
    let transport = EchoTransport::new(reply.clone());
    let response = dispatcher(&transport)
        .delete_registration(RegistrationDeletion::new("tok", "ENT_1", "REG_7"))
        .await
        .expect("deletion should succeed");

    assert_eq!(response, reply);
    let seen = transport.requests();
    assert_eq!(seen[0].method, reqwest::Method::DELETE);
    assert_eq!(
        seen[0].url,
        "https://eu-test.oppwa.com/v1/registrations/REG_7?entityId=ENT_1"
    );
    assert_eq!(seen[0].form_body, None);
}

#[tokio::test]
async fn transport_failures_surface_as_typed_errors() {
    struct FailingTransport;

    #[async_trait::async_trait]
    impl HttpTransport for FailingTransport {
        async fn execute(&self, _request: TransportRequest) -> GatewayResult<GatewayResponse> {
            Err(GatewayError::Transport {
                message: "connection reset by peer".to_string(),
            })
        }
    }

    let dispatcher = Dispatcher::with_transport(GatewayConfig::default(), FailingTransport);
    let err = dispatcher
        .query_status(StatusQuery::new("tok", "ENT_1", "CK_9", StatusIdType::PaymentId))
        .await
        .expect_err("transport failure must propagate");
    assert!(err.is_transport());
}

#[tokio::test]
async fn concurrent_calls_resolve_independently() {
    let transport = EchoTransport::new(json!({"ok": true}));
    let dispatcher = dispatcher(&transport);

    let checkout = dispatcher.submit_transaction(TransactionRequest::new(
        IntegrationType::CopyAndPay,
        "tok",
        "amount=1",
    ));
    let status = dispatcher.query_status(StatusQuery::new(
        "tok",
        "ENT_1",
        "CK_9",
        StatusIdType::CheckoutId,
    ));
    let (checkout, status) = tokio::join!(checkout, status);

    assert_eq!(checkout.unwrap(), json!({"ok": true}));
    assert_eq!(status.unwrap(), json!({"ok": true}));
    assert_eq!(transport.requests().len(), 2);
}
