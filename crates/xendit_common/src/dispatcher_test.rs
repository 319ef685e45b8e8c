#[cfg(test)]
mod tests {
    use crate::dispatcher::{Dispatcher, RequestDescriptor};
    use crate::error::{ApiFailure, FailureCategory, XenditError};
    use crate::http::{BoxFuture, HttpRequest, HttpResponse, Transport};
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
    use reqwest::Method;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};
    use xendit_config::{ApiConfig, BodyEncoding};

    /// Records every request and answers with a canned outcome.
    struct RecordingTransport {
        outcome: Result<HttpResponse, ApiFailure>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingTransport {
        fn responding(status: u16, body: &str) -> Arc<Self> {
            Arc::new(Self {
                outcome: Ok(HttpResponse::new(status, body)),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn failing(failure: ApiFailure) -> Arc<Self> {
            Arc::new(Self {
                outcome: Err(failure),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<HttpRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for RecordingTransport {
        fn send(&self, request: HttpRequest) -> BoxFuture<'_, HttpResponse, ApiFailure> {
            self.requests.lock().unwrap().push(request);
            let outcome = self.outcome.clone();
            Box::pin(async move { outcome })
        }
    }

    fn test_config() -> ApiConfig {
        ApiConfig::with_secret_key("xnd_development_abc").base_url("https://api.example.test/")
    }

    fn dispatcher(transport: Arc<RecordingTransport>) -> Dispatcher {
        Dispatcher::with_transport(&test_config(), transport).unwrap()
    }

    fn body(value: Value) -> crate::params::Params {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_success_body_returned_unchanged() {
        let transport = RecordingTransport::responding(200, r#"{"id": "cc_1", "status": "CAPTURED"}"#);
        let dispatcher = dispatcher(transport.clone());

        let result = dispatcher
            .dispatch(
                RequestDescriptor::new(Method::POST, "/credit_card_charges/cc_1/capture")
                    .body(body(json!({"amount": 100}))),
            )
            .await
            .unwrap();

        assert_eq!(result, json!({"id": "cc_1", "status": "CAPTURED"}));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_url_joins_base_without_double_slash() {
        let transport = RecordingTransport::responding(200, "{}");
        let dispatcher = dispatcher(transport.clone());

        dispatcher
            .dispatch(RequestDescriptor::new(Method::POST, "/credit_card_charges"))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://api.example.test/credit_card_charges");
        assert_eq!(requests[0].method, Method::POST);
    }

    #[tokio::test]
    async fn test_default_headers_sent() {
        let transport = RecordingTransport::responding(200, "{}");
        let dispatcher = dispatcher(transport.clone());

        dispatcher
            .dispatch(RequestDescriptor::new(Method::POST, "/credit_card_charges"))
            .await
            .unwrap();

        let headers = &transport.requests()[0].headers;
        // base64("xnd_development_abc:")
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap(),
            "Basic eG5kX2RldmVsb3BtZW50X2FiYzo="
        );
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers
            .get(USER_AGENT)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("xendit-rs/"));
    }

    #[tokio::test]
    async fn test_caller_headers_override_defaults() {
        let transport = RecordingTransport::responding(200, "{}");
        let dispatcher = dispatcher(transport.clone());

        let mut headers = HeaderMap::new();
        headers.insert("user-agent", HeaderValue::from_static("my-shop/2.0"));
        headers.insert("for-user-id", HeaderValue::from_static("sub_account_1"));

        dispatcher
            .dispatch(RequestDescriptor::new(Method::POST, "/credit_card_charges").headers(headers))
            .await
            .unwrap();

        let sent = &transport.requests()[0].headers;
        assert_eq!(sent.get_all(USER_AGENT).iter().count(), 1);
        assert_eq!(sent.get(USER_AGENT).unwrap(), "my-shop/2.0");
        assert_eq!(sent.get("for-user-id").unwrap(), "sub_account_1");
        assert!(sent.get(AUTHORIZATION).is_some());
    }

    #[tokio::test]
    async fn test_json_body_encoding() {
        let transport = RecordingTransport::responding(200, "{}");
        let dispatcher = dispatcher(transport.clone());

        dispatcher
            .dispatch(
                RequestDescriptor::new(Method::POST, "/credit_card_charges")
                    .body(body(json!({"amount": 100, "external_id": "ext-1"}))),
            )
            .await
            .unwrap();

        let sent: Value =
            serde_json::from_str(transport.requests()[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({"amount": 100, "external_id": "ext-1"}));
    }

    #[tokio::test]
    async fn test_form_body_encoding() {
        let transport = RecordingTransport::responding(200, "{}");
        let mut config = test_config();
        config.body_encoding = BodyEncoding::Form;
        let dispatcher = Dispatcher::with_transport(&config, transport.clone()).unwrap();

        dispatcher
            .dispatch(
                RequestDescriptor::new(Method::POST, "/credit_card_charges")
                    .body(body(json!({"amount": 100, "external_id": "ext 1"}))),
            )
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.body.as_deref(), Some("amount=100&external_id=ext+1"));
        assert_eq!(
            request.headers.get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
    }

    #[tokio::test]
    async fn test_get_has_no_body() {
        let transport = RecordingTransport::responding(200, r#"{"id": "cc_1"}"#);
        let dispatcher = dispatcher(transport.clone());

        dispatcher
            .dispatch(RequestDescriptor::new(Method::GET, "/credit_card_charges/cc_1"))
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert!(request.body.is_none());
        assert!(request.headers.get(CONTENT_TYPE).is_none());
        assert!(request.headers.get(AUTHORIZATION).is_some());
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let transport = RecordingTransport::responding(204, "");
        let dispatcher = dispatcher(transport);

        let result = dispatcher
            .dispatch(RequestDescriptor::new(Method::POST, "/credit_card_charges"))
            .await
            .unwrap();

        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_client_error_maps_to_api_failure() {
        let transport = RecordingTransport::responding(400, r#"{"error_code": "INVALID_AMOUNT"}"#);
        let dispatcher = dispatcher(transport);

        let err = dispatcher
            .dispatch(RequestDescriptor::new(Method::POST, "/credit_card_charges"))
            .await
            .unwrap_err();

        match err {
            XenditError::Api(failure) => {
                assert_eq!(failure.category, FailureCategory::ClientError);
                assert_eq!(failure.status, Some(400));
                assert_eq!(failure.error_code.as_deref(), Some("INVALID_AMOUNT"));
                assert!(failure.message.contains("INVALID_AMOUNT"));
            }
            other => panic!("expected API failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_server_error_maps_to_server_category() {
        let transport = RecordingTransport::responding(
            503,
            r#"{"error_code": "SERVER_ERROR", "message": "try later"}"#,
        );
        let dispatcher = dispatcher(transport);

        let err = dispatcher
            .dispatch(RequestDescriptor::new(Method::POST, "/credit_card_charges"))
            .await
            .unwrap_err();

        assert_eq!(err.category(), Some(FailureCategory::ServerError));
        assert!(err.to_string().contains("try later"));
    }

    #[tokio::test]
    async fn test_invalid_success_json_is_decode_error() {
        let transport = RecordingTransport::responding(200, "<html>oops</html>");
        let dispatcher = dispatcher(transport);

        let err = dispatcher
            .dispatch(RequestDescriptor::new(Method::POST, "/credit_card_charges"))
            .await
            .unwrap_err();

        assert_eq!(err.category(), Some(FailureCategory::DecodeError));
    }

    #[tokio::test]
    async fn test_transport_failure_passes_through() {
        let transport = RecordingTransport::failing(ApiFailure::transport("connection refused"));
        let dispatcher = dispatcher(transport.clone());

        let err = dispatcher
            .dispatch(RequestDescriptor::new(Method::POST, "/credit_card_charges"))
            .await
            .unwrap_err();

        assert_eq!(err.category(), Some(FailureCategory::Transport));
        assert_eq!(transport.requests().len(), 1);
    }

    #[test]
    fn test_empty_secret_key_rejected() {
        let transport = RecordingTransport::responding(200, "{}");
        let config = ApiConfig::with_secret_key("");

        let err = Dispatcher::with_transport(&config, transport).unwrap_err();

        assert!(matches!(err, XenditError::Config(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let dispatcher = dispatcher(RecordingTransport::responding(200, "{}"));
        assert_eq!(dispatcher.base_url(), "https://api.example.test");
    }
}
