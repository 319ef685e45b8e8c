// --- File: crates/xendit_cards/src/cards.rs ---
use std::sync::Arc;
use tracing::instrument;
use xendit_common::{
    validate, ApiConfig, Dispatcher, HeaderMap, ParamPolicy, Params, RequestDescriptor,
    ResponseBody, Transport, XenditConfig, XenditError,
};

use crate::operations::CardOperation;

/// Client for the credit card charge endpoints.
///
/// Every call validates the required parameters of its operation before
/// anything is sent, then performs exactly one request.
///
/// ```rust,no_run
/// # use xendit_cards::Cards;
/// # use xendit_common::{ApiConfig, HeaderMap, into_params, XenditError};
/// # async fn example() -> Result<(), XenditError> {
/// let cards = Cards::new(&ApiConfig::with_secret_key("xnd_development_..."))?;
/// let params = into_params(serde_json::json!({"amount": 10000}))?;
/// let charge = cards.capture("5e3c0b8f2c2b", params, HeaderMap::new()).await?;
/// println!("{}", charge["status"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Cards {
    dispatcher: Arc<Dispatcher>,
    policy: ParamPolicy,
}

impl Cards {
    /// Client talking to the configured API over `reqwest`.
    pub fn new(config: &ApiConfig) -> Result<Self, XenditError> {
        let dispatcher = Dispatcher::new(config)?;
        Ok(Self::with_dispatcher(Arc::new(dispatcher), config.param_policy))
    }

    pub fn from_config(config: &XenditConfig) -> Result<Self, XenditError> {
        Self::new(&config.api)
    }

    /// Client sending through a custom transport.
    pub fn with_transport(
        config: &ApiConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, XenditError> {
        let dispatcher = Dispatcher::with_transport(config, transport)?;
        Ok(Self::with_dispatcher(Arc::new(dispatcher), config.param_policy))
    }

    /// Client sharing a dispatcher with other resources.
    pub fn with_dispatcher(dispatcher: Arc<Dispatcher>, policy: ParamPolicy) -> Self {
        Self { dispatcher, policy }
    }

    /// Creates a charge. Requires `token_id`, `external_id` and `amount`.
    pub async fn create(
        &self,
        params: Params,
        headers: HeaderMap,
    ) -> Result<ResponseBody, XenditError> {
        self.execute(CardOperation::Create, None, params, headers)
            .await
    }

    /// Fetches a charge by id.
    pub async fn retrieve(&self, id: &str, headers: HeaderMap) -> Result<ResponseBody, XenditError> {
        self.execute(CardOperation::Retrieve, Some(id), Params::new(), headers)
            .await
    }

    /// Captures an authorized charge. Requires `amount`.
    pub async fn capture(
        &self,
        id: &str,
        params: Params,
        headers: HeaderMap,
    ) -> Result<ResponseBody, XenditError> {
        self.execute(CardOperation::Capture, Some(id), params, headers)
            .await
    }

    /// Reverses an authorization without settling it. Requires `external_id`.
    pub async fn reverse_authorization(
        &self,
        id: &str,
        params: Params,
        headers: HeaderMap,
    ) -> Result<ResponseBody, XenditError> {
        self.execute(CardOperation::ReverseAuthorization, Some(id), params, headers)
            .await
    }

    /// Refunds a captured charge. Requires `amount` and `external_id`.
    pub async fn create_refund(
        &self,
        id: &str,
        params: Params,
        headers: HeaderMap,
    ) -> Result<ResponseBody, XenditError> {
        self.execute(CardOperation::CreateRefund, Some(id), params, headers)
            .await
    }

    /// Runs `operation`: builds the path, validates, dispatches.
    ///
    /// Validation errors are returned before the dispatcher is touched.
    #[instrument(skip_all, fields(operation = operation.name(), charge_id = id))]
    pub async fn execute(
        &self,
        operation: CardOperation,
        id: Option<&str>,
        params: Params,
        headers: HeaderMap,
    ) -> Result<ResponseBody, XenditError> {
        let spec = operation.spec();
        let path = operation.path(id)?;
        validate(spec.name, &params, spec.required_keys, self.policy)?;

        let request = RequestDescriptor::new(spec.method, path)
            .body(params)
            .headers(headers);
        self.dispatcher.dispatch(request).await
    }
}
