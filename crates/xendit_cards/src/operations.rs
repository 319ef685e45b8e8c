// --- File: crates/xendit_cards/src/operations.rs ---
use std::fmt;
use std::str::FromStr;
use xendit_common::{Method, ValidationError};

macro_rules! charges_path {
    () => {
        "/credit_card_charges"
    };
    ($suffix:literal) => {
        concat!(charges_path!(), $suffix)
    };
}

/// Base path of the credit card charge resource.
pub const CHARGES_PATH: &str = charges_path!();

/// Placeholder replaced by the charge id in path templates.
const ID_PLACEHOLDER: &str = "{id}";

/// The credit card charge operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardOperation {
    Create,
    Retrieve,
    Capture,
    ReverseAuthorization,
    CreateRefund,
}

/// Declarative description of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationSpec {
    pub name: &'static str,
    pub method: Method,
    pub path_template: &'static str,
    pub required_keys: &'static [&'static str],
}

impl CardOperation {
    pub const ALL: [CardOperation; 5] = [
        CardOperation::Create,
        CardOperation::Retrieve,
        CardOperation::Capture,
        CardOperation::ReverseAuthorization,
        CardOperation::CreateRefund,
    ];

    pub fn spec(self) -> OperationSpec {
        match self {
            CardOperation::Create => OperationSpec {
                name: "create",
                method: Method::POST,
                path_template: CHARGES_PATH,
                required_keys: &["token_id", "external_id", "amount"],
            },
            CardOperation::Retrieve => OperationSpec {
                name: "retrieve",
                method: Method::GET,
                path_template: charges_path!("/{id}"),
                required_keys: &[],
            },
            CardOperation::Capture => OperationSpec {
                name: "capture",
                method: Method::POST,
                path_template: charges_path!("/{id}/capture"),
                required_keys: &["amount"],
            },
            CardOperation::ReverseAuthorization => OperationSpec {
                name: "reverseAuthorization",
                method: Method::POST,
                path_template: charges_path!("/{id}/auth_reversal"),
                required_keys: &["external_id"],
            },
            CardOperation::CreateRefund => OperationSpec {
                name: "createRefund",
                method: Method::POST,
                path_template: charges_path!("/{id}/refunds"),
                required_keys: &["amount", "external_id"],
            },
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn required_keys(self) -> &'static [&'static str] {
        self.spec().required_keys
    }

    /// Whether the path addresses an existing charge.
    pub fn needs_id(self) -> bool {
        self.spec().path_template.contains(ID_PLACEHOLDER)
    }

    /// Resource-relative path for this operation.
    ///
    /// The id is inserted verbatim. Operations on an existing charge fail
    /// validation, naming `id`, when it is absent or blank; `id` is ignored otherwise.
    pub fn path(self, id: Option<&str>) -> Result<String, ValidationError> {
        let template = self.spec().path_template;
        if !self.needs_id() {
            return Ok(template.to_string());
        }
        match id {
            Some(id) if !id.trim().is_empty() => Ok(template.replace(ID_PLACEHOLDER, id)),
            _ => Err(ValidationError {
                operation: self.name().to_string(),
                missing: vec!["id".to_string()],
            }),
        }
    }
}

impl fmt::Display for CardOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the operation names as well as their kebab-case forms.
impl FromStr for CardOperation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(CardOperation::Create),
            "retrieve" => Ok(CardOperation::Retrieve),
            "capture" => Ok(CardOperation::Capture),
            "reverseAuthorization" | "reverse-authorization" => {
                Ok(CardOperation::ReverseAuthorization)
            }
            "createRefund" | "create-refund" => Ok(CardOperation::CreateRefund),
            other => Err(format!("unknown card operation: {other}")),
        }
    }
}
