use crate::domain::model::{CardClass, Order};
use axum::http::{Method, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Incorrect delivery address")]
    IncorrectAddress,
    #[error("Card without available funds")]
    CardWithoutFunds,
    #[error("Card without authorization, contact your bank and try again")]
    CardWithoutAuthorization,
    #[error("Incorrect card data")]
    CardDataIncorrect,
    #[error("Server error, please try again")]
    Server,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl CheckoutError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::IncorrectAddress
            | Self::CardWithoutFunds
            | Self::CardWithoutAuthorization
            | Self::CardDataIncorrect => StatusCode::BAD_REQUEST,
            Self::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed => "ERROR_METHOD_NOT_ALLOWED",
            Self::IncorrectAddress => "ERROR_INCORRECT_ADDRESS",
            Self::CardWithoutFunds => "ERROR_CARD_WITHOUT_FUNDS",
            Self::CardWithoutAuthorization => "ERROR_CARD_WITHOUT_AUTHORIZATION",
            Self::CardDataIncorrect => "ERROR_CARD_DATA_INCORRECT",
            Self::Server => "ERROR_SERVER",
        }
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.code(),
            message: self.to_string(),
        }
    }
}

/// Status and JSON body produced for one checkout request.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl CheckoutResponse {
    fn accepted(order: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: json!({ "data": order }),
        }
    }

    fn rejected(error: CheckoutError) -> Self {
        Self {
            status: error.status(),
            // an ErrorBody of two strings always serializes
            body: serde_json::to_value(error.body()).unwrap_or_default(),
        }
    }
}

impl From<std::result::Result<Value, CheckoutError>> for CheckoutResponse {
    fn from(outcome: std::result::Result<Value, CheckoutError>) -> Self {
        match outcome {
            Ok(order) => Self::accepted(order),
            Err(error) => Self::rejected(error),
        }
    }
}

/// Decides the outcome of a checkout submission.
///
/// Checks run in a fixed order: request method, then each required field as
/// it is needed (address before the address check, card number before the
/// card checks). The first failing check wins. On success the submitted JSON
/// is echoed back untouched under `data`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckoutRequestValidator;

impl CheckoutRequestValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, method: &Method, body: &[u8]) -> CheckoutResponse {
        if *method != Method::POST {
            return CheckoutResponse::rejected(CheckoutError::MethodNotAllowed);
        }

        match serde_json::from_slice::<Value>(body) {
            Ok(value) => self.validate_value(method, value),
            Err(e) => {
                tracing::warn!("Checkout body is not valid JSON: {}", e);
                CheckoutResponse::rejected(CheckoutError::Server)
            }
        }
    }

    pub fn validate_value(&self, method: &Method, body: Value) -> CheckoutResponse {
        if *method != Method::POST {
            return CheckoutResponse::rejected(CheckoutError::MethodNotAllowed);
        }

        let outcome = self.check_order(&body).map(|()| body);
        if let Err(error) = &outcome {
            tracing::info!(code = error.code(), "Checkout rejected");
        } else {
            tracing::info!("Checkout accepted");
        }
        outcome.into()
    }

    fn check_order(&self, body: &Value) -> std::result::Result<(), CheckoutError> {
        if !body.is_object() {
            return Err(CheckoutError::Server);
        }

        let order: Order = serde_json::from_value(body.clone()).map_err(|e| {
            tracing::warn!("Checkout body does not match the order shape: {}", e);
            CheckoutError::Server
        })?;

        let address = order.address().ok_or(CheckoutError::Server)?;
        if !address.is_deliverable() {
            return Err(CheckoutError::IncorrectAddress);
        }

        let number = order.card_number().ok_or(CheckoutError::Server)?;
        match CardClass::classify(number) {
            CardClass::Valid => Ok(()),
            CardClass::WithoutFunds => Err(CheckoutError::CardWithoutFunds),
            CardClass::WithoutAuthorization => Err(CheckoutError::CardWithoutAuthorization),
            CardClass::Malformed => Err(CheckoutError::CardDataIncorrect),
        }
    }
}
