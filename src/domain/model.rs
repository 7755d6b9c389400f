use serde::{Deserialize, Serialize};
use std::fmt;

/// Street value that the checkout endpoint always rejects.
pub const INVALID_ADDRESS: &str = "invalid";
/// Test card that always goes through.
pub const VALID_CARD: &str = "4242 4242 4242 4242";
pub const CARD_WITHOUT_FUNDS: &str = "4111 4111 4111 4111";
pub const CARD_WITHOUT_AUTHORIZATION: &str = "4000 4000 4000 4000";

/// Checkout payload as submitted by the storefront.
///
/// Every level is optional so that an incomplete submission still parses;
/// the checkout validator decides which gaps are fatal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        rename = "personalData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub personal_data: Option<PersonalData>,
    #[serde(
        rename = "paymentData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub payment_data: Option<PaymentData>,
}

impl Order {
    pub fn new(address: Address, card_number: impl Into<String>) -> Self {
        Self {
            personal_data: Some(PersonalData {
                address: Some(address),
                direccion: None,
            }),
            payment_data: Some(PaymentData {
                number: Some(card_number.into()),
            }),
        }
    }

    pub fn address(&self) -> Option<&Address> {
        self.personal_data.as_ref()?.address()
    }

    pub fn card_number(&self) -> Option<&str> {
        self.payment_data.as_ref()?.number.as_deref()
    }
}

/// Customer data. Older storefront builds send the address under the Spanish
/// key `direccion`; when both keys are present `address` wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direccion: Option<Address>,
}

impl PersonalData {
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref().or(self.direccion.as_ref())
    }
}

/// Delivery address; `calle` is the legacy key for `street`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calle: Option<String>,
}

impl Address {
    pub fn with_street(street: impl Into<String>) -> Self {
        Self {
            street: Some(street.into()),
            calle: None,
        }
    }

    pub fn street(&self) -> Option<&str> {
        self.street.as_deref().or(self.calle.as_deref())
    }

    pub fn is_deliverable(&self) -> bool {
        self.street() != Some(INVALID_ADDRESS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClass {
    Valid,
    WithoutFunds,
    WithoutAuthorization,
    Malformed,
}

impl CardClass {
    /// Grouping whitespace is ignored, so `4111411141114111` is the
    /// without-funds card just like `4111 4111 4111 4111`.
    pub fn classify(number: &str) -> Self {
        let digits = compact(number);

        if digits == compact(CARD_WITHOUT_FUNDS) {
            Self::WithoutFunds
        } else if digits == compact(CARD_WITHOUT_AUTHORIZATION) {
            Self::WithoutAuthorization
        } else if Self::is_well_formed(&digits) {
            Self::Valid
        } else {
            Self::Malformed
        }
    }

    fn is_well_formed(digits: &str) -> bool {
        digits.len() == 16 && digits.chars().all(|c| c.is_ascii_digit())
    }
}

fn compact(number: &str) -> String {
    number.chars().filter(|c| !c.is_whitespace()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comic {
    pub id: u64,
    pub stock: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl Comic {
    pub fn new(id: u64, stock: i64) -> Self {
        Self {
            id,
            stock,
            title: None,
            price: None,
        }
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Page the storefront navigates to after a buy-now activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Checkout { comic_id: u64 },
    ComicDetails { comic_id: u64 },
}

impl Route {
    pub fn path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkout { comic_id } => write!(f, "/checkout?comicId={}", comic_id),
            Self::ComicDetails { comic_id } => write!(f, "/comics/{}", comic_id),
        }
    }
}
