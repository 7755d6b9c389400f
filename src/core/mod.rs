pub mod buy_now;
pub mod checkout;

pub use crate::domain::model::{Comic, Order, Route};
pub use crate::domain::ports::{ComicLookup, ConfigProvider, PageRouter};
pub use crate::utils::error::Result;
