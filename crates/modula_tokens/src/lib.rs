#![doc = include_str!("../README.md")]

pub mod category;
pub mod code;
pub mod reserved;
pub mod token;

/// re-exports everything
pub mod prelude {
    pub use crate::category::Category;
    pub use crate::code::{CategoryCounters, ParseCodeError, TokenCode};
    pub use crate::reserved::{ReservedWordSet, ReservedWords};
    pub use crate::token::{TokenRecord, TokenStream};
}
