//! setclique Core - Card and collection model for set finding
//!
//! This crate provides the value types shared by every setclique crate:
//! - [`Card`]: an immutable tuple of dimension values
//! - [`Collection`]: an ordered, validated, read-only sequence of unique cards
//! - [`DifferenceKey`]: the dimensions in which two cards differ
//! - [`CardSet`] and [`is_valid_set`]: the result type and the full Set rule

pub mod card;
pub mod collection;
pub mod error;
pub mod key;
pub mod set;

pub use card::Card;
pub use collection::Collection;
pub use error::{parse_set_size, Result, SetError};
pub use key::DifferenceKey;
pub use set::{is_valid_set, CardSet};
