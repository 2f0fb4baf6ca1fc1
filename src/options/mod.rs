//! Option system: attributes, definitions, and registry.
//!
//! ## Key Types
//!
//! - `OptionId`: Stable slug identifying an option
//! - `OptionDef`: Static option data with cost and generic attributes
//! - `OptionRegistry`: Ordered lookup of one game's options

pub mod attributes;
pub mod definition;
pub mod registry;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use definition::{OptionDef, OptionId};
pub use registry::OptionRegistry;
