//! Mapping primitives for s2bridge.
//!
//! The building blocks every entity codec and builder is composed from:
//!
//! - **Presence** ([`probe`]): "was this optional field set?", distinct
//!   from "is it the default value?".
//! - **Validation** ([`validate`]): pure precondition checks shared by
//!   decoders and builders.
//! - **Variants** ([`OneOf`], [`variant`]): exactly-one-of resolution for
//!   mutually exclusive fields.
//! - **Collections** ([`Set`], [`Sequence`], [`collection`]): set vs.
//!   sequence rules for repeated fields.
//! - **Lookup** ([`Lookup`], [`StaticTable`]): injected identifier tables.
//! - **Errors** ([`MappingError`]).
//!
//! Nothing here knows about any particular entity.

pub mod collection;
mod error;
mod lookup;
mod presence;
pub mod validate;
pub mod variant;

pub use collection::{CollectionKind, Repeated, Sequence, Set};
pub use error::MappingError;
pub use lookup::{Identified, Lookup, StaticTable, resolve};
pub use presence::{probe, probe_required};
pub use validate::Optionality;
pub use variant::OneOf;
