//! Card system: templates, catalog, flavors, and deployed units.
//!
//! ## Key Types
//!
//! - `CardTemplate`: Base stats of a card type
//! - `CardCatalog`: Template lookup by name
//! - `Flavor`: Deck-wide stat modifier
//! - `ModifiedCard`: Template after its deck's flavor
//! - `UnitInstance`: Runtime state of a deployed card

pub mod catalog;
pub mod definition;
pub mod flavor;
pub mod instance;

pub use catalog::CardCatalog;
pub use definition::{CardTemplate, ModifiedCard};
pub use flavor::Flavor;
pub use instance::UnitInstance;
