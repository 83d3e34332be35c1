//! Static page content and the project catalog.
//!
//! Everything the UI displays is defined here, decoupled from rendering and
//! input handling so it can be swapped or tested independently. The project
//! catalog is embedded JSON; the rest of the page content is built-in data.

pub mod catalog;
pub mod profile;

pub use catalog::{ProjectCatalog, ProjectDetails};
pub use profile::{PortfolioItem, SectionId, SiteContent, Skill};
