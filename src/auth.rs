//! Auth-domain identifiers, scope lists, prompt preferences, and token models.

pub mod account;
pub mod id;
pub mod prompt;
pub mod scope;
pub mod token;

pub use account::*;
pub use id::*;
pub use prompt::*;
pub use scope::*;
pub use token::{outcome::*, secret::*};
