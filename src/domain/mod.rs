//! Domain types for the portfolio service.
//! Defines the content entities, their insert shapes, and validation rules.

pub mod award;
pub mod education;
pub mod error;
pub mod experience;
pub mod message;
pub mod profile;
pub mod publication;
pub mod skill;

pub use award::*;
pub use education::*;
pub use error::*;
pub use experience::*;
pub use message::*;
pub use profile::*;
pub use publication::*;
pub use skill::*;
