//! Repository implementations for data access in the portfolio service.
//!
//! Provides database operations for the content tables and the
//! contact-message sink.

mod award;
mod education;
mod experience;
mod message;
mod profile;
mod publication;
mod skill;

pub use award::AwardRepository;
pub use education::EducationRepository;
pub use experience::ExperienceRepository;
pub use message::MessageRepository;
pub use profile::ProfileRepository;
pub use publication::PublicationRepository;
pub use skill::SkillRepository;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub(crate) type DbConn = Arc<Mutex<Connection>>;

#[cfg(test)]
mod tests;
