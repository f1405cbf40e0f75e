//! Episode identity: title pattern extraction and age-based filtering.
//!
//! This module turns raw feed titles into canonical episode identities
//! (`"<base> - S<nn>E<nn>"`) and decides whether a dated episode is still
//! within a program's maximum age.

mod error;
mod filter;
mod parser;

pub use error::EpisodeError;
pub use filter::{parse_pub_date, within_max_age};
pub use parser::{ParsedEpisode, parse_title};
