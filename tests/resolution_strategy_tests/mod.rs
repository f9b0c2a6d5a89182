//! Resolution strategy tests
//!
//! ## Structure
//! - `test_utils` - Recording mock collaborators
//! - `display_name` - Name and title fallback chains
//! - `link` - Slug fallback, routing and media urls
//! - `caching` - Memoization and working-language handling


pub mod display_name;
pub mod link;
