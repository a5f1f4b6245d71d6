//! Learning paths and the coaching advice service.
//!
//! - `catalog`: The built-in curriculum, tagged by skill level
//! - `selector`: Level filtering and path start navigation
//! - `coach`: Advice requests with a fixed fallback

pub mod catalog;
pub mod selector;
pub mod coach;

pub use catalog::{Catalog, LearningPath, Lesson, SkillLevel};
pub use selector::{Navigation, PathSelector, PathVisibility};
pub use coach::{CoachClient, CoachConfig, CoachError, FALLBACK_ADVICE};
