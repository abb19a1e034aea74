//! Password evaluation sections
//!
//! Each section scores one aspect of the password.

mod length;
mod variety;

pub use length::length_section;
pub use variety::character_variety_section;

/// Points awarded by a section. Sections never fail.
pub type SectionResult = u8;
