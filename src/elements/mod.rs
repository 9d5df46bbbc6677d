//! Structural elements: joints and members

mod joint;
mod member;

pub use joint::{Joint, SupportCode};
pub use member::{Member, MemberGeometry};
