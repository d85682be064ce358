//! Collision detection and resolution.
//!
//! This module handles:
//! - **Detection**: Discrete overlap tests per shape pair, producing a
//!   contact point, normal and penetration depth
//! - **Resolution**: Positional correction split by inverse mass plus a
//!   restitution-based velocity response
//!
//! Detection is discrete: each test looks at the current positions only, so
//! a thin obstacle can be tunnelled through at extreme speed. At the
//! fixed-step cadences the demos run at, a falling sphere moves a small
//! fraction of any obstacle's thickness per step and the tests hold.

pub mod detection;
pub mod resolution;

pub use detection::contact;
pub use resolution::resolve;
