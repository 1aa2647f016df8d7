//! Page state and the pure logic behind it.
//!
//! DESIGN
//! ======
//! Each module takes plain data and returns plain data. Components read DOM
//! measurements and field text, call in here, and apply the result.

pub mod contact;
pub mod nav;
pub mod reveal;
pub mod scroll;
pub mod theme;
