//! Restoration of written pinyin finals to their phonemic form.

pub mod check;
pub mod finals;
pub mod tones;

pub use finals::restore_final;
