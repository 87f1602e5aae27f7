//! Sweep pipeline: text-file classification, per-line trimming, and the
//! directory walk driving both.

pub mod classify;
pub mod trim;
pub mod walker;
