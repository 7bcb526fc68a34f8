//! Reusable markup components.
//!
//! Each component renders to a `String` of HTML; the sections compose them.
//!
//! # Components
//!
//! - [`link_button`], [`button`]: call-to-action with variants and sizes
//! - [`card`], [`icon_well`]: card containers
//! - [`badge`]: section eyebrow label
//! - `icons`: inline SVG icons

mod badge;
mod button;
mod card;
mod icons;

pub use badge::{BadgeVariant, badge};
pub use button::{ButtonSize, ButtonVariant, button, link_button};
pub use card::{card, icon_well};
pub use icons::*;
