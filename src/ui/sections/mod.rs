//! Page sections, top to bottom.
//!
//! Each section is a function of the [`RenderContext`](super::RenderContext).
//! Sections that animate on scroll expose their reveal configuration so the
//! same values can be asserted in tests and shipped in `data-reveal`.

mod about;
mod contact;
mod footer;
mod hero;
mod navbar;
mod services;
mod technology;

pub use about::{about, background_parallax as about_parallax, value_reveal};
pub use contact::{WizardView, contact, wizard};
pub use footer::footer;
pub use hero::{hero, hero_reveal, video_parallax as hero_parallax};
pub use navbar::navbar;
pub use services::{card_reveal, services};
pub use technology::{
    background_parallax as technology_parallax, component_reveal, feature_reveal, technology,
};
