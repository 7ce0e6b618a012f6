//! Presentational units. Each renders one slice of the content document
//! into a shared `Markup` buffer; none of them hold state.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod icons;
pub mod layout;
pub mod navbar;
pub mod pages;
pub mod projects;
pub mod skills;
