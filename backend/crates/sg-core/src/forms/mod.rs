//! Presence checks the presentation layer runs before calling the session store.
//!
//! Blank means empty; whitespace-only input counts as filled in.

pub mod login_form;
pub mod registration_form;
