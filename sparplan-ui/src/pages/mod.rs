//! Pages
//!
//! Top-level view components, one per application route.

pub mod about;
pub mod home;
pub mod login;
pub mod register;

pub use about::AboutView;
pub use home::HomeView;
pub use login::LoginView;
pub use register::RegisterView;

use sparplan::AppRoute;

/// Set the document title for the view being shown
pub(crate) fn set_page_title(route: AppRoute) {
    leptos::document().set_title(route.title());
}
