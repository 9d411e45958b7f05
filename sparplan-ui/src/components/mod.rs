//! UI Components
//!
//! Reusable Leptos components for the calculator.

pub mod my_list;
pub mod nav;
pub mod savings_plan_form;
pub mod toast;

pub use my_list::MyList;
pub use nav::Nav;
pub use savings_plan_form::SavingsPlanForm;
pub use toast::Toast;
