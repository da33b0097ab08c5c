//! UI Components
//!
//! Leptos components for the shell and the phonebook page.

mod title_bar;
mod nav_drawer;
mod placeholder_page;
mod phonebook_page;
mod contact_grid;
mod contact_row;
mod contact_dialog;
mod delete_confirm_dialog;

pub use title_bar::TitleBar;
pub use nav_drawer::NavDrawer;
pub use placeholder_page::PlaceholderPage;
pub use phonebook_page::PhonebookPage;
pub use contact_grid::{column_for, ContactGrid};
pub use contact_row::ContactRow;
pub use contact_dialog::ContactDialog;
pub use delete_confirm_dialog::DeleteConfirmDialog;
