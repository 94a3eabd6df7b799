//! UI Components
//!
//! Reusable Leptos components.

mod delete_confirm_button;
mod edit_modal;
mod filter_bar;
mod new_todo_form;
mod stats_bar;
mod status_banners;
mod todo_item;
mod todo_list_view;

pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_modal::EditModal;
pub use filter_bar::FilterBar;
pub use new_todo_form::NewTodoForm;
pub use stats_bar::StatsBar;
pub use status_banners::StatusBanners;
pub use todo_item::TodoItem;
pub use todo_list_view::TodoListView;
