//! UI Components
//!
//! Reusable Leptos components.

mod confirm_dialog;
mod new_todo_form;
mod pager;
mod toast_area;
mod todo_card;
mod todo_list;

pub use confirm_dialog::ConfirmDialog;
pub use new_todo_form::NewTodoForm;
pub use pager::Pager;
pub use toast_area::ToastArea;
pub use todo_card::TodoCard;
pub use todo_list::TodoList;
