//! UI Components for the luach-live client.

mod data_table;
mod gradient_button;
pub mod inspector;
mod item_form;
mod modal;
mod progress_card;
mod toast;

pub use data_table::DataTable;
pub use gradient_button::{GradientButton, GradientKind};
pub use inspector::ElementInspector;
pub use item_form::ItemForm;
pub use modal::Modal;
pub use progress_card::ProgressCard;
pub use toast::{Toast, ToastMessage};
