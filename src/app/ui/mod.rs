pub mod edit_box;
pub mod help;
pub mod loading;
pub mod notice;
pub mod task_input;
pub mod todo_items;
pub mod utils;

pub use edit_box::EditBox;
pub use loading::Loading;
pub use notice::Notice;
pub use task_input::TaskInput;
pub use todo_items::TodoItems;
