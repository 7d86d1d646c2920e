pub mod encryption;
pub mod errors;
pub mod format;
pub mod page;
pub mod table;

pub use errors::user_message;
pub use format::{format_date, format_money};
pub use page::Page;
pub use table::Table;
