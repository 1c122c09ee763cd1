// pagination/mod.rs - Paginated Reply Renderer
// Shows a long, ordered list of pages as one message with button navigation.
//
// - page.rs:    Page type and grouping of entries into pages
// - session.rs: transport-free navigation state machine
// - menu.rs:    serenity driver that binds a session to one message

pub mod menu;
pub mod page;
pub mod session;

pub use menu::{run_menu, MenuOptions};
pub use page::{paginate, EmbedPage, Page};
