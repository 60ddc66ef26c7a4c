pub use activity::Activity;
pub use catalog::Catalog;
pub use server_message::{Reply, ServerMessage};

mod activity;
mod catalog;
mod server_message;
