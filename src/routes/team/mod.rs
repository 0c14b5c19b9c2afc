mod handler;
mod model;

pub use handler::{create_member, delete_member, list_members, update_member};
