mod handler;
mod model;

pub use handler::{read_linkinbio, read_team, write_linkinbio, write_team};
