mod handler;
mod model;

pub use handler::subscribe;
