pub mod admin;
pub mod auth;
pub mod linkinbio;
pub mod subscribe;
pub mod team;
