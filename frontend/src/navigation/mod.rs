pub mod hooks;
pub mod menu;
pub mod routes;
pub mod scroll;
