pub mod api_client;
pub mod escape;
pub mod payload;
pub mod session;
pub mod view;
