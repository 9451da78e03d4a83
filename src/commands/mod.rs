pub mod auth;
pub mod fields;
pub mod items;

pub use auth::handle_auth;
pub use fields::handle_fields;
pub use items::handle_items;
