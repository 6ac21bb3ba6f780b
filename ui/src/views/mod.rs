//! Shared views. Navigation is expressed through `EventHandler` callbacks
//! so the entry crate keeps ownership of its route table.

mod layout;
pub use layout::{AdminLayout, AdminSection, CustomerLayout};

mod login;
pub use login::LoginView;

pub mod admin;
pub mod customer;
