//! Customer-role pages: a read-only window onto the customer's own
//! declarations.

mod declaration;
mod home;

pub use declaration::MyDeclarationView;
pub use home::MyDeclarationsView;
