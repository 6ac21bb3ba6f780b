//! Admin-role pages.

mod customer_detail;
mod customers;
mod dashboard;
mod declaration_detail;
mod declarations;
mod edit_customer;
mod line_items;
mod new_customer;
mod new_declaration;

pub use customer_detail::CustomerDetailView;
pub use customers::CustomersView;
pub use dashboard::DashboardView;
pub use declaration_detail::DeclarationDetailView;
pub use declarations::DeclarationsView;
pub use edit_customer::EditCustomerView;
pub use new_customer::NewCustomerView;
pub use new_declaration::NewDeclarationView;
