//! Route components: thin wrappers that hand navigation callbacks to the
//! shared views and hold the role-gated shells.

mod admin;
mod customer;
mod shell;

pub use admin::{
    AdminCustomerDetail, AdminCustomers, AdminDashboard, AdminDeclarationDetail,
    AdminDeclarations, AdminEditCustomer, AdminNewCustomer, AdminNewDeclaration,
};
pub use customer::{MyDeclarationDetail, MyDeclarations};
pub use shell::{AdminShell, CustomerShell, Login, NotFound, Root};
