//! Entry routes and the role-gated layout shells.
//!
//! Both shells wait for session hydration before deciding anything;
//! redirecting while the store is still reading the token back would
//! bounce authenticated users to the login page on every refresh.

use dioxus::prelude::*;

use api::User;
use ui::components::{Loader, NotFoundNotice};
use ui::views::{AdminLayout, AdminSection, CustomerLayout, LoginView};
use ui::{complete_logout, use_session};

use crate::Route;

/// Landing route: forward to the role's home once the session is known.
#[component]
pub fn Root() -> Element {
    let session = use_session();
    let nav = use_navigator();

    let state = session();
    if !state.hydrated {
        return rsx! { Loader {} };
    }
    if !state.is_authenticated {
        nav.replace(Route::Login {});
    } else if state.is_admin() {
        nav.replace(Route::AdminDashboard {});
    } else {
        nav.replace(Route::MyDeclarations {});
    }
    rsx! {}
}

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    // Already signed in: skip the form.
    let state = session();
    if state.hydrated && state.is_authenticated {
        if state.is_admin() {
            nav.replace(Route::AdminDashboard {});
        } else {
            nav.replace(Route::MyDeclarations {});
        }
    }

    rsx! {
        LoginView {
            on_logged_in: move |user: User| {
                if user.role.is_admin() {
                    nav.replace(Route::AdminDashboard {});
                } else {
                    nav.replace(Route::MyDeclarations {});
                }
            },
        }
    }
}

#[component]
pub fn AdminShell() -> Element {
    let mut session = use_session();
    let nav = use_navigator();
    let route: Route = use_route();

    let state = session();
    if !state.hydrated {
        return rsx! { Loader {} };
    }
    if !state.is_authenticated || !state.is_admin() {
        nav.replace(Route::Login {});
        return rsx! {};
    }
    let user_name = state
        .user
        .as_ref()
        .map(|u| u.full_name.clone())
        .unwrap_or_default();

    let active = match route {
        Route::AdminDeclarations {} => AdminSection::Declarations,
        Route::AdminDashboard {} => AdminSection::Dashboard,
        _ => AdminSection::Customers,
    };

    rsx! {
        AdminLayout {
            user_name,
            active,
            on_navigate: move |section| {
                let target = match section {
                    AdminSection::Dashboard => Route::AdminDashboard {},
                    AdminSection::Customers => Route::AdminCustomers {},
                    AdminSection::Declarations => Route::AdminDeclarations {},
                };
                nav.push(target);
            },
            on_logout: move |_| {
                complete_logout(&mut session);
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn CustomerShell() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let state = session();
    if !state.hydrated {
        return rsx! { Loader {} };
    }
    if !state.is_authenticated || state.is_admin() {
        nav.replace(Route::Login {});
        return rsx! {};
    }
    let user_name = state
        .user
        .as_ref()
        .map(|u| u.full_name.clone())
        .unwrap_or_default();

    rsx! {
        CustomerLayout {
            user_name,
            on_home: move |_| {
                nav.push(Route::MyDeclarations {});
            },
            on_logout: move |_| {
                complete_logout(&mut session);
                nav.replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        div {
            class: "page",
            NotFoundNotice { message: "There is no page at {path}." }
        }
    }
}
