//! Role-specific application shells: sidebar, header, content slot.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AdminSection {
    Dashboard,
    Customers,
    Declarations,
}

#[component]
pub fn AdminLayout(
    user_name: String,
    active: AdminSection,
    on_navigate: EventHandler<AdminSection>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "shell",
            aside {
                class: "sidebar",
                div { class: "sidebar-brand", "ExoTrack" }
                nav {
                    class: "sidebar-nav",
                    NavItem {
                        label: "Dashboard",
                        selected: active == AdminSection::Dashboard,
                        onclick: move |_| on_navigate.call(AdminSection::Dashboard),
                    }
                    NavItem {
                        label: "Customers",
                        selected: active == AdminSection::Customers,
                        onclick: move |_| on_navigate.call(AdminSection::Customers),
                    }
                    NavItem {
                        label: "Declarations",
                        selected: active == AdminSection::Declarations,
                        onclick: move |_| on_navigate.call(AdminSection::Declarations),
                    }
                }
                SidebarFooter { user_name, role_label: "Accountant", on_logout }
            }
            main { class: "main", {children} }
        }
    }
}

#[component]
pub fn CustomerLayout(
    user_name: String,
    on_home: EventHandler<()>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "shell",
            aside {
                class: "sidebar",
                div { class: "sidebar-brand", "ExoTrack" }
                nav {
                    class: "sidebar-nav",
                    NavItem {
                        label: "My declarations",
                        selected: true,
                        onclick: move |_| on_home.call(()),
                    }
                }
                SidebarFooter { user_name, role_label: "Customer", on_logout }
            }
            main { class: "main", {children} }
        }
    }
}

#[component]
fn NavItem(label: String, selected: bool, onclick: EventHandler<MouseEvent>) -> Element {
    rsx! {
        button {
            class: if selected { "nav-item nav-item-active" } else { "nav-item" },
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

#[component]
fn SidebarFooter(user_name: String, role_label: String, on_logout: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "sidebar-footer",
            div {
                class: "sidebar-user",
                span { class: "sidebar-user-name", "{user_name}" }
                span { class: "sidebar-user-role", "{role_label}" }
            }
            button {
                class: "btn btn-ghost",
                onclick: move |_| on_logout.call(()),
                "Sign out"
            }
        }
    }
}
