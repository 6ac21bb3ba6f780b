//! Session context: restored once on startup, available to every view.

use api::services::auth::AuthService;
use api::{Session, User};
use dioxus::prelude::*;

use crate::make_client;

/// `localStorage` key for the cached user record.
const USER_CACHE_KEY: &str = "auth_user";

/// The session signal provided by [`SessionProvider`].
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Provider component that owns the session signal.
///
/// On mount it restores the session from durable storage; until that
/// finishes the signal's `hydrated` flag stays false and route guards
/// hold off on redirecting.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let mut session = use_signal(Session::default);

    let _restore = use_resource(move || async move {
        let client = make_client();
        let auth = AuthService::new(&client);
        let restored = api::session::initialize(load_cached_user(), &auth).await;
        if restored.is_authenticated {
            store_cached_user(restored.user.as_ref());
        } else {
            clear_cached_user();
        }
        session.set(restored);
    });

    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Record a successful login in the signal and in durable storage.
pub fn complete_login(session: &mut Signal<Session>, user: User, token: String) {
    store_cached_user(Some(&user));
    session.write().login(user, token);
}

/// Clear the session everywhere and fire the best-effort server logout.
pub fn complete_logout(session: &mut Signal<Session>) {
    clear_cached_user();
    session.write().logout();
    spawn(async move {
        let client = make_client();
        AuthService::new(&client).logout().await;
    });
}

#[cfg(target_arch = "wasm32")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn load_cached_user() -> Option<User> {
    #[cfg(target_arch = "wasm32")]
    {
        let raw = storage()?.get_item(USER_CACHE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn store_cached_user(user: Option<&User>) {
    #[cfg(target_arch = "wasm32")]
    if let (Some(storage), Some(user)) = (storage(), user) {
        if let Ok(raw) = serde_json::to_string(user) {
            let _ = storage.set_item(USER_CACHE_KEY, &raw);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = user;
    }
}

fn clear_cached_user() {
    #[cfg(target_arch = "wasm32")]
    if let Some(storage) = storage() {
        let _ = storage.remove_item(USER_CACHE_KEY);
    }
}
