use std::future::Future;

use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::session::SessionState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEntry {
    Home,
    Login,
    Signup,
    Chatbot,
    Dashboard,
    Microfinance,
    Newsletter,
    Community,
}

impl NavEntry {
    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Home => "Home",
            NavEntry::Login => "Login",
            NavEntry::Signup => "Signup",
            NavEntry::Chatbot => "Chatbot",
            NavEntry::Dashboard => "Dashboard",
            NavEntry::Microfinance => "Microfinance",
            NavEntry::Newsletter => "Newsletter",
            NavEntry::Community => "Community",
        }
    }

    /// Home maps to the root; Signup maps to the registration route rather
    /// than its lowercase label; everything else is `/` + lowercase(label).
    pub fn path(&self) -> &'static str {
        match self {
            NavEntry::Home => "/",
            NavEntry::Login => "/login",
            NavEntry::Signup => "/register",
            NavEntry::Chatbot => "/chatbot",
            NavEntry::Dashboard => "/dashboard",
            NavEntry::Microfinance => "/microfinance",
            NavEntry::Newsletter => "/newsletter",
            NavEntry::Community => "/community",
        }
    }
}

/// The two menu renditions, picked once per render from the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavSet {
    Guest,
    Authenticated,
}

impl NavSet {
    pub fn for_session(authenticated: bool) -> Self {
        if authenticated {
            NavSet::Authenticated
        } else {
            NavSet::Guest
        }
    }

    pub fn items(&self) -> &'static [NavEntry] {
        match self {
            NavSet::Guest => &[NavEntry::Home, NavEntry::Login, NavEntry::Signup],
            NavSet::Authenticated => &[
                NavEntry::Home,
                NavEntry::Chatbot,
                NavEntry::Dashboard,
                NavEntry::Microfinance,
                NavEntry::Newsletter,
                NavEntry::Community,
            ],
        }
    }
}

/// Per-instance visibility flags. The two panels are independent; both may
/// be open at the same time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MenuState {
    pub mobile_open: bool,
    pub translate_open: bool,
}

impl MenuState {
    pub fn toggle_mobile(&mut self) {
        self.mobile_open = !self.mobile_open;
    }

    pub fn toggle_translate(&mut self) {
        self.translate_open = !self.translate_open;
    }

    /// Selecting a navigation item dismisses the mobile menu.
    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }
}

/// Best-effort logout: a failed end-session request is logged and swallowed;
/// the local session is cleared and the user lands on the root route either
/// way. Never retried, not cancellable once issued.
pub async fn logout_with<F>(request: F, clear_session: impl FnOnce(), redirect: impl FnOnce(&str))
where
    F: Future<Output = Result<(), String>>,
{
    if let Err(err) = request.await {
        logging::error!("Logout failed: {}", err);
    }
    clear_session();
    redirect("/");
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let navigate = use_navigate();
    let menu = create_rw_signal(MenuState::default());

    let session_for_set = session.clone();
    let nav_set = move || NavSet::for_session(session_for_set.is_authenticated());

    let session_for_logout = session.clone();
    let on_logout = move |_| {
        let session = session_for_logout.clone();
        let nav = navigate.clone();

        wasm_bindgen_futures::spawn_local(async move {
            logout_with(
                ApiClient::logout(),
                move || session.clear(),
                move |path| nav(path, Default::default()),
            )
            .await;
        });
    };

    let session_for_show = session.clone();
    let session_for_chip = session.clone();
    let nav_set_mobile = nav_set.clone();

    view! {
        <nav class="navbar">
            <div class="container navbar-content">
                <button
                    class="navbar-mobile-toggle"
                    on:click=move |_| menu.update(|m| m.toggle_mobile())
                >
                    {move || if menu.get().mobile_open { "✕" } else { "☰" }}
                </button>

                <div class="navbar-links">
                    {move || nav_set().items().iter().map(|entry| {
                        view! {
                            <a href=entry.path() class="nav-link">
                                {entry.label()}
                            </a>
                        }
                    }).collect_view()}
                </div>

                <div class="navbar-actions">
                    <button
                        class="translate-toggle"
                        on:click=move |_| menu.update(|m| m.toggle_translate())
                    >
                        "Translate"
                    </button>
                    // The widget mounts into this node once; visibility is
                    // CSS-only so the mount point never leaves the DOM.
                    <div
                        id="google_translate_element"
                        class=move || if menu.get().translate_open {
                            "translate-panel"
                        } else {
                            "translate-panel hidden"
                        }
                    ></div>

                    <Show when=move || session_for_show.is_authenticated()>
                        <button class="btn btn-outline" on:click=on_logout.clone()>
                            "Logout"
                        </button>
                        {
                            let session = session_for_chip.clone();
                            view! {
                                <span class="profile-chip">
                                    {move || session.user.get().map(|u| u.full_name).unwrap_or_default()}
                                </span>
                            }
                        }
                    </Show>
                </div>
            </div>

            {move || menu.get().mobile_open.then(|| view! {
                <div class="navbar-mobile-menu">
                    {nav_set_mobile().items().iter().map(|entry| {
                        view! {
                            <a
                                href=entry.path()
                                class="nav-link mobile"
                                on:click=move |_| menu.update(|m| m.close_mobile())
                            >
                                {entry.label()}
                            </a>
                        }
                    }).collect_view()}
                </div>
            })}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::future::ready;

    #[test]
    fn test_guest_items_in_order() {
        let items = NavSet::for_session(false).items();
        let labels: Vec<_> = items.iter().map(|e| e.label()).collect();
        let paths: Vec<_> = items.iter().map(|e| e.path()).collect();
        assert_eq!(labels, ["Home", "Login", "Signup"]);
        assert_eq!(paths, ["/", "/login", "/register"]);
    }

    #[test]
    fn test_authenticated_items_in_order() {
        let items = NavSet::for_session(true).items();
        let labels: Vec<_> = items.iter().map(|e| e.label()).collect();
        let paths: Vec<_> = items.iter().map(|e| e.path()).collect();
        assert_eq!(
            labels,
            ["Home", "Chatbot", "Dashboard", "Microfinance", "Newsletter", "Community"]
        );
        assert_eq!(
            paths,
            ["/", "/chatbot", "/dashboard", "/microfinance", "/newsletter", "/community"]
        );
    }

    #[test]
    fn test_signup_path_is_register() {
        assert_eq!(NavEntry::Signup.path(), "/register");
        assert_eq!(NavEntry::Home.path(), "/");
    }

    #[test]
    fn test_toggle_mobile_is_involution() {
        let mut menu = MenuState::default();
        menu.toggle_mobile();
        assert!(menu.mobile_open);
        menu.toggle_mobile();
        assert!(!menu.mobile_open);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut menu = MenuState::default();
        menu.toggle_translate();
        assert!(menu.translate_open);
        assert!(!menu.mobile_open);

        menu.toggle_mobile();
        assert!(menu.mobile_open);
        assert!(menu.translate_open);

        // both panels stay open at once
        menu.close_mobile();
        assert!(!menu.mobile_open);
        assert!(menu.translate_open);
    }

    #[test]
    fn test_selecting_any_item_closes_mobile_menu() {
        for set in [NavSet::Guest, NavSet::Authenticated] {
            for _entry in set.items() {
                let mut menu = MenuState {
                    mobile_open: true,
                    translate_open: false,
                };
                menu.close_mobile();
                assert!(!menu.mobile_open);
            }
        }
    }

    #[test]
    fn test_logout_clears_and_redirects_on_success() {
        let cleared = Cell::new(false);
        let target = RefCell::new(String::new());

        futures::executor::block_on(logout_with(
            ready(Ok(())),
            || cleared.set(true),
            |path| *target.borrow_mut() = path.to_string(),
        ));

        assert!(cleared.get());
        assert_eq!(*target.borrow(), "/");
    }

    #[test]
    fn test_logout_clears_and_redirects_on_failure() {
        let cleared = Cell::new(false);
        let target = RefCell::new(String::new());

        futures::executor::block_on(logout_with(
            ready(Err("session already gone".to_string())),
            || cleared.set(true),
            |path| *target.borrow_mut() = path.to_string(),
        ));

        // identical end state to the success path
        assert!(cleared.get());
        assert_eq!(*target.borrow(), "/");
    }
}
