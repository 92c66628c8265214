use leptos::*;
use leptos_router::*;

use crate::components::navbar::Navbar;
use crate::pages::{
    chatbot::Chatbot, community::Community, dashboard::Dashboard, home::Home, login::Login,
    microfinance::Microfinance, newsletter::Newsletter, register::Register,
};
use crate::session::SessionState;
use crate::translate;

#[component]
pub fn App() -> impl IntoView {
    let session = SessionState::new();
    provide_context(session);

    // One-time widget bootstrap; later mounts of any component are no-ops.
    translate::ensure_translate_widget();

    view! {
        <Router>
            <Navbar />
            <main>
                <Routes>
                    <Route path="/" view=Home />
                    <Route path="/login" view=Login />
                    <Route path="/register" view=Register />
                    <Route path="" view=MemberArea>
                        <Route path="/chatbot" view=Chatbot />
                        <Route path="/dashboard" view=Dashboard />
                        <Route path="/microfinance" view=Microfinance />
                        <Route path="/newsletter" view=Newsletter />
                        <Route path="/community" view=Community />
                    </Route>
                </Routes>
            </main>
        </Router>
    }
}

/// Layout for routes that require a session; guests are sent to the login
/// page instead.
#[component]
fn MemberArea() -> impl IntoView {
    let session = expect_context::<SessionState>();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <RedirectToLogin /> }
        >
            <div class="container">
                <Outlet />
            </div>
        </Show>
    }
}

#[component]
fn RedirectToLogin() -> impl IntoView {
    let navigate = use_navigate();
    navigate("/login", Default::default());
    view! {}
}
