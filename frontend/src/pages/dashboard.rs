use leptos::*;

use crate::session::SessionState;

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = expect_context::<SessionState>();

    let greeting = move || {
        session
            .user
            .get()
            .map(|u| format!("Welcome back, {}", u.full_name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <div class="page page-dashboard">
            <h1>{greeting}</h1>
            <p>"Your savings, loans and community activity at a glance."</p>
        </div>
    }
}
