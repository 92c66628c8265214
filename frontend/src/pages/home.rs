use leptos::*;
use leptos_router::*;

use crate::session::SessionState;

#[component]
pub fn Home() -> impl IntoView {
    let session = expect_context::<SessionState>();

    view! {
        <div class="page page-home">
            <section class="hero">
                <h1>"Sakhi"</h1>
                <p class="hero-tagline">
                    "Financial tools, learning and community support for women."
                </p>
                <Show
                    when=move || session.is_authenticated()
                    fallback=|| view! {
                        <div class="hero-actions">
                            <A href="/register" class="btn btn-primary">"Get Started"</A>
                            <A href="/login" class="btn btn-outline">"Sign In"</A>
                        </div>
                    }
                >
                    <div class="hero-actions">
                        <A href="/dashboard" class="btn btn-primary">"Go to Dashboard"</A>
                    </div>
                </Show>
            </section>
        </div>
    }
}
