use leptos::*;
use leptos_router::*;
use shared::LoginRequest;

use crate::api::ApiClient;
use crate::session::SessionState;

#[component]
pub fn Login() -> impl IntoView {
    let session = expect_context::<SessionState>();
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(Option::<String>::None);
    let loading = create_rw_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let nav = navigate.clone();
        let session = session.clone();

        loading.set(true);
        error.set(None);

        let request = LoginRequest {
            email: email.get(),
            password: password.get(),
        };

        wasm_bindgen_futures::spawn_local(async move {
            match ApiClient::login(request).await {
                Ok(response) => {
                    session.set_auth(response);
                    nav("/", Default::default());
                }
                Err(e) => {
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-card card">
                <div class="auth-header">
                    <h1 class="auth-title">"Welcome Back"</h1>
                    <p class="auth-subtitle">"Sign in to your account"</p>
                </div>

                {move || error.get().map(|e| view! {
                    <div class="alert alert-error">{e}</div>
                })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label class="form-label" for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            class="form-input"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label class="form-label" for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            class="form-input"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-footer">
                    "No account yet? "
                    <A href="/register">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
