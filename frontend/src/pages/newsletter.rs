use leptos::*;

#[component]
pub fn Newsletter() -> impl IntoView {
    view! {
        <div class="page page-newsletter">
            <h1>"Newsletter"</h1>
            <p>"Stories, scheme updates and financial literacy in your inbox."</p>
        </div>
    }
}
