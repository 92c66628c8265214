use leptos::*;

#[component]
pub fn Community() -> impl IntoView {
    view! {
        <div class="page page-community">
            <h1>"Community"</h1>
            <p>"Connect with other members, mentors and self-help groups."</p>
        </div>
    }
}
