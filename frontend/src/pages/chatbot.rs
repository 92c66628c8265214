use leptos::*;

#[component]
pub fn Chatbot() -> impl IntoView {
    view! {
        <div class="page page-chatbot">
            <h1>"Assistant"</h1>
            <p>"Ask questions about savings, loans and government schemes."</p>
        </div>
    }
}
