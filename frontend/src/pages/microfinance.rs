use leptos::*;

#[component]
pub fn Microfinance() -> impl IntoView {
    view! {
        <div class="page page-microfinance">
            <h1>"Microfinance"</h1>
            <p>"Group savings, micro-loans and repayment tracking."</p>
        </div>
    }
}
