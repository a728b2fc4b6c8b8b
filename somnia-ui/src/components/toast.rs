//! Toast Notification Component
//!
//! Shows the transient save confirmation.

use leptos::*;

use crate::state::global::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-6 right-4 z-50">
            {move || {
                state.notice.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-emerald-600 text-white px-4 py-3
                                rounded-lg shadow-lg transform transition-all duration-300 ease-out">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
