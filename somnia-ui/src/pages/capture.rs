//! Capture Page
//!
//! Form for writing down a dream fragment and attaching a symbol.

use leptos::*;
use somnia::{format_date_key, SYMBOL_PALETTE};

use crate::components::SymbolPicker;
use crate::state::global::GlobalState;
use crate::store;

/// Capture page component
#[component]
pub fn Capture() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (draft, set_draft) = create_signal(String::new());
    let (symbol, set_symbol) = create_signal(SYMBOL_PALETTE[0].to_string());

    // Resynchronize the cached journal: once on mount, then on every
    // external change trigger until the page unmounts.
    state.reload();
    let sync_state = state.clone();
    let watch = store::watch(move || sync_state.reload());
    on_cleanup(move || drop(watch));

    let submit_state = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // Whitespace-only drafts are rejected silently.
        if submit_state.capture(&draft.get(), &symbol.get()) {
            set_draft.set(String::new());
            submit_state.show_notice("Dream saved");
        }
    };

    let today = chrono::Local::now().format("%A, %B %-d").to_string();

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"What did you dream?"</h1>
                <p class="text-slate-400 mt-1">{today}</p>
            </div>

            <form on:submit=on_submit class="space-y-4">
                <textarea
                    placeholder="A fragment is enough..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    class="w-full h-32 bg-slate-800 rounded-lg px-4 py-3 text-white resize-none
                           border border-slate-700 focus:border-indigo-500 focus:outline-none"
                />

                // Symbol selector
                <SymbolPicker symbol=symbol set_symbol=set_symbol />

                // Submit button
                <button
                    type="submit"
                    class="w-full bg-indigo-600 hover:bg-indigo-700 rounded-lg py-3 font-semibold
                           transition-colors"
                >
                    "Save dream"
                </button>
            </form>

            <RecentEntries />
        </div>
    }
}

/// Newest few entries, read from the cached journal copy
#[component]
fn RecentEntries() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-slate-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent dreams"</h2>

            <div class="space-y-2">
                {move || {
                    let recent: Vec<_> = state.journal.get()
                        .entries()
                        .iter()
                        .take(5)
                        .cloned()
                        .collect();

                    if recent.is_empty() {
                        view! {
                            <p class="text-slate-400 text-sm">"Nothing captured yet"</p>
                        }.into_view()
                    } else {
                        recent.into_iter().map(|entry| {
                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-slate-700 last:border-0">
                                    <div class="flex items-center space-x-3">
                                        <span class="text-2xl">{entry.symbol}</span>
                                        <span class="text-sm">{entry.text}</span>
                                    </div>
                                    <span class="text-slate-400 text-sm shrink-0 ml-3">
                                        {format_date_key(&entry.date)}
                                    </span>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </div>
        </section>
    }
}
