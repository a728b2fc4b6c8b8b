//! Day Detail Modal
//!
//! Lists every entry for the selected date with confirmed deletion. At most
//! one date's modal is open at a time; deleting the last entry for the open
//! date closes it automatically.

use leptos::*;
use somnia::format_date_key;

use crate::state::global::GlobalState;

/// Modal showing all entries for the selected date key
#[component]
pub fn EntryModal(selected: RwSignal<Option<String>>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            let state = state.clone();
            selected.get().map(|date| view! {
                <div
                    class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center"
                    on:click=move |_| selected.set(None)
                >
                    <div
                        class="bg-slate-800 rounded-xl p-6 w-full max-w-md mx-4 shadow-xl"
                        on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                    >
                        <div class="flex items-center justify-between mb-4">
                            <h2 class="text-xl font-semibold">{format_date_key(&date)}</h2>
                            <button
                                on:click=move |_| selected.set(None)
                                class="text-slate-400 hover:text-white text-xl leading-none"
                            >
                                "×"
                            </button>
                        </div>

                        <ul class="space-y-3 max-h-96 overflow-y-auto">
                            {
                                let entries = state.journal.get().bucket(&date);
                                entries.into_iter().map(|entry| {
                                    let id = entry.id.clone();
                                    let date = date.clone();
                                    let state = state.clone();
                                    view! {
                                        <li class="flex items-start justify-between bg-slate-700 rounded-lg px-4 py-3">
                                            <div class="flex items-start space-x-3">
                                                <span class="text-2xl">{entry.symbol}</span>
                                                <p class="text-sm whitespace-pre-wrap">{entry.text}</p>
                                            </div>
                                            <button
                                                on:click=move |_| {
                                                    let confirmed = web_sys::window()
                                                        .map(|w| {
                                                            w.confirm_with_message("Delete this dream?")
                                                                .unwrap_or(false)
                                                        })
                                                        .unwrap_or(false);
                                                    if !confirmed {
                                                        return;
                                                    }

                                                    state.delete(&id);

                                                    // Last entry for this date gone: close the modal.
                                                    if state.journal.get_untracked().bucket(&date).is_empty() {
                                                        selected.set(None);
                                                    }
                                                }
                                                class="text-slate-400 hover:text-red-400 text-sm ml-3 shrink-0"
                                            >
                                                "Delete"
                                            </button>
                                        </li>
                                    }
                                }).collect_view()
                            }
                        </ul>
                    </div>
                </div>
            })
        }}
    }
}
