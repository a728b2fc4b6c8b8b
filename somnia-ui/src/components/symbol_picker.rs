//! Symbol Picker Component
//!
//! Flat palette of glyph buttons; exactly one is selected at a time.

use leptos::*;
use somnia::SYMBOL_PALETTE;

/// Symbol palette for the capture form
#[component]
pub fn SymbolPicker(
    symbol: ReadSignal<String>,
    set_symbol: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-slate-400 mb-2">"Symbol"</label>
            <div class="flex flex-wrap gap-2">
                {SYMBOL_PALETTE.into_iter().map(|glyph| {
                    view! {
                        <button
                            type="button"
                            on:click=move |_| set_symbol.set(glyph.to_string())
                            class=move || {
                                let base = "w-10 h-10 rounded-lg text-xl transition-colors";
                                if symbol.get() == glyph {
                                    format!("{} bg-indigo-600", base)
                                } else {
                                    format!("{} bg-slate-700 hover:bg-slate-600", base)
                                }
                            }
                        >
                            {glyph}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
