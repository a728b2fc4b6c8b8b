//! Calendar Page
//!
//! Month grid of captured dreams with a detail modal per day.

use leptos::*;
use somnia::{today_key, MonthCursor, MonthGrid, WEEKDAY_LABELS};

use crate::components::EntryModal;
use crate::state::global::GlobalState;
use crate::store;

/// Calendar page component
#[component]
pub fn Calendar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let cursor = create_rw_signal(MonthCursor::today());
    let selected = create_rw_signal(None::<String>);

    // Resynchronize the cached journal: once on mount, then on every
    // external change trigger until the page unmounts.
    state.reload();
    let sync_state = state.clone();
    let watch = store::watch(move || sync_state.reload());
    on_cleanup(move || drop(watch));

    // Per-date buckets, derived from the cached collection
    let buckets_state = state.clone();
    let buckets = create_memo(move |_| buckets_state.journal.get().buckets());

    let count_state = state.clone();

    view! {
        <div class="space-y-6">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dream calendar"</h1>
                    <p class="text-slate-400 mt-1">
                        {move || {
                            let count = count_state.journal.get().len();
                            if count == 1 {
                                "1 dream captured".to_string()
                            } else {
                                format!("{} dreams captured", count)
                            }
                        }}
                    </p>
                </div>
                <button
                    on:click=move |_| cursor.set(MonthCursor::today())
                    class="px-4 py-2 bg-slate-700 hover:bg-slate-600 rounded-lg text-sm
                           font-medium transition-colors"
                >
                    "Today"
                </button>
            </div>

            <section class="bg-slate-800 rounded-xl p-6">
                // Month header: ‹ March 2024 ›
                <div class="flex items-center justify-between mb-4">
                    <button
                        on:click=move |_| cursor.update(|c| *c = c.prev())
                        class="px-3 py-1 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors"
                    >
                        "‹"
                    </button>
                    <h2 class="text-xl font-semibold">{move || cursor.get().label()}</h2>
                    <button
                        on:click=move |_| cursor.update(|c| *c = c.next())
                        class="px-3 py-1 bg-slate-700 hover:bg-slate-600 rounded-lg transition-colors"
                    >
                        "›"
                    </button>
                </div>

                // Weekday labels
                <div class="grid grid-cols-7 gap-1 mb-1">
                    {WEEKDAY_LABELS.into_iter().map(|label| view! {
                        <div class="text-center text-xs text-slate-400 py-1">{label}</div>
                    }).collect_view()}
                </div>

                // Day grid: leading blanks, then one cell per day
                <div class="grid grid-cols-7 gap-1">
                    {move || {
                        let grid = MonthGrid::new(&cursor.get());
                        let buckets = buckets.get();
                        let today = today_key();

                        let mut cells = Vec::new();
                        for _ in 0..grid.leading_blanks {
                            cells.push(view! { <div class="h-16" /> }.into_view());
                        }
                        for day in 1..=grid.days {
                            let key = grid.day_key(day);
                            let bucket = buckets.get(&key).cloned().unwrap_or_default();
                            cells.push(view! {
                                <DayCell
                                    day=day
                                    date=key.clone()
                                    is_today=key == today
                                    newest_symbol=bucket.first().map(|entry| entry.symbol.clone())
                                    extra=bucket.len().saturating_sub(1)
                                    selected=selected
                                />
                            }.into_view());
                        }
                        cells.collect_view()
                    }}
                </div>
            </section>

            // Detail modal for the selected date
            <EntryModal selected=selected />
        </div>
    }
}

/// One day cell: day number, the newest entry's symbol, and a "+N" badge
/// when more than one entry exists for that day
#[component]
fn DayCell(
    day: u32,
    date: String,
    is_today: bool,
    newest_symbol: Option<String>,
    extra: usize,
    selected: RwSignal<Option<String>>,
) -> impl IntoView {
    let has_entries = newest_symbol.is_some();

    let cell_class = if has_entries {
        "h-16 rounded-lg flex flex-col items-center justify-center \
         bg-slate-700 hover:bg-slate-600 cursor-pointer transition-colors"
    } else {
        "h-16 rounded-lg flex flex-col items-center justify-center bg-slate-900/40"
    };

    let number_class = if is_today {
        "text-xs font-bold text-indigo-400"
    } else {
        "text-xs text-slate-400"
    };

    view! {
        <button
            disabled=!has_entries
            on:click=move |_| {
                if has_entries {
                    selected.set(Some(date.clone()));
                }
            }
            class=cell_class
        >
            <span class=number_class>{day}</span>
            <span class="text-xl">
                {newest_symbol.unwrap_or_else(|| "·".to_string())}
            </span>
            {(extra > 0).then(|| view! {
                <span class="text-xs text-indigo-400">{format!("+{}", extra)}</span>
            })}
        </button>
    }
}
