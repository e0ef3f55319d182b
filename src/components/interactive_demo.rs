use leptos::prelude::*;

use crate::analysis::{self, AnalysisResult, Mode};
use crate::demo::DemoState;

/// The demo panel: inputs on the left, analysis output on the right.
///
/// All panel state lives in one [`DemoState`] signal; event handlers are thin
/// wrappers over its transitions. The analyze call is the only suspension
/// point: it resumes on the browser event loop and applies exactly one
/// `settle` when the request finishes, however it finishes.
#[component]
pub fn InteractiveDemo() -> impl IntoView {
    let state = RwSignal::new(DemoState::default());

    // Keyed on (revision, result) so the entry animation replays once per
    // settlement and never on unrelated edits.
    let settled = Memo::new(move |_| {
        state.with(|s| s.result.clone().map(|result| (s.result_revision, result)))
    });

    let analyze = move |_| {
        let Some(request) = state.try_update(|s| s.begin_analysis()).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = analysis::analyze(&request).await;
            state.update(|s| s.settle(result));
        });
    };

    view! {
        <section id="demo" class="border-b border-slate-900">
            <div class="mx-auto max-w-6xl px-6 py-24">
                <div class="mb-12">
                    <h2 class="text-3xl font-bold text-white">"Interactive Demo"</h2>
                    <p class="mt-2 text-slate-400">
                        "Submit a problem and your reasoning to receive structured analysis."
                    </p>
                </div>

                <div class="grid gap-8 lg:grid-cols-2">
                    // Input Panel
                    <div class="space-y-5">
                        <div>
                            <label class="mb-1.5 block text-sm font-medium text-slate-200">
                                "Problem statement"
                            </label>
                            <textarea
                                prop:value=move || state.with(|s| s.problem.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.problem = event_target_value(&ev))
                                }
                                placeholder="Describe the problem..."
                                rows="3"
                                class="w-full resize-none rounded-lg border border-slate-800 bg-slate-950 px-4 py-3 text-sm text-slate-200 placeholder:text-slate-500 transition-colors focus:outline-none focus:ring-2 focus:ring-blue-500/25 focus:border-blue-500"
                            ></textarea>
                        </div>

                        <div>
                            <label class="mb-1.5 block text-sm font-medium text-slate-200">
                                "Your reasoning"
                            </label>
                            <textarea
                                prop:value=move || state.with(|s| s.reasoning.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.reasoning = event_target_value(&ev))
                                }
                                placeholder="Explain your thought process..."
                                rows="4"
                                class="w-full resize-none rounded-lg border border-slate-800 bg-slate-950 px-4 py-3 text-sm text-slate-200 placeholder:text-slate-500 transition-colors focus:outline-none focus:ring-2 focus:ring-blue-500/25 focus:border-blue-500"
                            ></textarea>
                        </div>

                        <div>
                            <label class="mb-1.5 block text-sm font-medium text-slate-200">
                                "Mode"
                            </label>
                            <div class="inline-flex rounded-lg border border-slate-800 bg-slate-900 p-1">
                                {Mode::ALL.into_iter().map(|option| {
                                    view! {
                                        <button
                                            on:click=move |_| state.update(|s| s.mode = option)
                                            class=move || {
                                                if state.with(|s| s.mode == option) {
                                                    "relative rounded-md px-4 py-1.5 text-sm font-medium transition-all bg-slate-950 text-white shadow-sm"
                                                } else {
                                                    "relative rounded-md px-4 py-1.5 text-sm font-medium transition-all text-slate-400 hover:text-white"
                                                }
                                            }
                                        >
                                            {option.label()}
                                        </button>
                                    }
                                }).collect_view()}
                            </div>
                        </div>

                        <button
                            on:click=analyze
                            prop:disabled=move || state.with(|s| !s.can_submit())
                            class="rounded-lg bg-blue-600 px-6 py-2.5 text-sm font-semibold text-white shadow-sm transition-all hover:bg-blue-500 disabled:opacity-40 disabled:cursor-not-allowed"
                        >
                            {move || {
                                if state.with(|s| s.is_analyzing) {
                                    "Analyzing..."
                                } else {
                                    "Analyze Reasoning"
                                }
                            }}
                        </button>

                        <div class="flex flex-wrap gap-2 pt-2">
                            {Mode::ALL.into_iter().map(|option| {
                                view! {
                                    <button
                                        on:click=move |_| state.update(|s| s.load_preset(option))
                                        class="rounded-md border border-slate-800 bg-slate-950 px-3 py-1.5 text-xs font-medium text-slate-400 transition-all hover:text-white hover:border-slate-600"
                                    >
                                        {format!("{} Example", option.label())}
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    // Output Panel
                    <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-6 shadow-sm overflow-y-auto max-h-[600px]">
                        {move || {
                            match settled.get() {
                                Some((_, result)) => {
                                    view! { <AnalysisOutput result=result /> }.into_any()
                                }
                                None => {
                                    view! {
                                        <div class="flex h-full min-h-[300px] items-center justify-center">
                                            <p class="text-sm text-slate-500">
                                                "Analysis output will appear here."
                                            </p>
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AnalysisOutput(result: AnalysisResult) -> impl IntoView {
    let extra = result.additional_fields.unwrap_or_default();

    view! {
        <div class="space-y-6">
            <div class="animate-slide-up" style="animation-delay: 0ms">
                <AnalysisField label="Mistake Type" value=result.mistake_type mono=true />
            </div>
            <div class="opacity-0 animate-slide-up" style="animation-delay: 80ms">
                <AnalysisField label="Reasoning Pattern" value=result.reasoning_pattern />
            </div>
            <div class="opacity-0 animate-slide-up" style="animation-delay: 160ms">
                <AnalysisField label="Explanation" value=result.explanation />
            </div>
            {extra.into_iter().enumerate().map(|(index, (key, value))| {
                view! {
                    <div
                        class="opacity-0 animate-slide-up"
                        style=format!("animation-delay: {}ms", 240 + index * 80)
                    >
                        <AnalysisField label=key value=value.to_string() />
                    </div>
                }
            }).collect_view()}

            <div
                class="rounded-md bg-slate-800/60 px-4 py-2.5 text-xs text-slate-400 opacity-0 animate-fade-in"
                style="animation-delay: 400ms"
            >
                "No answers or calculations provided. Analysis focuses on reasoning structure only."
            </div>
        </div>
    }
}

#[component]
fn AnalysisField(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional)] mono: bool,
) -> impl IntoView {
    let value_class = if mono {
        "text-sm leading-relaxed font-mono bg-slate-950 rounded-md px-3 py-2.5 text-blue-300 font-medium"
    } else {
        "text-sm leading-relaxed text-slate-200"
    };

    view! {
        <div>
            <span class="mb-1.5 block text-[11px] font-semibold uppercase tracking-[0.12em] text-slate-500">
                {label}
            </span>
            <p class=value_class>{value}</p>
        </div>
    }
}
