use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::icons::{ArrowRight, Check, ChevronRight};
use crate::components::interactive_demo::InteractiveDemo;
use crate::data::{differentiators, mode_cards, pipeline_steps};

#[component]
pub fn Home() -> impl IntoView {
    let steps = pipeline_steps();
    let last_step = steps.len() - 1;
    let cards = mode_cards();
    let points = differentiators();

    view! {
        <div class="pt-16 pb-24">
            // Hero Section
            <section class="pt-20 px-6 text-center relative overflow-hidden border-b border-slate-900">
                <div class="absolute top-0 left-1/2 -translate-x-1/2 w-[800px] h-[500px] bg-blue-600/10 blur-[120px] rounded-full pointer-events-none"></div>

                <div class="relative z-10 flex flex-col items-center pb-24">
                    <h1 class="text-5xl md:text-6xl font-black text-white tracking-tight mb-6 leading-[1.08]">
                        "AI That Explains Why"
                        <br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-blue-400 to-purple-400">
                            "Reasoning Fails"
                        </span>
                    </h1>

                    <p class="text-xl text-slate-400 max-w-lg mx-auto mb-10 font-light leading-relaxed">
                        "Analyze thinking mistakes without revealing answers."
                        <br />
                        "Built for education, interviews, and research."
                    </p>

                    <div class="flex flex-wrap justify-center gap-4 mb-20">
                        <a
                            href="#demo"
                            class="px-8 py-3 bg-white text-black font-bold rounded-full hover:bg-slate-200 transition-colors flex items-center"
                        >
                            "Try the Demo"
                            <ArrowRight class="w-4 h-4 ml-2" />
                        </a>
                        <a
                            href="#modes"
                            class="px-8 py-3 bg-slate-800 text-white font-bold rounded-full border border-slate-700 hover:bg-slate-700 transition-colors flex items-center"
                        >
                            "View Modes"
                        </a>
                    </div>

                    <div class="flex flex-wrap items-center justify-center gap-2 sm:gap-3">
                        {steps.into_iter().enumerate().map(|(index, step)| {
                            view! {
                                <div class="flex items-center gap-2 sm:gap-3">
                                    <span class="rounded-md border border-slate-800 bg-slate-900 px-3 py-2 text-sm font-medium text-slate-200 sm:px-4">
                                        {step}
                                    </span>
                                    {(index < last_step).then(|| view! {
                                        <ChevronRight class="w-4 h-4 text-slate-500" />
                                    })}
                                </div>
                            }
                        }).collect_view()}
                    </div>
                    <p class="mt-3 text-[11px] font-medium uppercase tracking-[0.15em] text-slate-500">
                        "No answers shown"
                    </p>
                </div>
            </section>

            // Interactive Demo
            <InteractiveDemo />

            // Modes Overview
            <section id="modes" class="border-b border-slate-900">
                <div class="mx-auto max-w-4xl px-6 py-24">
                    <h2 class="text-3xl font-bold text-white">"Modes"</h2>
                    <p class="mt-2 text-slate-400">
                        "Three specialized analysis configurations."
                    </p>

                    <div class="mt-12 grid gap-6 sm:grid-cols-3">
                        {cards.into_iter().map(|card| {
                            view! {
                                <div class="rounded-xl border border-slate-800 bg-slate-900/50 p-6 hover:border-slate-700 transition-colors">
                                    <div class="mb-4 bg-slate-800 w-10 h-10 rounded-lg flex items-center justify-center">
                                        {(card.icon)()}
                                    </div>
                                    <h3 class="text-base font-bold text-white mb-2">
                                        {format!("{} Mode", card.mode.label())}
                                    </h3>
                                    <div class="mb-3">
                                        <Badge color=card.focus_color>{card.focus}</Badge>
                                    </div>
                                    <p class="text-sm text-slate-400 leading-relaxed">{card.desc}</p>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </div>
            </section>

            // Why This Is Different
            <section>
                <div class="mx-auto max-w-4xl px-6 py-24">
                    <h2 class="text-3xl font-bold text-white">"Why This Is Different"</h2>
                    <ul class="mt-8 space-y-4">
                        {points.into_iter().map(|point| {
                            view! {
                                <li class="flex items-start gap-3 text-base text-slate-200">
                                    <span class="mt-0.5 flex h-5 w-5 shrink-0 items-center justify-center rounded-full bg-blue-500/10">
                                        <Check class="w-3 h-3 text-blue-400" />
                                    </span>
                                    {point}
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            </section>
        </div>
    }
}
