use leptos::prelude::*;
use leptos_router::components::A;

use super::icons::Github;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-slate-950/80 backdrop-blur-md border-b border-slate-800">
            <div class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center space-x-2 group">
                    <span class="w-8 h-8 rounded-lg bg-gradient-to-br from-blue-500 to-purple-500 flex items-center justify-center text-white font-black group-hover:scale-110 transition-transform">
                        "R"
                    </span>
                    <span class="font-bold text-white text-lg tracking-tight">
                        "Reasoning Mistake Analyzer"
                    </span>
                </A>

                <nav class="hidden md:flex items-center space-x-8">
                    <a
                        href="#demo"
                        class="text-sm font-medium transition-colors text-slate-400 hover:text-white"
                    >
                        "Demo"
                    </a>
                    <a
                        href="#modes"
                        class="text-sm font-medium transition-colors text-slate-400 hover:text-white"
                    >
                        "Modes"
                    </a>
                    <a
                        href="https://github.com/Mishra123456/Reasoning_Analyzer"
                        target="_blank"
                        rel="noreferrer"
                        class="text-slate-400 hover:text-white transition-colors"
                    >
                        <Github class="w-5 h-5" />
                    </a>
                </nav>
            </div>
        </header>
    }
}
