use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-900 bg-slate-950 py-12 mt-auto">
            <div class="max-w-6xl mx-auto px-6 flex flex-col md:flex-row justify-between items-center text-slate-500 text-sm">
                <p>"Reasoning Mistake Analyzer \u{2014} AI-powered reasoning analysis without answers."</p>
                <div class="flex space-x-6 mt-4 md:mt-0">
                    <a
                        href="https://github.com/Mishra123456/Reasoning_Analyzer"
                        target="_blank"
                        rel="noreferrer"
                        class="hover:text-white transition-colors"
                    >
                        "GitHub"
                    </a>
                    <span>"Built by Author"</span>
                </div>
            </div>
        </footer>
    }
}
