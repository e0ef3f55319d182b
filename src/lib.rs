pub mod analysis;
pub mod components;
pub mod data;
pub mod demo;
pub mod pages;

use components::footer::Footer;
use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Title text="Reasoning Mistake Analyzer" />
            <Meta
                name="description"
                content="AI that explains why reasoning fails, without revealing answers."
            />
            <div class="min-h-screen bg-slate-950 text-slate-200 selection:bg-blue-500/30 font-sans">
                <Navbar />
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=Home />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}
