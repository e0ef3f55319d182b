use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum BadgeColor {
    #[default]
    Blue,
    Green,
    Purple,
}

impl BadgeColor {
    fn class(self) -> &'static str {
        match self {
            BadgeColor::Blue => "px-2 py-0.5 text-[11px] font-semibold uppercase tracking-[0.12em] rounded border bg-blue-900/30 text-blue-300 border-blue-800",
            BadgeColor::Green => "px-2 py-0.5 text-[11px] font-semibold uppercase tracking-[0.12em] rounded border bg-green-900/30 text-green-300 border-green-800",
            BadgeColor::Purple => "px-2 py-0.5 text-[11px] font-semibold uppercase tracking-[0.12em] rounded border bg-purple-900/30 text-purple-300 border-purple-800",
        }
    }
}

#[component]
pub fn Badge(
    children: Children,
    #[prop(optional)] color: BadgeColor,
) -> impl IntoView {
    view! {
        <span class=color.class()>
            {children()}
        </span>
    }
}
