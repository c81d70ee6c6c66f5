use leptos::{ev::MouseEvent, prelude::*};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::{
    content::Profile,
    nav::{scroll_target, NavItem, NAV_ITEMS},
};

use super::theme::use_dark_mode;

fn smooth_scroll(top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

/// Scrolls a section into view without hiding it under the fixed navbar.
fn scroll_to_section(id: &str) {
    let doc = document();
    let Some(element) = doc.get_element_by_id(id) else {
        log::warn!("no section with id {id}");
        return;
    };
    let nav_height = doc
        .query_selector("nav")
        .ok()
        .flatten()
        .map(|nav| f64::from(nav.client_height()))
        .unwrap_or_default();
    let scroll_y = window().scroll_y().unwrap_or_default();
    let element_top = element.get_bounding_client_rect().top();
    smooth_scroll(scroll_target(element_top, scroll_y, nav_height));
}

#[component]
pub fn Header(profile: Profile) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let nav_link = move |item: NavItem, mobile: bool| {
        let class = if mobile {
            "text-sm font-medium hover:text-primary transition-colors py-2 cursor-pointer"
        } else {
            "text-sm font-medium hover:text-primary transition-colors cursor-pointer"
        };
        view! {
            <a
                href=item.href()
                class=class
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    scroll_to_section(item.id);
                    set_menu_open(false);
                }
            >
                {item.name}
            </a>
        }
    };

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-background/70 backdrop-blur-sm border-b border-border/30">
            <div class="container mx-auto px-4 h-20 flex items-center justify-between">
                <a
                    href="#"
                    class="text-xl font-semibold tracking-tight cursor-pointer"
                    on:click=|ev: MouseEvent| {
                        ev.prevent_default();
                        smooth_scroll(0.0);
                    }
                >
                    {profile.name}
                    <span class="text-primary ml-1">"|"</span>
                    <span class="text-sm ml-2 text-muted-foreground">{profile.title}</span>
                </a>

                <div class="hidden md:flex items-center space-x-6">
                    {NAV_ITEMS.into_iter().map(|item| nav_link(item, false)).collect_view()}
                    <DarkModeToggle />
                </div>

                <div class="flex md:hidden items-center space-x-2">
                    <DarkModeToggle />
                    <button
                        type="button"
                        class="inline-flex h-9 w-9 items-center justify-center rounded-md hover:bg-accent"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-background border-t border-border">
                    <div class="container mx-auto px-4 py-4 flex flex-col space-y-4">
                        {NAV_ITEMS.into_iter().map(|item| nav_link(item, true)).collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn DarkModeToggle() -> impl IntoView {
    let dark_mode = use_dark_mode();

    view! {
        <button
            type="button"
            class="inline-flex h-9 w-9 items-center justify-center rounded-md hover:bg-accent transition-colors"
            aria-label="Toggle dark mode"
            on:click=move |_| dark_mode.toggle.run(())
        >
            {move || if dark_mode.preference.get().enabled() { "☀" } else { "☾" }}
        </button>
    }
}
