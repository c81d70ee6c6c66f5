use leptos::prelude::*;

use crate::{
    content::{Project, ProjectDetail},
    disclosure::Accordion,
    highlight::HighlightTheme,
};

use super::PointerHighlightCard;

#[component]
pub fn ProjectCard(project: Project, theme: HighlightTheme) -> impl IntoView {
    let (accordion, set_accordion) = signal(Accordion::<ProjectDetail>::default());
    let details = ProjectDetail::ALL.map(|detail| (detail, project.detail(detail).to_string()));
    let Project {
        title,
        description,
        image,
        technologies,
        link,
        ..
    } = project;

    view! {
        <PointerHighlightCard theme class="flex flex-col w-full max-w-md">
            <div class="relative h-48 overflow-hidden bg-muted">
                <img
                    src=image
                    alt=title.clone()
                    class="w-full h-full object-cover transition-transform duration-300 hover:scale-105"
                />
                <div class="absolute top-0 left-0 w-full h-full bg-gradient-to-b from-transparent to-black/50"></div>
            </div>

            <div class="p-6 space-y-1.5">
                <h3 class="text-xl font-bold">{title}</h3>
                <p class="text-muted-foreground">{description}</p>
            </div>

            <div class="px-6 pb-6">
                <div class="flex flex-wrap gap-2 mb-4">
                    {technologies
                        .into_iter()
                        .map(|tech| {
                            view! {
                                <span class="rounded-md px-2.5 py-0.5 text-xs font-semibold bg-primary/10">
                                    {tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="w-full">
                    {details
                        .into_iter()
                        .map(|(detail, text)| {
                            let is_open = move || accordion.with(|a| a.is_open(detail));
                            view! {
                                <div class="border-b border-border">
                                    <button
                                        type="button"
                                        class="flex w-full items-center justify-between py-4 text-sm font-medium hover:underline"
                                        aria-expanded=move || is_open().to_string()
                                        on:click=move |_| set_accordion.update(|a| a.toggle(detail))
                                    >
                                        {detail.label()}
                                        <span class=move || {
                                            if is_open() {
                                                "transition-transform duration-200 rotate-180"
                                            } else {
                                                "transition-transform duration-200"
                                            }
                                        }>"⌄"</span>
                                    </button>
                                    <Show when=is_open>
                                        <div class="pb-4 text-sm">{text.clone()}</div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            {link
                .map(|href| {
                    view! {
                        <div class="flex justify-end border-t border-border p-4 mt-auto">
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 rounded-md border border-input px-3 py-1.5 text-sm hover:bg-accent"
                            >
                                "View Details ↗"
                            </a>
                        </div>
                    }
                })}

            <CircuitTrace />
        </PointerHighlightCard>
    }
}

#[component]
fn CircuitTrace() -> impl IntoView {
    view! {
        <div class="absolute top-0 right-0 w-16 h-16 opacity-10 pointer-events-none">
            <svg viewBox="0 0 100 100" xmlns="http://www.w3.org/2000/svg" class="w-full h-full">
                <path
                    d="M10,30 L40,30 L40,10 L60,10 L60,30 L90,30"
                    stroke="currentColor"
                    stroke-width="2"
                    fill="none"
                />
                <path d="M10,50 L90,50" stroke="currentColor" stroke-width="2" fill="none" />
                <path
                    d="M10,70 L30,70 L30,90 L70,90 L70,70 L90,70"
                    stroke="currentColor"
                    stroke-width="2"
                    fill="none"
                />
                <circle cx="40" cy="30" r="3" fill="currentColor" />
                <circle cx="60" cy="30" r="3" fill="currentColor" />
                <circle cx="30" cy="70" r="3" fill="currentColor" />
                <circle cx="70" cy="70" r="3" fill="currentColor" />
            </svg>
        </div>
    }
}
