use leptos::prelude::*;

use crate::{
    content::{Skill, SkillCategory, Skills},
    highlight::HighlightTheme,
};

use super::PointerHighlightCard;

#[component]
pub fn SkillsGrid(skills: Skills) -> impl IntoView {
    let (active, set_active) = signal(SkillCategory::default());
    let skills = StoredValue::new(skills);

    view! {
        <div class="w-full py-8">
            <div role="tablist" class="grid w-full grid-cols-3 mb-8 rounded-lg bg-muted p-1">
                {SkillCategory::ALL
                    .into_iter()
                    .map(|category| {
                        let selected = move || active.get() == category;
                        view! {
                            <button
                                type="button"
                                role="tab"
                                aria-selected=move || selected().to_string()
                                class=move || {
                                    if selected() {
                                        "flex items-center justify-center gap-2 rounded-md px-3 py-1.5 text-sm font-medium bg-background text-foreground shadow"
                                    } else {
                                        "flex items-center justify-center gap-2 rounded-md px-3 py-1.5 text-sm font-medium text-muted-foreground"
                                    }
                                }
                                on:click=move |_| set_active(category)
                            >
                                <span>{category.icon().glyph()}</span>
                                <span class="hidden sm:inline">{category.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div role="tabpanel" class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    let category = active.get();
                    let theme = HighlightTheme::for_index(category.index());
                    skills
                        .with_value(|s| s.category(category).to_vec())
                        .into_iter()
                        .map(|skill| view! { <SkillCard skill theme /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn SkillCard(skill: Skill, theme: HighlightTheme) -> impl IntoView {
    let dots = skill.dots();
    view! {
        <PointerHighlightCard theme>
            <div class="p-4 flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <div class="bg-primary/10 p-2 rounded-md font-mono text-sm">
                        {skill.icon.glyph()}
                    </div>
                    <h3 class="font-medium">{skill.name}</h3>
                </div>
                <div
                    class="flex items-center gap-1 rounded-md border border-border px-2 py-1"
                    title=format!("{} / {}", dots.iter().filter(|d| **d).count(), dots.len())
                >
                    {dots
                        .into_iter()
                        .map(|filled| {
                            view! {
                                <span class=if filled {
                                    "w-1.5 h-1.5 rounded-full bg-primary"
                                } else {
                                    "w-1.5 h-1.5 rounded-full bg-muted"
                                }></span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PointerHighlightCard>
    }
}
