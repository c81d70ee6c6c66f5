use leptos::prelude::*;

use crate::{
    content::{Award, Degree, Job},
    highlight::HighlightTheme,
};

use super::PointerHighlightCard;

#[component]
pub fn ExperienceList(jobs: Vec<Job>) -> impl IntoView {
    view! {
        <div class="space-y-8">
            {jobs
                .into_iter()
                .enumerate()
                .map(|(i, job)| {
                    view! {
                        <PointerHighlightCard theme=HighlightTheme::for_index(i) class="p-6">
                            <div class="flex flex-col md:flex-row md:items-center justify-between mb-4">
                                <div>
                                    <h3 class="text-xl font-semibold">{job.title}</h3>
                                    <p class="text-muted-foreground">{job.company}</p>
                                </div>
                                <span class="text-sm text-muted-foreground mt-2 md:mt-0">
                                    {job.period}
                                </span>
                            </div>
                            <ul class="space-y-2 list-disc list-inside text-muted-foreground">
                                {job
                                    .responsibilities
                                    .into_iter()
                                    .map(|item| view! { <li>{item}</li> })
                                    .collect_view()}
                            </ul>
                        </PointerHighlightCard>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Shared layout for education and award entries: heading, source and year
/// on one line, then a short description.
#[component]
fn Entry(
    theme: HighlightTheme,
    heading: String,
    source: String,
    year: String,
    description: String,
) -> impl IntoView {
    view! {
        <PointerHighlightCard theme class="p-6">
            <h3 class="text-xl font-semibold">{heading}</h3>
            <div class="flex items-center justify-between mt-2">
                <p class="text-muted-foreground">{source}</p>
                <span class="text-sm text-muted-foreground">{year}</span>
            </div>
            <p class="mt-4 text-muted-foreground">{description}</p>
        </PointerHighlightCard>
    }
}

#[component]
pub fn EducationList(degrees: Vec<Degree>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            {degrees
                .into_iter()
                .enumerate()
                .map(|(i, d)| {
                    view! {
                        <Entry
                            theme=HighlightTheme::for_index(i)
                            heading=d.degree
                            source=d.institution
                            year=d.year
                            description=d.description
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AwardsList(awards: Vec<Award>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
            {awards
                .into_iter()
                .enumerate()
                .map(|(i, a)| {
                    // offset so awards don't repeat the education colours
                    view! {
                        <Entry
                            theme=HighlightTheme::for_index(i + 2)
                            heading=a.title
                            source=a.organization
                            year=a.year
                            description=a.description
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
