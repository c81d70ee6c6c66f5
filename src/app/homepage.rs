use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    content::{portfolio, Portfolio, Profile},
    highlight::HighlightTheme,
};

use super::{
    avatar::Headshot,
    contact::ContactSection,
    header::Header,
    projects::ProjectCard,
    resume::{AwardsList, EducationList, ExperienceList},
    skills::SkillsGrid,
};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn HomePage() -> impl IntoView {
    let Portfolio {
        profile,
        projects,
        experience,
        education,
        awards,
        skills,
        contact,
    } = portfolio().clone();
    let contact_profile = profile.clone();
    let name = profile.name.clone();

    view! {
        <Title text="Portfolio" />
        <div class="min-h-screen bg-background text-foreground">
            <Header profile=profile.clone() />
            <main class="pt-20">
                <Hero profile />
                <Separator />

                <Section
                    id="projects"
                    title="Featured Projects"
                    blurb="Explore my technical projects showcasing expertise in embedded systems, digital design, and real-time control."
                >
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                        {projects
                            .into_iter()
                            .enumerate()
                            .map(|(i, project)| {
                                view! { <ProjectCard project theme=HighlightTheme::for_index(i) /> }
                            })
                            .collect_view()}
                    </div>
                </Section>

                <Section
                    id="experience"
                    title="Professional Experience"
                    blurb="My professional journey in electrical engineering and embedded systems development."
                >
                    <ExperienceList jobs=experience />
                </Section>

                <Section
                    id="skills"
                    title="Technical Skills"
                    blurb="My technical toolkit spanning programming languages, hardware tools, and design methodologies."
                >
                    <SkillsGrid skills />
                </Section>

                <Section
                    id="education"
                    title="Education"
                    blurb="My academic background and qualifications in engineering disciplines."
                >
                    <EducationList degrees=education />
                </Section>

                <Section
                    id="awards"
                    title="Awards & Achievements"
                    blurb="Recognition received for academic and professional excellence."
                >
                    <AwardsList awards />
                </Section>

                <Section
                    id="contact"
                    title="Get In Touch"
                    blurb="Interested in working together? Feel free to reach out through any of the channels below."
                    last=true
                >
                    <ContactSection contact profile=contact_profile />
                </Section>
            </main>
            <Footer name />
        </div>
    }
}

#[component]
fn Separator() -> impl IntoView {
    view! { <div role="separator" class="h-px w-full max-w-7xl mx-auto bg-border"></div> }
}

#[component]
fn Section(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(into)] blurb: String,
    #[prop(optional)] last: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="py-16 px-4 md:px-8 lg:px-16 max-w-7xl mx-auto">
            <div class="space-y-4 mb-12">
                <h2 class="text-3xl font-bold tracking-tight">{title}</h2>
                <p class="text-muted-foreground max-w-3xl">{blurb}</p>
            </div>
            {children()}
        </section>
        {(!last).then(|| view! { <Separator /> })}
    }
}

#[component]
fn Hero(profile: Profile) -> impl IntoView {
    view! {
        <section class="relative py-20 px-4 md:px-8 lg:px-16 max-w-7xl mx-auto">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 items-center">
                <div class="space-y-6 animate-fade-in-left">
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold tracking-tight">
                        {profile.name.clone()}
                    </h1>
                    <h2 class="text-2xl md:text-3xl text-muted-foreground">{profile.title}</h2>
                    <p class="text-lg text-muted-foreground max-w-lg">{profile.tagline}</p>
                    <div class="flex gap-4">
                        <a
                            href="#projects"
                            class="inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors bg-primary text-primary-foreground shadow hover:bg-primary/90 h-10 px-4 py-2"
                        >
                            "View Projects"
                        </a>
                        <a
                            href="#contact"
                            class="inline-flex items-center justify-center rounded-md text-sm font-medium transition-colors border border-input bg-background shadow-sm hover:bg-accent h-10 px-4 py-2"
                        >
                            "Contact Me"
                        </a>
                    </div>
                </div>
                <div class="relative animate-scale-in">
                    <Headshot
                        src=profile.headshot
                        alt=profile.name
                        class="aspect-square shadow-xl max-w-sm mx-auto mt-8"
                    />
                    <div class="absolute inset-0 -z-10 bg-[radial-gradient(#e5e7eb_1px,transparent_1px)] [background-size:16px_16px] opacity-20"></div>
                </div>
            </div>
            <div class="absolute top-0 right-0 -z-10 w-full h-full overflow-hidden">
                <div class="absolute bottom-0 left-0 h-32 w-32 rounded-full bg-primary/10 blur-3xl"></div>
                <div class="absolute top-1/4 right-1/4 h-64 w-64 rounded-full bg-primary/5 blur-3xl"></div>
            </div>
        </section>
    }
}

#[component]
fn Footer(name: String) -> impl IntoView {
    view! {
        <footer class="py-8 px-4 md:px-8 lg:px-16 border-t border-border">
            <div class="max-w-7xl mx-auto flex flex-col md:flex-row justify-between items-center">
                <p class="text-sm text-muted-foreground">
                    {format!("© {BUILD_YEAR} {name}. All rights reserved.")}
                </p>
                <a
                    href="#"
                    class="text-sm text-muted-foreground hover:text-foreground transition-colors mt-4 md:mt-0"
                >
                    "Back to top ↑"
                </a>
            </div>
        </footer>
    }
}
