use leptos::prelude::*;

use crate::{
    content::{Contact, Profile},
    highlight::HighlightTheme,
};

use super::{avatar::Headshot, PointerHighlightCard};

#[component]
fn ContactRow(#[prop(into)] icon: String, #[prop(into)] label: String, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 group">
            <div class="p-3 rounded-full bg-primary/10 text-primary group-hover:bg-primary/20 transition-colors">
                {icon}
            </div>
            <div class="flex-1">
                <h3 class="font-medium">{label}</h3>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn ContactSection(contact: Contact, profile: Profile) -> impl IntoView {
    let mailto = contact.mailto();
    view! {
        <div class="relative">
            <div class="grid md:grid-cols-2 gap-8 items-center">
                <div class="flex flex-col items-center md:items-start">
                    <div class="relative mb-6">
                        <Headshot src=profile.headshot alt=profile.name class="w-48 h-48" />
                        <div class="absolute -z-10 w-56 h-56 -top-4 -left-4 rounded-full border border-primary/30"></div>
                        <div class="absolute -z-10 w-52 h-52 -top-2 -left-2 rounded-full border border-primary/20"></div>
                    </div>
                    <p class="text-lg text-center md:text-left mb-6">
                        "I'm always open to discussing new projects, opportunities, or collaborations. Feel free to reach out through any of the channels below."
                    </p>
                </div>

                <PointerHighlightCard theme=HighlightTheme::for_index(0) class="p-6">
                    <div class="space-y-6">
                        <ContactRow icon="✉" label="Email">
                            <a
                                href=mailto
                                class="text-muted-foreground hover:text-primary transition-colors"
                            >
                                {contact.email}
                            </a>
                        </ContactRow>
                        <hr class="border-primary/10" />
                        <ContactRow icon="in" label="LinkedIn">
                            <a
                                href=contact.linkedin
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-muted-foreground hover:text-primary transition-colors"
                            >
                                "Connect with me"
                            </a>
                        </ContactRow>
                        <hr class="border-primary/10" />
                        <ContactRow icon="⤓" label="Resume">
                            <p class="text-muted-foreground text-sm mb-2">
                                "Download my resume for more details"
                            </p>
                            <a
                                href=contact.resume_url
                                download=""
                                class="inline-flex items-center rounded-md border border-primary/20 hover:border-primary px-4 py-2 text-sm transition-colors"
                            >
                                "⤓ Download Resume"
                            </a>
                        </ContactRow>
                    </div>
                </PointerHighlightCard>
            </div>

            <div class="absolute top-12 right-12 w-24 h-24 border border-primary/10 rounded-full opacity-30 pointer-events-none"></div>
            <div class="absolute bottom-12 left-12 w-16 h-16 border border-primary/10 rounded-full opacity-30 pointer-events-none"></div>
        </div>
    }
}
