use leptos::prelude::*;

/// Round headshot, cropped slightly off-centre towards the face.
#[component]
pub fn Headshot(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <div class=format!("rounded-full overflow-hidden border-4 border-primary/20 {class}")>
            <img
                src=src
                alt=alt
                class="w-full h-full object-cover"
                style="object-position: 35% center; transform: scale(1.25)"
            />
        </div>
    }
}
