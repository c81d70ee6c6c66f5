use leptos::{ev::PointerEvent, html, prelude::*};

use crate::highlight::{CardBounds, HighlightTheme, PointerHighlight};

/// Card whose radial glow follows the pointer while hovered.
///
/// Every instance keeps its own [`PointerHighlight`], so any number of cards
/// can sit on the page together.
#[component]
pub fn PointerHighlightCard(
    #[prop(optional)] theme: HighlightTheme,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let (highlight, set_highlight) = signal(PointerHighlight::default());

    let on_move = move |ev: PointerEvent| {
        let Some(el) = card_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let bounds = CardBounds::new(rect.left(), rect.top(), rect.width(), rect.height());
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        set_highlight.update(|h| h.pointer_move(x, y, bounds));
    };

    view! {
        <div
            node_ref=card_ref
            class=format!(
                "relative overflow-hidden rounded-xl border shadow-sm bg-card transition-[border-color,box-shadow] duration-300 {class}",
            )
            style=move || highlight.with(|h| h.card_style(&theme))
            on:pointerenter=move |_| set_highlight.update(PointerHighlight::pointer_enter)
            on:pointerleave=move |_| set_highlight.update(PointerHighlight::pointer_leave)
            on:pointermove=on_move
        >
            <div
                aria-hidden="true"
                class="pointer-events-none absolute inset-0 transition-opacity duration-300"
                style=move || highlight.with(|h| h.layer_style(&theme))
            ></div>
            <div class="relative h-full">{children()}</div>
        </div>
    }
}
