use leptos::*;

use crate::components::typography::{Typography, TypographyVariant};

const EXPAND_MORE: &str = "▾";

/// Collapsible panel using details/summary. Open state lives in the element.
#[component]
pub fn Accordion(
    #[prop(into)] summary: TextProp,
    #[prop(optional)] open: bool,
    #[prop(optional)] variant: TypographyVariant,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] style: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("accordion {}", extra)
    } else {
        "accordion".to_string()
    };
    let style_attr = style.unwrap_or_default();

    view! {
        <details class=full_class style=style_attr open=open>
            <summary
                class="accordion-summary"
                style="cursor: pointer; user-select: none; display: flex; align-items: center; justify-content: space-between; padding: 0.5rem 0;"
            >
                <Typography variant=variant>{move || summary.get().to_string()}</Typography>
                <span class="accordion-expand-icon" aria-hidden="true">{EXPAND_MORE}</span>
            </summary>
            <div class="accordion-details" style="margin-top: 0.75rem;">
                {children()}
            </div>
        </details>
    }
}
