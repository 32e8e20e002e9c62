use leptos::*;
use shared::StatusGlyph;

fn icon_class(glyph: StatusGlyph) -> &'static str {
    match glyph {
        StatusGlyph::Success => "status-icon status-icon-success",
        StatusGlyph::Failure => "status-icon status-icon-failure",
        StatusGlyph::Pending => "status-icon status-icon-pending",
        StatusGlyph::Cancelled => "status-icon status-icon-cancelled",
        StatusGlyph::Unknown => "status-icon status-icon-unknown",
    }
}

fn icon_symbol(glyph: StatusGlyph) -> &'static str {
    match glyph {
        StatusGlyph::Success => "✓",
        StatusGlyph::Failure => "✕",
        StatusGlyph::Pending => "◔",
        StatusGlyph::Cancelled => "⊘",
        StatusGlyph::Unknown => "?",
    }
}

/// Icon for a run status label.
#[component]
pub fn StatusIcon(#[prop(into)] status: String) -> impl IntoView {
    let glyph = StatusGlyph::resolve(&status);
    if glyph == StatusGlyph::Unknown {
        log::warn!("no status icon for label {:?}", status);
    }

    view! {
        <span
            class=icon_class(glyph)
            role="img"
            title=status.clone()
            aria-label=status
            data-glyph=glyph.as_str()
        >
            {icon_symbol(glyph)}
        </span>
    }
}
