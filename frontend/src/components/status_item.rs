use leptos::*;

use crate::components::accordion::Accordion;
use crate::components::status_icon::StatusIcon;
use crate::components::typography::{Typography, TypographyVariant};
use crate::theme::{use_theme, Theme};

fn item_style(theme: &Theme) -> String {
    format!(
        "position: relative; border-top: solid 1px {}; padding-left: {}px;",
        theme.divider_color, theme.rail_width
    )
}

fn rail_style(theme: &Theme) -> String {
    format!(
        "position: absolute; top: 0; left: 0; box-sizing: border-box; width: {}px; height: 100%; \
         padding-top: {}px; text-align: center; border-right: solid 1px {};",
        theme.rail_width,
        theme.spacing(3),
        theme.divider_color
    )
}

fn details_style(theme: &Theme) -> String {
    format!("padding: {}px;", theme.spacing(2))
}

/// Status rail plus summary (static or reactive text). With children the
/// summary becomes the header of a collapsed panel holding them; without, it
/// is plain text.
#[component]
pub fn StatusItem(
    #[prop(into)] status: String,
    #[prop(into)] summary: TextProp,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let theme = use_theme();

    let content = match children {
        Some(children) => view! {
            <Accordion
                summary=summary
                variant=TypographyVariant::Title
                class="status-item-panel"
                style="box-shadow: none;"
            >
                {children()}
            </Accordion>
        }.into_view(),
        None => view! {
            <Typography>{move || summary.get().to_string()}</Typography>
        }.into_view(),
    };

    view! {
        <div class="status-item" style=item_style(&theme)>
            <div class="status-item-rail" style=rail_style(&theme)>
                <StatusIcon status=status />
            </div>
            <div class="status-item-details" style=details_style(&theme)>
                <div class="grid-container">
                    <div class="grid-item grid-xs-12">
                        {content}
                    </div>
                </div>
            </div>
        </div>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod dom_tests {
    use super::*;
    use crate::test_support::render;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_plain_summary_without_children() {
        let root = render(|| view! { <StatusItem status="completed" summary="Fetched price" /> });

        let text = root.query_selector("p.typography-body").unwrap().unwrap();
        assert_eq!(text.text_content().unwrap(), "Fetched price");
        assert!(root.query_selector("details").unwrap().is_none());
        assert!(root.query_selector("summary").unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_children_render_in_collapsed_panel() {
        let root = render(|| view! {
            <StatusItem status="errored" summary="ds1 (http)">
                <pre class="payload">"connection refused"</pre>
            </StatusItem>
        });

        let details = root
            .query_selector("details.status-item-panel")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlDetailsElement>();
        assert!(!details.open());

        let header = root.query_selector("summary h3.typography-title").unwrap().unwrap();
        assert_eq!(header.text_content().unwrap(), "ds1 (http)");

        details.set_open(true);
        let body = root.query_selector("details .accordion-details .payload").unwrap().unwrap();
        assert_eq!(body.text_content().unwrap(), "connection refused");
    }

    #[wasm_bindgen_test]
    fn test_icon_depends_only_on_status() {
        let plain = render(|| view! { <StatusItem status="in_progress" summary="a" /> });
        let nested = render(|| view! {
            <StatusItem status="in_progress" summary="something else">
                "details"
            </StatusItem>
        });

        let glyph = |root: &web_sys::HtmlElement| {
            root.query_selector(".status-item-rail [role=img]")
                .unwrap()
                .unwrap()
                .get_attribute("data-glyph")
                .unwrap()
        };
        assert_eq!(glyph(&plain), "pending");
        assert_eq!(glyph(&nested), "pending");
    }

    #[wasm_bindgen_test]
    fn test_unknown_status_renders_fallback_icon() {
        let root = render(|| view! { <StatusItem status="mystery" summary="a" /> });
        let icon = root.query_selector(".status-icon").unwrap().unwrap();
        assert_eq!(icon.get_attribute("data-glyph").unwrap(), "unknown");
        assert_eq!(icon.get_attribute("aria-label").unwrap(), "mystery");
    }

    #[wasm_bindgen_test]
    fn test_identical_inputs_render_identically() {
        let first = render(|| view! { <StatusItem status="completed" summary="same">"body"</StatusItem> });
        let second = render(|| view! { <StatusItem status="completed" summary="same">"body"</StatusItem> });
        assert_eq!(first.inner_html(), second.inner_html());
    }

    #[wasm_bindgen_test]
    fn test_theme_from_context() {
        let root = render(|| {
            crate::theme::provide_theme(Theme {
                rail_width: 64,
                ..Theme::default()
            });
            view! { <StatusItem status="completed" summary="a" /> }
        });
        let item = root.query_selector(".status-item").unwrap().unwrap();
        assert!(item.get_attribute("style").unwrap().contains("padding-left: 64px;"));
    }

    #[wasm_bindgen_test]
    fn test_plain_summary_follows_signal() {
        let (count, set_count) = create_signal(1);
        let root = render(move || view! {
            <StatusItem status="in_progress" summary=move || format!("{} tasks left", count.get()) />
        });

        set_count.set(0);
        let text = root.query_selector("p.typography-body").unwrap().unwrap();
        assert_eq!(text.text_content().unwrap(), "0 tasks left");
    }
}
