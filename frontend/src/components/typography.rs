use leptos::*;

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum TypographyVariant {
    Title,
    #[default]
    Body,
}

impl TypographyVariant {
    fn class(&self) -> &'static str {
        match self {
            TypographyVariant::Title => "typography typography-title",
            TypographyVariant::Body => "typography typography-body",
        }
    }
}

/// Text block with consistent styling.
#[component]
pub fn Typography(
    #[prop(optional)] variant: TypographyVariant,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("{} {}", variant.class(), extra)
    } else {
        variant.class().to_string()
    };

    match variant {
        TypographyVariant::Title => view! {
            <h3 class=full_class style="margin: 0;">{children()}</h3>
        }.into_view(),
        TypographyVariant::Body => view! {
            <p class=full_class style="margin: 0;">{children()}</p>
        }.into_view(),
    }
}
