use leptos::*;
use wasm_bindgen::JsCast;

/// Mounts a view into a fresh container on the page and returns the container.
pub fn render<F, N>(f: F) -> web_sys::HtmlElement
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let container = document()
        .create_element("div")
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    document().body().unwrap().append_child(&container).unwrap();
    mount_to(container.clone(), f);
    container
}
