use super::*;

#[component]
/// Horizontal toolbar container with grouped actions.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="toolbar"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Tab strip container.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            role="tablist"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="tab-list"
        >
            {children()}
        </div>
    }
}

#[component]
/// Single tab inside a [`TabList`].
pub fn Tab(
    #[prop(into)] id: MaybeSignal<String>,
    #[prop(into)] controls: MaybeSignal<String>,
    #[prop(into)] selected: MaybeSignal<bool>,
    #[prop(into)] tabindex: MaybeSignal<i32>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=merge_layout_class("ui-tab", layout_class)
            type="button"
            role="tab"
            id=move || id.get()
            aria-controls=move || controls.get()
            aria-selected=move || bool_token(selected.get())
            tabindex=move || tabindex.get()
            data-ui-primitive="true"
            data-ui-kind="tab"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(cb) = on_click.as_ref() {
                    cb.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(cb) = on_keydown.as_ref() {
                    cb.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Page stepper with a live page readout.
pub fn Pager(
    #[prop(into)] page: MaybeSignal<usize>,
    #[prop(into)] total_pages: MaybeSignal<usize>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_previous: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_next: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let at_start = Signal::derive(move || page.get() <= 1);
    let at_end = Signal::derive(move || page.get() >= total_pages.get().max(1));
    view! {
        <div
            class=merge_layout_class("ui-pager", layout_class)
            data-ui-primitive="true"
            data-ui-kind="pager"
        >
            <IconButton
                icon=IconName::ArrowLeft
                aria_label="Previous page"
                disabled=at_start
                on_click=Callback::new(move |ev| {
                    if let Some(cb) = on_previous.as_ref() {
                        cb.call(ev);
                    }
                })
            />
            <span data-ui-slot="status" aria-live="polite">
                {move || format!("Page {} of {}", page.get(), total_pages.get().max(1))}
            </span>
            <IconButton
                icon=IconName::ArrowRight
                aria_label="Next page"
                disabled=at_end
                on_click=Callback::new(move |ev| {
                    if let Some(cb) = on_next.as_ref() {
                        cb.call(ev);
                    }
                })
            />
        </div>
    }
}
