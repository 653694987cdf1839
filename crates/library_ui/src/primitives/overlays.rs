use super::*;

#[component]
/// Modal dialog with a titled header and a backdrop that dismisses on click.
pub fn Modal(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let dismiss = move || {
        if let Some(cb) = on_dismiss.as_ref() {
            cb.call(());
        }
    };
    let heading = title.clone();
    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
            on:mousedown=move |_| dismiss()
        >
            <div
                class=merge_layout_class("ui-modal", layout_class)
                role="dialog"
                aria-modal="true"
                aria-label=move || title.get()
                data-ui-primitive="true"
                data-ui-kind="modal"
                data-ui-slot=ui_slot
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <header data-ui-slot="modal-header">
                    <span data-ui-slot="modal-title">{move || heading.get()}</span>
                    <IconButton
                        icon=IconName::Close
                        aria_label="Close dialog"
                        on_click=Callback::new(move |_| dismiss())
                    />
                </header>
                <div data-ui-slot="modal-body">{children()}</div>
            </div>
        </div>
    }
}

#[component]
/// Fixed shelf that stacks transient toast notices.
pub fn ToastShelf(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast-shelf", layout_class)
            aria-live="polite"
            data-ui-primitive="true"
            data-ui-kind="toast-shelf"
        >
            {children()}
        </div>
    }
}

#[component]
/// Single toast notice with a tone and a dismiss control.
pub fn ToastCard(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast-card", layout_class)
            role="status"
            data-ui-primitive="true"
            data-ui-kind="toast-card"
            data-ui-tone=tone.token()
        >
            <span data-ui-slot="toast-copy">{children()}</span>
            <IconButton
                icon=IconName::Close
                size=ButtonSize::Sm
                aria_label="Dismiss notice"
                on_click=Callback::new(move |ev| {
                    if let Some(cb) = on_dismiss.as_ref() {
                        cb.call(ev);
                    }
                })
            />
        </div>
    }
}
