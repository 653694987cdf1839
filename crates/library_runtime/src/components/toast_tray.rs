use super::*;

/// Stacked transient notices in the corner of the library surface.
#[component]
pub(super) fn ToastTray() -> impl IntoView {
    let runtime = use_library_runtime();
    let overlay = runtime.overlay;

    let toasts = Signal::derive(move || overlay.get().toasts);

    view! {
        <ToastShelf layout_class="library-toasts">
            <For each=move || toasts.get() key=|toast| toast.id let:toast>
                {
                    let id = toast.id;
                    let tone = match toast.tone {
                        ToastTone::Success => TextTone::Success,
                        ToastTone::Error => TextTone::Danger,
                    };
                    view! {
                        <ToastCard
                            tone=tone
                            on_dismiss=Callback::new(move |_| {
                                runtime.dispatch_action(LibraryAction::ToastDismissed { id });
                            })
                        >
                            {toast.message.clone()}
                        </ToastCard>
                    }
                }
            </For>
        </ToastShelf>
    }
}
