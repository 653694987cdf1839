use super::*;

/// Type-to-confirm gate shown before any delete reaches the server.
#[component]
pub(super) fn DeleteConfirmModal() -> impl IntoView {
    let runtime = use_library_runtime();
    let state = runtime.state;
    let overlay = runtime.overlay;

    let phrase = state.get_untracked().config.confirm_phrase;
    let instruction = format!("Type {phrase} to confirm.");

    let target_count = Signal::derive(move || overlay.get().confirm.targets().len());
    let typed = Signal::derive(move || match overlay.get().confirm {
        ConfirmGate::Open { typed, .. } => typed,
        ConfirmGate::Closed => String::new(),
    });
    let armed = Signal::derive(move || {
        let phrase = state.get().config.confirm_phrase;
        overlay.get().confirm.is_armed(&phrase)
    });
    let delete_disabled = Signal::derive(move || !armed.get() || state.get().is_mutating());

    let accept = move || {
        let phrase = state.get_untracked().config.confirm_phrase;
        if overlay.get_untracked().confirm.is_armed(&phrase) {
            runtime.dispatch_action(LibraryAction::ConfirmAccepted);
        }
    };

    view! {
        <Modal
            title="Delete media"
            layout_class="confirm-modal"
            on_dismiss=Callback::new(move |_| {
                runtime.dispatch_action(LibraryAction::ConfirmDismissed);
            })
        >
            <Stack gap=LayoutGap::Md>
                <Text tone=TextTone::Danger>
                    {move || {
                        let count = target_count.get();
                        if count == 1 {
                            "This permanently deletes 1 item and cannot be undone.".to_string()
                        } else {
                            format!("This permanently deletes {count} items and cannot be undone.")
                        }
                    }}
                </Text>
                <FieldGroup title="Confirmation" description=instruction>
                    <TextField
                        aria_label="Confirmation phrase"
                        autocomplete="off"
                        spellcheck=false
                        value=typed
                        on_input=Callback::new(move |ev: web_sys::Event| {
                            runtime.dispatch_action(LibraryAction::ConfirmTyped {
                                input: event_target_value(&ev),
                            });
                        })
                        on_keydown=Callback::new(move |ev: KeyboardEvent| {
                            if ev.key() == "Enter" {
                                accept();
                            }
                        })
                    />
                </FieldGroup>
                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End>
                    <Button
                        variant=ButtonVariant::Quiet
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(LibraryAction::ConfirmDismissed);
                        })
                    >
                        "Cancel"
                    </Button>
                    <Button
                        variant=ButtonVariant::Danger
                        leading_icon=IconName::Trash
                        disabled=delete_disabled
                        on_click=Callback::new(move |_| accept())
                    >
                        "Delete"
                    </Button>
                </Cluster>
            </Stack>
        </Modal>
    }
}
