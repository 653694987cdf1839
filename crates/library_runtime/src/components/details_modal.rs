use super::*;

/// Modal editor for the item currently open in the details pane.
///
/// Edits accumulate in a local working copy and only reach the server when
/// the save button dispatches them, so stepping away or dismissing discards
/// them silently.
#[component]
pub(super) fn MediaDetailsModal() -> impl IntoView {
    let runtime = use_library_runtime();
    let state = runtime.state;
    let overlay = runtime.overlay;

    let open_item = Signal::derive(move || {
        overlay
            .get()
            .details
            .and_then(|id| state.get().item(id).cloned())
    });

    let name = create_rw_signal(String::new());
    let alt_text = create_rw_signal(String::new());
    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let shown_id = create_rw_signal(None::<MediaId>);

    // Reload the working copy only when a different item lands in the pane,
    // so background refreshes cannot clobber in-progress edits.
    create_effect(move |_| {
        let Some(item) = open_item.get() else {
            return;
        };
        if shown_id.get_untracked() == item.id {
            return;
        }
        shown_id.set(item.id);
        name.set(item.name.clone());
        alt_text.set(item.alt_text.clone().unwrap_or_default());
        title.set(item.title.clone().unwrap_or_default());
        description.set(item.description.clone().unwrap_or_default());
    });

    let is_dirty = Signal::derive(move || {
        let Some(item) = open_item.get() else {
            return false;
        };
        let edited = MediaItem {
            name: name.get(),
            alt_text: Some(alt_text.get()),
            title: Some(title.get()),
            description: Some(description.get()),
            ..item.clone()
        };
        item.metadata_differs(&edited)
    });
    let save_disabled = Signal::derive(move || !is_dirty.get() || state.get().is_mutating());

    let position = Signal::derive(move || {
        let current = overlay.get().details?;
        let ids: Vec<MediaId> = state
            .get()
            .filtered_items()
            .iter()
            .filter_map(|item| item.id)
            .collect();
        let pos = ids.iter().position(|id| *id == current)?;
        Some((pos, ids.len()))
    });
    let at_first = Signal::derive(move || position.get().map_or(true, |(pos, _)| pos == 0));
    let at_last = Signal::derive(move || position.get().map_or(true, |(pos, len)| pos + 1 >= len));
    let position_label = Signal::derive(move || {
        position
            .get()
            .map(|(pos, len)| format!("{} of {}", pos + 1, len))
            .unwrap_or_default()
    });

    let no_link = Signal::derive(move || {
        open_item
            .get()
            .map_or(true, |item| is_blank(item.download_url.as_deref()))
    });

    let modal_title = Signal::derive(move || {
        open_item
            .get()
            .map(|item| item.name)
            .unwrap_or_else(|| "Media details".to_string())
    });

    let on_save = Callback::new(move |_| {
        let Some(item) = open_item.get_untracked() else {
            return;
        };
        let Some(id) = item.id else {
            return;
        };
        let typed_name = name.get_untracked();
        let update = MediaUpdate {
            id,
            name: if typed_name.trim().is_empty() {
                item.name.clone()
            } else {
                typed_name
            },
            alt_text: alt_text.get_untracked(),
            title: title.get_untracked(),
            description: description.get_untracked(),
        };
        runtime.dispatch_action(LibraryAction::SaveRequested { update });
    });

    view! {
        <Modal
            title=modal_title
            layout_class="details-modal"
            on_dismiss=Callback::new(move |_| {
                runtime.dispatch_action(LibraryAction::DetailsClosed);
            })
        >
            <Stack gap=LayoutGap::Md>
                <Cluster justify=LayoutJustify::Between ui_slot="details-stepper">
                    <IconButton
                        icon=IconName::ArrowLeft
                        aria_label="Previous item"
                        disabled=at_first
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(LibraryAction::DetailsStepped {
                                forward: false,
                            });
                        })
                    />
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        {move || position_label.get()}
                    </Text>
                    <IconButton
                        icon=IconName::ArrowRight
                        aria_label="Next item"
                        disabled=at_last
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(LibraryAction::DetailsStepped {
                                forward: true,
                            });
                        })
                    />
                </Cluster>

                <Cluster gap=LayoutGap::Lg align=LayoutAlign::Start ui_slot="details-body">
                    <PreviewFrame layout_class="details-preview">
                        {move || open_item.get().map(|item| view! { <MediaPreview item /> })}
                    </PreviewFrame>

                    <Stack gap=LayoutGap::Sm layout_class="details-fields">
                        <FieldGroup title="Name">
                            <TextField
                                aria_label="Name"
                                value=name
                                on_input=Callback::new(move |ev: web_sys::Event| {
                                    name.set(event_target_value(&ev));
                                })
                            />
                        </FieldGroup>
                        <FieldGroup
                            title="Alternative text"
                            description="Read aloud when the file itself cannot be shown."
                        >
                            <TextField
                                aria_label="Alternative text"
                                value=alt_text
                                on_input=Callback::new(move |ev: web_sys::Event| {
                                    alt_text.set(event_target_value(&ev));
                                })
                            />
                        </FieldGroup>
                        <FieldGroup title="Title">
                            <TextField
                                aria_label="Title"
                                value=title
                                on_input=Callback::new(move |ev: web_sys::Event| {
                                    title.set(event_target_value(&ev));
                                })
                            />
                        </FieldGroup>
                        <FieldGroup title="Description">
                            <TextArea
                                aria_label="Description"
                                value=description
                                on_input=Callback::new(move |ev: web_sys::Event| {
                                    description.set(event_target_value(&ev));
                                })
                            />
                        </FieldGroup>
                    </Stack>

                    <Stack gap=LayoutGap::Sm layout_class="details-meta">
                        <DetailRow
                            label="Type"
                            value=meta_value(open_item, |item| {
                                display_or_dash(item.mime_type.as_deref())
                            })
                        />
                        <DetailRow
                            label="Size"
                            value=meta_value(open_item, |item| {
                                display_or_dash(item.size.map(readable_size).as_deref())
                            })
                        />
                        <DetailRow
                            label="Uploaded"
                            value=meta_value(open_item, |item| {
                                display_or_dash(item.upload_date.map(format_upload_date).as_deref())
                            })
                        />
                        <DetailRow
                            label="Uploaded by"
                            value=meta_value(open_item, |item| {
                                display_or_dash(item.uploaded_by.as_deref())
                            })
                        />
                        <DetailRow
                            label="Attached to"
                            value=meta_value(open_item, |item| {
                                display_or_dash(item.uploaded_to.as_deref())
                            })
                        />
                        <DetailRow
                            label="Dimensions"
                            value=meta_value(open_item, |item| {
                                display_or_dash(item.dimensions.as_deref())
                            })
                        />
                    </Stack>
                </Cluster>

                <Cluster justify=LayoutJustify::Between ui_slot="details-actions">
                    <Button
                        variant=ButtonVariant::Danger
                        leading_icon=IconName::Trash
                        on_click=Callback::new(move |_| {
                            if let Some(id) = overlay.get_untracked().details {
                                runtime.dispatch_action(LibraryAction::DeleteRequested {
                                    targets: vec![id],
                                });
                            }
                        })
                    >
                        "Delete"
                    </Button>
                    <Cluster gap=LayoutGap::Sm>
                        <Button
                            leading_icon=IconName::Copy
                            disabled=no_link
                            on_click=Callback::new(move |_| {
                                if let Some(id) = overlay.get_untracked().details {
                                    runtime.dispatch_action(LibraryAction::CopyLinkRequested { id });
                                }
                            })
                        >
                            "Copy link"
                        </Button>
                        <Button
                            leading_icon=IconName::External
                            disabled=no_link
                            on_click=Callback::new(move |_| {
                                if let Some(id) = overlay.get_untracked().details {
                                    runtime.dispatch_action(LibraryAction::OpenRequested { id });
                                }
                            })
                        >
                            "Open"
                        </Button>
                        <Button
                            variant=ButtonVariant::Primary
                            disabled=save_disabled
                            on_click=on_save
                        >
                            "Save changes"
                        </Button>
                    </Cluster>
                </Cluster>
            </Stack>
        </Modal>
    }
}

fn meta_value(
    open_item: Signal<Option<MediaItem>>,
    read: impl Fn(&MediaItem) -> String + 'static,
) -> Signal<String> {
    Signal::derive(move || {
        open_item
            .get()
            .map(|item| read(&item))
            .unwrap_or_else(|| display_or_dash(None))
    })
}

#[component]
fn DetailRow(label: &'static str, #[prop(into)] value: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div data-ui-slot="detail-row">
            <Text role=TextRole::Caption tone=TextTone::Secondary>{label}</Text>
            <Text role=TextRole::Body>{move || value.get()}</Text>
        </div>
    }
}
