use super::*;

#[derive(Debug, Clone, PartialEq)]
struct StagedFile {
    file_name: String,
    mime_type: Option<String>,
    size: u64,
    bytes: Vec<u8>,
}

/// File picker plus metadata fields; embeddable outside the upload modal.
#[component]
pub(super) fn UploadForm(
    /// Native accept pattern forwarded to the file input, e.g. `image/*`.
    #[prop(optional_no_strip)]
    accept: Option<String>,
) -> impl IntoView {
    let runtime = use_library_runtime();
    let state = runtime.state;

    let staged = create_rw_signal(None::<StagedFile>);
    let name = create_rw_signal(String::new());
    let title = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let alt_text = create_rw_signal(String::new());
    let file_input = create_node_ref::<html::Input>();

    let staged_label = Signal::derive(move || {
        staged
            .get()
            .map(|file| format!("{} ({})", file.file_name, readable_size(file.size)))
            .unwrap_or_default()
    });
    let submit_disabled =
        Signal::derive(move || staged.get().is_none() || state.get().is_mutating());

    let on_submit = Callback::new(move |_| {
        let Some(file) = staged.get_untracked() else {
            return;
        };
        runtime.dispatch_action(LibraryAction::UploadSubmitted {
            draft: UploadDraft {
                file_name: file.file_name,
                bytes: file.bytes,
                mime_type: file.mime_type,
                size: file.size,
                name: name.get_untracked(),
                title: title.get_untracked(),
                description: description.get_untracked(),
                alt_text: alt_text.get_untracked(),
            },
        });
    });

    view! {
        <Stack gap=LayoutGap::Md layout_class="upload-form">
            <FieldGroup title="File">
                <input
                    type="file"
                    node_ref=file_input
                    accept=accept
                    aria-label="Choose a file to upload"
                    data-ui-slot="file-input"
                    on:change=move |_| stage_picked_file(file_input, staged, name)
                />
                <Show when=move || staged.get().is_some() fallback=|| ()>
                    <Text tone=TextTone::Secondary>{move || staged_label.get()}</Text>
                </Show>
            </FieldGroup>
            <FieldGroup title="Name" description="Defaults to the file name when left empty.">
                <TextField
                    aria_label="Name"
                    value=name
                    on_input=Callback::new(move |ev: web_sys::Event| {
                        name.set(event_target_value(&ev));
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
            <FieldGroup title="Alternative text">
                <TextField
                    aria_label="Alternative text"
                    value=alt_text
                    on_input=Callback::new(move |ev: web_sys::Event| {
                        alt_text.set(event_target_value(&ev));
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
            <Cluster justify=LayoutJustify::End>
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Upload
                    disabled=submit_disabled
                    on_click=on_submit
                >
                    "Upload file"
                </Button>
            </Cluster>
        </Stack>
    }
}

/// Reads the picked file into memory and stages it for submission.
///
/// Reading is async in the browser, so the staged slot fills once the bytes
/// arrive rather than on the change event itself.
#[cfg(target_arch = "wasm32")]
fn stage_picked_file(
    file_input: NodeRef<html::Input>,
    staged: RwSignal<Option<StagedFile>>,
    name: RwSignal<String>,
) {
    let Some(input) = file_input.get_untracked() else {
        return;
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        staged.set(None);
        return;
    };

    let file_name = file.name();
    let mime_type = {
        let raw = file.type_();
        if raw.is_empty() {
            None
        } else {
            Some(raw)
        }
    };
    let size = file.size() as u64;

    spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
            Ok(buffer) => {
                let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                if name.get_untracked().trim().is_empty() {
                    name.set(file_name.clone());
                }
                staged.set(Some(StagedFile {
                    file_name,
                    mime_type,
                    size,
                    bytes,
                }));
            }
            Err(err) => logging::warn!("reading the picked file failed: {err:?}"),
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn stage_picked_file(
    file_input: NodeRef<html::Input>,
    staged: RwSignal<Option<StagedFile>>,
    name: RwSignal<String>,
) {
    let _ = (file_input, staged, name);
}

/// Modal wrapper around [`UploadForm`] for the toolbar's upload flow.
#[component]
pub(super) fn UploadModal() -> impl IntoView {
    let runtime = use_library_runtime();

    view! {
        <Modal
            title="Upload media"
            layout_class="upload-modal"
            on_dismiss=Callback::new(move |_| {
                runtime.dispatch_action(LibraryAction::UploadModalSet { open: false });
            })
        >
            <UploadForm />
        </Modal>
    }
}
