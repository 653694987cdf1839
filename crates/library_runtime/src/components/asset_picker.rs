use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Selection behavior for [`AssetPicker`].
pub enum PickerSelectionMode {
    /// At most one item; picking another replaces the current choice.
    Single,
    /// Any number of items accumulate until confirmed.
    Multiple,
}

impl Default for PickerSelectionMode {
    fn default() -> Self {
        Self::Single
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PickerPane {
    Browse,
    Upload,
}

/// Embeddable asset chooser with browse and upload tabs.
///
/// The picker reads the shared library runtime for its catalog and filters
/// but tracks its chosen set locally, mirroring it into the shared selection
/// so other surfaces highlight the same items. Hosts receive the resolved
/// items through `on_confirm` and decide what to do with them.
#[component]
pub fn AssetPicker(
    /// Selection behavior; single-choice replaces, multiple accumulates.
    #[prop(default = PickerSelectionMode::Single)]
    mode: PickerSelectionMode,
    /// Restricts the browse tab to these categories when non-empty.
    #[prop(optional)]
    allowed_categories: Vec<MimeCategory>,
    /// Native accept pattern for the upload tab's file input.
    #[prop(optional, into)]
    accept: Option<String>,
    /// Items highlighted when the picker first opens.
    #[prop(optional)]
    initial_selection: Vec<MediaId>,
    /// Receives the chosen items when the selection is confirmed.
    on_confirm: Callback<Vec<MediaItem>>,
    /// Called when the picker is dismissed without confirming.
    #[prop(optional)]
    on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let runtime = use_library_runtime();
    let state = runtime.state;

    let allowed = store_value(allowed_categories);
    let chosen = create_rw_signal(initial_selection);
    let active = create_rw_signal(PickerPane::Browse);

    // Mirror the local choice into the shared selection; the reducer ignores
    // replacements that match the current set, so this settles immediately.
    create_effect(move |_| {
        let ids = chosen.get();
        runtime.dispatch_action(LibraryAction::SelectionReplaced { ids });
    });

    let keyword = Signal::derive(move || state.get().filter.keyword);
    let category_value =
        Signal::derive(move || state.get().filter.category.pattern().to_string());
    let category_options = allowed.with_value(|allowed| {
        if allowed.is_empty() {
            MimeCategory::ALL.to_vec()
        } else {
            let mut options = vec![MimeCategory::All];
            options.extend(allowed.iter().copied());
            options
        }
    });

    let visible = Signal::derive(move || {
        let library = state.get();
        allowed.with_value(|allowed| {
            library
                .filtered_items()
                .into_iter()
                .filter(|item| {
                    allowed.is_empty()
                        || allowed.iter().any(|category| {
                            is_mime_match(item.mime_type.as_deref(), category.pattern())
                        })
                })
                .collect::<Vec<_>>()
        })
    });

    let highlighted = Signal::derive(move || {
        let ids = chosen.get();
        let [only] = ids.as_slice() else {
            return None;
        };
        state.get().item(*only).cloned()
    });

    let toggle = move |id: MediaId| {
        chosen.update(|chosen| {
            if let Some(pos) = chosen.iter().position(|entry| *entry == id) {
                chosen.remove(pos);
                return;
            }
            match mode {
                PickerSelectionMode::Single => {
                    chosen.clear();
                    chosen.push(id);
                }
                PickerSelectionMode::Multiple => chosen.push(id),
            }
        });
    };

    let confirm = Callback::new(move |_| {
        let library = state.get_untracked();
        let items: Vec<MediaItem> = chosen
            .get_untracked()
            .iter()
            .filter_map(|id| library.item(*id).cloned())
            .collect();
        on_confirm.call(items);
    });

    view! {
        <Panel
            elevation=Elevation::Overlay
            aria_label="Asset picker"
            layout_class="asset-picker"
        >
            <Stack gap=LayoutGap::Md>
                <TabList aria_label="Asset source">
                    <Tab
                        id="picker-tab-browse"
                        controls="picker-panel-browse"
                        selected=Signal::derive(move || active.get() == PickerPane::Browse)
                        tabindex=Signal::derive(move || {
                            if active.get() == PickerPane::Browse { 0 } else { -1 }
                        })
                        on_click=Callback::new(move |_| active.set(PickerPane::Browse))
                    >
                        "Browse"
                    </Tab>
                    <Tab
                        id="picker-tab-upload"
                        controls="picker-panel-upload"
                        selected=Signal::derive(move || active.get() == PickerPane::Upload)
                        tabindex=Signal::derive(move || {
                            if active.get() == PickerPane::Upload { 0 } else { -1 }
                        })
                        on_click=Callback::new(move |_| active.set(PickerPane::Upload))
                    >
                        "Upload"
                    </Tab>
                </TabList>

                <div
                    role="tabpanel"
                    id="picker-panel-browse"
                    aria-labelledby="picker-tab-browse"
                    data-ui-slot="picker-panel"
                    hidden=move || active.get() != PickerPane::Browse
                >
                    <Stack gap=LayoutGap::Md>
                        <Cluster gap=LayoutGap::Sm>
                            <TextField
                                layout_class="picker-search"
                                placeholder="Search by name"
                                aria_label="Search by name"
                                input_type="search"
                                value=keyword
                                on_input=Callback::new(move |ev: web_sys::Event| {
                                    runtime.dispatch_action(LibraryAction::SearchChanged {
                                        keyword: event_target_value(&ev),
                                    });
                                })
                            />
                            <SelectField
                                aria_label="Filter by file type"
                                value=category_value
                                on_change=Callback::new(move |ev: web_sys::Event| {
                                    let category =
                                        MimeCategory::from_pattern(&event_target_value(&ev))
                                            .unwrap_or_default();
                                    runtime
                                        .dispatch_action(LibraryAction::CategorySelected {
                                            category,
                                        });
                                })
                            >
                                <For
                                    each=move || category_options.clone()
                                    key=|category| category.pattern()
                                    let:category
                                >
                                    <option value=category.pattern()>{category.label()}</option>
                                </For>
                            </SelectField>
                        </Cluster>

                        <Show when=move || visible.get().is_empty() fallback=|| ()>
                            <EmptyState icon=IconName::Search layout_class="picker-empty">
                                <Text tone=TextTone::Secondary>
                                    "Nothing here matches the picker filters."
                                </Text>
                            </EmptyState>
                        </Show>

                        <Grid gap=LayoutGap::Sm layout_class="picker-grid">
                            <For each=move || visible.get() key=row_key let:item>
                                {
                                    let id = item.id;
                                    let selected = Signal::derive(move || {
                                        id.is_some_and(|id| {
                                            chosen.with(|chosen| chosen.contains(&id))
                                        })
                                    });
                                    let name = item.name.clone();
                                    let pick_label = format!("Pick {name}");
                                    let preview_item = item.clone();
                                    view! {
                                        <PreviewFrame
                                            layout_class="picker-tile"
                                            selected=selected
                                        >
                                            <div
                                                role="button"
                                                tabindex="0"
                                                aria-label=pick_label
                                                data-ui-slot="tile-body"
                                                on:click=move |_| {
                                                    if let Some(id) = id {
                                                        toggle(id);
                                                    }
                                                }
                                                on:keydown=move |ev: KeyboardEvent| {
                                                    if ev.key() == "Enter" || ev.key() == " " {
                                                        ev.prevent_default();
                                                        if let Some(id) = id {
                                                            toggle(id);
                                                        }
                                                    }
                                                }
                                            >
                                                <MediaPreview item=preview_item />
                                                <Text
                                                    role=TextRole::Label
                                                    layout_class="picker-tile-name"
                                                >
                                                    {name}
                                                </Text>
                                                <Show when=move || selected.get() fallback=|| ()>
                                                    <Badge layout_class="picker-check">
                                                        <Icon
                                                            icon=IconName::Check
                                                            size=IconSize::Sm
                                                        />
                                                    </Badge>
                                                </Show>
                                            </div>
                                        </PreviewFrame>
                                    }
                                }
                            </For>
                        </Grid>

                        <Show when=move || highlighted.get().is_some() fallback=|| ()>
                            <Surface
                                variant=SurfaceVariant::Muted
                                role="note"
                                aria_label="Selected asset"
                                ui_slot="picker-highlight"
                            >
                                <Text role=TextRole::Label>
                                    {move || {
                                        highlighted.get().map(|item| item.name).unwrap_or_default()
                                    }}
                                </Text>
                                <Text tone=TextTone::Secondary>
                                    {move || {
                                        highlighted
                                            .get()
                                            .map(|item| {
                                                let kind =
                                                    display_or_dash(item.mime_type.as_deref());
                                                let size = display_or_dash(
                                                    item.size.map(readable_size).as_deref(),
                                                );
                                                format!("{kind}, {size}")
                                            })
                                            .unwrap_or_default()
                                    }}
                                </Text>
                            </Surface>
                        </Show>
                    </Stack>
                </div>

                <div
                    role="tabpanel"
                    id="picker-panel-upload"
                    aria-labelledby="picker-tab-upload"
                    data-ui-slot="picker-panel"
                    hidden=move || active.get() != PickerPane::Upload
                >
                    <UploadForm accept=accept />
                </div>

                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End ui_slot="picker-actions">
                    <Show when=move || on_cancel.is_some() fallback=|| ()>
                        <Button
                            variant=ButtonVariant::Quiet
                            on_click=Callback::new(move |_| {
                                if let Some(cb) = on_cancel.as_ref() {
                                    cb.call(());
                                }
                            })
                        >
                            "Cancel"
                        </Button>
                    </Show>
                    <Button
                        variant=ButtonVariant::Primary
                        leading_icon=IconName::Check
                        disabled=Signal::derive(move || chosen.with(|chosen| chosen.is_empty()))
                        on_click=confirm
                    >
                        "Use selection"
                    </Button>
                </Cluster>
            </Stack>
        </Panel>
    }
}
