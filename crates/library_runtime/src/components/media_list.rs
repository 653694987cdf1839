use super::*;

/// Paginated table presentation of the filtered listing.
#[component]
pub(super) fn MediaListTable() -> impl IntoView {
    let runtime = use_library_runtime();
    let state = runtime.state;

    let page_items = Signal::derive(move || state.get().page_items());
    let page = Signal::derive(move || state.get().clamped_page());
    let total_pages = Signal::derive(move || state.get().total_pages());
    let page_size_value = Signal::derive(move || state.get().page.size.to_string());
    let page_fully_selected = Signal::derive(move || {
        let library = state.get();
        let ids: Vec<MediaId> = library
            .page_items()
            .iter()
            .filter_map(|item| item.id)
            .collect();
        !ids.is_empty() && ids.iter().all(|id| library.is_selected(*id))
    });

    view! {
        <Panel
            elevation=Elevation::Raised
            padding=LayoutPadding::None
            aria_label="Media listing"
            layout_class="media-list"
        >
            <table data-ui-slot="media-table">
                <thead>
                    <tr>
                        <th scope="col">
                            <CheckboxField
                                aria_label="Select every item on this page"
                                checked=page_fully_selected
                                on_change=Callback::new(move |_| {
                                    runtime.dispatch_action(LibraryAction::PageSelectionToggled);
                                })
                            />
                        </th>
                        <th scope="col">"Name"</th>
                        <th scope="col">"Type"</th>
                        <th scope="col">"Size"</th>
                        <th scope="col">"Uploaded"</th>
                        <th scope="col">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For each=move || page_items.get() key=row_key let:item>
                        <MediaListRow item />
                    </For>
                </tbody>
            </table>
            <Show when=move || page_items.get().is_empty() fallback=|| ()>
                <EmptyState icon=IconName::Image layout_class="media-list-empty">
                    <Text tone=TextTone::Secondary>
                        "No media matches the current filters."
                    </Text>
                </EmptyState>
            </Show>
            <Cluster justify=LayoutJustify::Between ui_slot="list-footer">
                <SelectField
                    aria_label="Rows per page"
                    value=page_size_value
                    on_change=Callback::new(move |ev: web_sys::Event| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            runtime.dispatch_action(LibraryAction::PageSizeSet { size });
                        }
                    })
                >
                    <option value="5">"5 per page"</option>
                    <option value="10">"10 per page"</option>
                    <option value="20">"20 per page"</option>
                    <option value="50">"50 per page"</option>
                </SelectField>
                <Pager
                    page=page
                    total_pages=total_pages
                    on_previous=Callback::new(move |_| {
                        let current = runtime.state.get_untracked().clamped_page();
                        runtime.dispatch_action(LibraryAction::PageRequested {
                            page: current.saturating_sub(1),
                        });
                    })
                    on_next=Callback::new(move |_| {
                        let current = runtime.state.get_untracked().clamped_page();
                        runtime.dispatch_action(LibraryAction::PageRequested { page: current + 1 });
                    })
                />
            </Cluster>
        </Panel>
    }
}

#[component]
fn MediaListRow(item: MediaItem) -> impl IntoView {
    let runtime = use_library_runtime();
    let state = runtime.state;

    let id = item.id;
    let selected = Signal::derive(move || id.is_some_and(|id| state.get().is_selected(id)));
    let name = item.name.clone();
    let type_label = display_or_dash(item.mime_type.as_deref());
    let size_label = display_or_dash(item.size.map(readable_size).as_deref());
    let date_label = display_or_dash(item.upload_date.map(format_upload_date).as_deref());

    let select_label = format!("Select {name}");
    let open_label = format!("Open {name} in a new tab");
    let copy_label = format!("Copy the link to {name}");
    let edit_label = format!("Edit {name}");
    let delete_label = format!("Delete {name}");

    view! {
        <tr
            data-ui-slot="media-row"
            data-ui-selected=move || if selected.get() { "true" } else { "false" }
        >
            <td>
                <CheckboxField
                    aria_label=select_label
                    checked=selected
                    disabled=id.is_none()
                    on_change=Callback::new(move |_| {
                        if let Some(id) = id {
                            runtime.dispatch_action(LibraryAction::SelectionToggled { id });
                        }
                    })
                />
            </td>
            <td data-ui-slot="cell-name">
                <Button
                    variant=ButtonVariant::Quiet
                    disabled=id.is_none()
                    on_click=Callback::new(move |_| {
                        if let Some(id) = id {
                            runtime.dispatch_action(LibraryAction::DetailsOpened { id });
                        }
                    })
                >
                    {name}
                </Button>
            </td>
            <td data-ui-slot="cell-type">{type_label}</td>
            <td data-ui-slot="cell-size">{size_label}</td>
            <td data-ui-slot="cell-date">{date_label}</td>
            <td data-ui-slot="cell-actions">
                <Cluster gap=LayoutGap::Sm>
                    <IconButton
                        icon=IconName::External
                        aria_label=open_label
                        disabled=id.is_none()
                        on_click=Callback::new(move |_| {
                            if let Some(id) = id {
                                runtime.dispatch_action(LibraryAction::OpenRequested { id });
                            }
                        })
                    />
                    <IconButton
                        icon=IconName::Copy
                        aria_label=copy_label
                        disabled=id.is_none()
                        on_click=Callback::new(move |_| {
                            if let Some(id) = id {
                                runtime.dispatch_action(LibraryAction::CopyLinkRequested { id });
                            }
                        })
                    />
                    <IconButton
                        icon=IconName::Pencil
                        aria_label=edit_label
                        disabled=id.is_none()
                        on_click=Callback::new(move |_| {
                            if let Some(id) = id {
                                runtime.dispatch_action(LibraryAction::DetailsOpened { id });
                            }
                        })
                    />
                    <IconButton
                        icon=IconName::Trash
                        aria_label=delete_label
                        disabled=id.is_none()
                        on_click=Callback::new(move |_| {
                            if let Some(id) = id {
                                runtime.dispatch_action(LibraryAction::DeleteRequested {
                                    targets: vec![id],
                                });
                            }
                        })
                    />
                </Cluster>
            </td>
        </tr>
    }
}
