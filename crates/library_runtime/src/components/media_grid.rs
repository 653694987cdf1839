use super::*;

/// Tile presentation of the filtered listing; tiles toggle selection on click.
#[component]
pub(super) fn MediaTileGrid() -> impl IntoView {
    let runtime = use_library_runtime();
    let state = runtime.state;

    let filtered = Signal::derive(move || state.get().filtered_items());

    view! {
        <Panel
            elevation=Elevation::Raised
            aria_label="Media tiles"
            layout_class="media-grid-panel"
        >
            <Show when=move || filtered.get().is_empty() fallback=|| ()>
                <EmptyState icon=IconName::Image layout_class="media-grid-empty">
                    <Text tone=TextTone::Secondary>
                        "No media matches the current filters."
                    </Text>
                </EmptyState>
            </Show>
            <Grid gap=LayoutGap::Md layout_class="media-grid">
                <For each=move || filtered.get() key=row_key let:item>
                    <MediaTile item />
                </For>
            </Grid>
        </Panel>
    }
}

#[component]
fn MediaTile(item: MediaItem) -> impl IntoView {
    let runtime = use_library_runtime();
    let state = runtime.state;

    let id = item.id;
    let selected = Signal::derive(move || id.is_some_and(|id| state.get().is_selected(id)));
    let name = item.name.clone();
    let toggle_label = format!("Toggle selection of {name}");
    let edit_label = format!("Edit {name}");
    let delete_label = format!("Delete {name}");
    let preview_item = item.clone();

    let toggle = move || {
        if let Some(id) = id {
            runtime.dispatch_action(LibraryAction::SelectionToggled { id });
        }
    };

    view! {
        <PreviewFrame layout_class="media-tile" selected=selected>
            <div
                role="button"
                tabindex="0"
                aria-label=toggle_label
                data-ui-slot="tile-body"
                on:click=move |_| toggle()
                on:keydown=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" || ev.key() == " " {
                        ev.prevent_default();
                        toggle();
                    }
                }
            >
                <MediaPreview item=preview_item />
                <Text role=TextRole::Label layout_class="media-tile-name">{name}</Text>
            </div>
            <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End ui_slot="tile-actions">
                <IconButton
                    icon=IconName::Pencil
                    size=ButtonSize::Sm
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
                    size=ButtonSize::Sm
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
        </PreviewFrame>
    }
}
