use super::*;

/// Filter, view-mode, and bulk-action controls across the top of the library.
#[component]
pub(super) fn LibraryToolbar() -> impl IntoView {
    let runtime = use_library_runtime();
    let state = runtime.state;

    let keyword = Signal::derive(move || state.get().filter.keyword);
    let category_value =
        Signal::derive(move || state.get().filter.category.pattern().to_string());
    let day_value = Signal::derive(move || {
        state
            .get()
            .filter
            .upload_day
            .map(format_upload_day)
            .unwrap_or_default()
    });
    let upload_days = Signal::derive(move || distinct_upload_days(&state.get().items));
    let selection_count = Signal::derive(move || state.get().selection.len());
    let view_mode = Signal::derive(move || state.get().view_mode);

    view! {
        <ToolBar aria_label="Media library controls" layout_class="library-toolbar">
            <Cluster gap=LayoutGap::Sm ui_slot="filters">
                <TextField
                    layout_class="library-search"
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
                        let category = MimeCategory::from_pattern(&event_target_value(&ev))
                            .unwrap_or_default();
                        runtime.dispatch_action(LibraryAction::CategorySelected { category });
                    })
                >
                    <For
                        each=move || MimeCategory::ALL.to_vec()
                        key=|category| category.pattern()
                        let:category
                    >
                        <option value=category.pattern()>{category.label()}</option>
                    </For>
                </SelectField>
                <SelectField
                    aria_label="Filter by upload date"
                    value=day_value
                    on_change=Callback::new(move |ev: web_sys::Event| {
                        let raw = event_target_value(&ev);
                        let day = NaiveDate::parse_from_str(&raw, "%Y-%m-%d").ok();
                        runtime.dispatch_action(LibraryAction::UploadDaySelected { day });
                    })
                >
                    <option value="">"All dates"</option>
                    <For each=move || upload_days.get() key=|day| *day let:day>
                        <option value=format_upload_day(day)>{format_upload_day(day)}</option>
                    </For>
                </SelectField>
            </Cluster>

            <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End ui_slot="actions">
                <Show when=move || { selection_count.get() > 0 } fallback=|| ()>
                    <Badge>
                        {move || format!("{} selected", selection_count.get())}
                    </Badge>
                    <Button
                        variant=ButtonVariant::Quiet
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(LibraryAction::SelectionCleared);
                        })
                    >
                        "Clear"
                    </Button>
                </Show>
                <Button
                    variant=ButtonVariant::Danger
                    leading_icon=IconName::Trash
                    disabled=Signal::derive(move || selection_count.get() == 0)
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(LibraryAction::SelectionDeleteRequested);
                    })
                >
                    "Delete selected"
                </Button>
                <SegmentedControl aria_label="Presentation mode">
                    <SegmentedControlOption
                        aria_label="List view"
                        leading_icon=IconName::List
                        selected=Signal::derive(move || view_mode.get() == ViewMode::List)
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(LibraryAction::ViewModeSet {
                                mode: ViewMode::List,
                            });
                        })
                    >
                        "List"
                    </SegmentedControlOption>
                    <SegmentedControlOption
                        aria_label="Grid view"
                        leading_icon=IconName::Grid
                        selected=Signal::derive(move || view_mode.get() == ViewMode::Grid)
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(LibraryAction::ViewModeSet {
                                mode: ViewMode::Grid,
                            });
                        })
                    >
                        "Grid"
                    </SegmentedControlOption>
                </SegmentedControl>
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Upload
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(LibraryAction::UploadModalSet { open: true });
                    })
                >
                    "Upload"
                </Button>
                <IconButton
                    icon=IconName::Refresh
                    aria_label="Refresh the listing"
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(LibraryAction::RefreshRequested);
                    })
                />
            </Cluster>
        </ToolBar>
    }
}
