//! Media library UI composition and interaction surfaces.

mod asset_picker;
mod confirm_modal;
mod details_modal;
mod media_grid;
mod media_list;
mod preview;
mod toast_tray;
mod toolbar;
mod uploader;

use chrono::NaiveDate;
use leptos::ev::KeyboardEvent;
use leptos::*;
use media_client::{ApiRoutes, MediaUpdate};
use media_domain::{
    display_or_dash, distinct_upload_days, format_upload_date, format_upload_day, is_blank,
    is_mime_match, readable_size, MediaId, MediaItem, MimeCategory, PreviewKind,
};

use self::{
    confirm_modal::DeleteConfirmModal,
    details_modal::MediaDetailsModal,
    media_grid::MediaTileGrid,
    media_list::MediaListTable,
    preview::MediaPreview,
    toast_tray::ToastTray,
    toolbar::LibraryToolbar,
    uploader::{UploadForm, UploadModal},
};

use crate::{
    model::{ConfirmGate, ToastTone, UploadDraft, ViewMode},
    reducer::LibraryAction,
};
use library_ui::{
    Badge, Button, ButtonSize, ButtonVariant, CheckboxField, Cluster, Elevation, EmptyState,
    FieldGroup, Grid, Icon, IconButton, IconName, IconSize, LayoutAlign, LayoutGap, LayoutJustify,
    LayoutPadding, Modal, Pager, Panel, PreviewFrame, SegmentedControl, SegmentedControlOption,
    SelectField, Spinner, Stack, Surface, SurfaceVariant, Tab, TabList, Text, TextArea, TextField,
    TextRole, TextTone, ToastCard, ToastShelf, ToolBar,
};

pub use self::asset_picker::{AssetPicker, PickerSelectionMode};
pub use crate::runtime_context::{use_library_runtime, LibraryProvider, LibraryRuntimeContext};

fn row_key(item: &MediaItem) -> (Option<MediaId>, String) {
    (item.id, item.name.clone())
}

#[component]
/// Full library surface: toolbar, listing, overlays, and toast notices.
pub fn MediaLibraryView() -> impl IntoView {
    let runtime = use_library_runtime();
    let state = runtime.state;
    let overlay = runtime.overlay;

    // Escape dismisses the topmost overlay only.
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() != "Escape" {
            return;
        }
        let panes = overlay.get_untracked();
        if panes.confirm.is_open() {
            runtime.dispatch_action(LibraryAction::ConfirmDismissed);
        } else if panes.details.is_some() {
            runtime.dispatch_action(LibraryAction::DetailsClosed);
        } else if panes.upload_open {
            runtime.dispatch_action(LibraryAction::UploadModalSet { open: false });
        }
    });
    on_cleanup(move || escape_listener.remove());

    let load_error = Signal::derive(move || state.get().load_error);
    let show_initial_spinner = Signal::derive(move || {
        let library = state.get();
        library.is_loading() && library.items.is_empty() && library.load_error.is_none()
    });
    let view_mode = Signal::derive(move || state.get().view_mode);

    view! {
        <Stack gap=LayoutGap::Md layout_class="media-library">
            <LibraryToolbar />

            <Show when=move || load_error.get().is_some() fallback=|| ()>
                <Panel elevation=Elevation::Raised aria_label="Listing failed">
                    <EmptyState icon=IconName::Warning>
                        <Text tone=TextTone::Danger>
                            {move || load_error.get().unwrap_or_default()}
                        </Text>
                        <Button
                            leading_icon=IconName::Refresh
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(LibraryAction::RefreshRequested);
                            })
                        >
                            "Retry"
                        </Button>
                    </EmptyState>
                </Panel>
            </Show>

            <Show when=move || load_error.get().is_none() fallback=|| ()>
                <Show
                    when=move || !show_initial_spinner.get()
                    fallback=|| view! { <Spinner aria_label="Loading media" /> }
                >
                    {move || match view_mode.get() {
                        ViewMode::List => view! { <MediaListTable /> }.into_view(),
                        ViewMode::Grid => view! { <MediaTileGrid /> }.into_view(),
                    }}
                </Show>
            </Show>

            <Show when=move || overlay.get().details.is_some() fallback=|| ()>
                <MediaDetailsModal />
            </Show>
            <Show when=move || overlay.get().confirm.is_open() fallback=|| ()>
                <DeleteConfirmModal />
            </Show>
            <Show when=move || overlay.get().upload_open fallback=|| ()>
                <UploadModal />
            </Show>

            <ToastTray />
        </Stack>
    }
}
