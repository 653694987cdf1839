//! Reducer actions, side-effect intents, and transition logic for the media library runtime.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use media_client::{ApiRoutes, MediaUpdate};
use media_domain::{clamp_page, is_blank, MediaId, MediaItem, MimeCategory};
use thiserror::Error;

use crate::model::{
    same_id_set, ConfirmGate, LibraryState, OverlayState, ToastNote, ToastTone, UiPreferences,
    UploadDraft, ViewMode,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_library`] to mutate [`LibraryState`] and [`OverlayState`].
pub enum LibraryAction {
    /// Request a fresh listing from the server.
    RefreshRequested,
    /// A listing request finished (successfully or not).
    FetchCompleted {
        /// Sequence number assigned when the fetch was issued.
        seq: u64,
        /// Fetched items, or a display-ready error message.
        outcome: Result<Vec<MediaItem>, String>,
    },
    /// Replace the keyword filter.
    SearchChanged {
        /// New keyword (empty clears the filter).
        keyword: String,
    },
    /// Switch the MIME category filter.
    CategorySelected {
        /// Category to filter by.
        category: MimeCategory,
    },
    /// Switch the upload-day filter.
    UploadDaySelected {
        /// Calendar day to filter by, or `None` for all days.
        day: Option<NaiveDate>,
    },
    /// Switch between list and grid presentation.
    ViewModeSet {
        /// Presentation mode to apply.
        mode: ViewMode,
    },
    /// Navigate to a page of the filtered listing.
    PageRequested {
        /// 1-based page number (clamped to the valid range).
        page: usize,
    },
    /// Change how many rows a page holds.
    PageSizeSet {
        /// New page size (minimum 1).
        size: usize,
    },
    /// Toggle one item in or out of the selection.
    SelectionToggled {
        /// Item to toggle.
        id: MediaId,
    },
    /// Toggle selection of every item on the current page.
    PageSelectionToggled,
    /// Drop the entire selection.
    SelectionCleared,
    /// Replace the selection wholesale (picker reconciliation).
    SelectionReplaced {
        /// Ids that should be selected afterwards.
        ids: Vec<MediaId>,
    },
    /// Open the details panel for an item.
    DetailsOpened {
        /// Item to inspect.
        id: MediaId,
    },
    /// Close the details panel.
    DetailsClosed,
    /// Step the details panel to the neighboring item in the filtered listing.
    DetailsStepped {
        /// `true` steps forward, `false` steps back.
        forward: bool,
    },
    /// Submit edited metadata for an item.
    SaveRequested {
        /// Field values to persist.
        update: MediaUpdate,
    },
    /// A metadata update finished.
    UpdateCompleted {
        /// Updated item from the server, or a display-ready error message.
        outcome: Result<MediaItem, String>,
    },
    /// Ask to delete a specific set of items (opens the confirm gate).
    DeleteRequested {
        /// Items to delete.
        targets: Vec<MediaId>,
    },
    /// Ask to delete the current selection (opens the confirm gate).
    SelectionDeleteRequested,
    /// Update the confirmation phrase typed so far.
    ConfirmTyped {
        /// Text currently in the confirmation field.
        input: String,
    },
    /// Accept the confirm gate and start the delete.
    ConfirmAccepted,
    /// Dismiss the confirm gate without deleting.
    ConfirmDismissed,
    /// Open or close the upload dialog.
    UploadModalSet {
        /// Whether the dialog should be open.
        open: bool,
    },
    /// Submit a staged file for upload.
    UploadSubmitted {
        /// Staged file and initial metadata.
        draft: UploadDraft,
    },
    /// An upload finished.
    UploadCompleted {
        /// Created item from the server, or a display-ready error message.
        outcome: Result<MediaItem, String>,
    },
    /// A delete finished.
    DeleteCompleted {
        /// Items the delete targeted.
        targets: Vec<MediaId>,
        /// Success, or a display-ready error message.
        outcome: Result<(), String>,
    },
    /// Copy an item's public link to the clipboard.
    CopyLinkRequested {
        /// Item whose link to copy.
        id: MediaId,
    },
    /// Open an item's file in a new browser tab.
    OpenRequested {
        /// Item to open.
        id: MediaId,
    },
    /// The clipboard write succeeded.
    LinkCopied,
    /// A browser-shell operation failed (clipboard, popup).
    ShellFailed {
        /// Display-ready failure message.
        message: String,
    },
    /// Remove a toast notice.
    ToastDismissed {
        /// Toast to remove.
        id: u64,
    },
    /// Apply persisted UI preferences loaded at boot.
    PreferencesRestored {
        /// Preferences to apply.
        prefs: UiPreferences,
    },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_library`] for the host layer to execute.
pub enum LibraryEffect {
    /// Fetch the full listing from the server.
    FetchMedia {
        /// Sequence number to echo back in [`LibraryAction::FetchCompleted`].
        seq: u64,
    },
    /// Upload a staged file.
    UploadMedia {
        /// Staged file and initial metadata.
        draft: UploadDraft,
    },
    /// Delete items by id.
    DeleteMedia {
        /// Items to delete.
        targets: Vec<MediaId>,
    },
    /// Persist edited metadata.
    UpdateMedia {
        /// Field values to persist.
        update: MediaUpdate,
    },
    /// Write a URL to the clipboard.
    CopyLink {
        /// Absolute URL to copy.
        url: String,
    },
    /// Open a URL in a new browser tab.
    OpenUrl {
        /// Absolute URL to open.
        url: String,
    },
    /// Schedule automatic dismissal of a toast.
    ExpireToast {
        /// Toast to expire.
        id: u64,
    },
    /// Persist UI preferences.
    PersistPreferences {
        /// Preferences snapshot to store.
        prefs: UiPreferences,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors for invalid actions (for example, referencing a missing item).
pub enum ReducerError {
    /// The target media id was not found in the current items.
    #[error("media item not found")]
    MediaNotFound,
    /// The target item carries no download URL.
    #[error("media item has no download url")]
    MissingDownloadUrl,
    /// A selection-wide action was dispatched with nothing selected.
    #[error("selection is empty")]
    EmptySelection,
    /// A confirm-gate action was dispatched while the gate was closed.
    #[error("no delete confirmation in progress")]
    ConfirmNotOpen,
    /// The typed confirmation phrase does not match the required phrase.
    #[error("confirmation phrase does not match")]
    ConfirmNotArmed,
    /// A details-panel action was dispatched while the panel was closed.
    #[error("no details panel open")]
    DetailsNotOpen,
    /// An upload was submitted without a staged file.
    #[error("upload has no staged file")]
    EmptyUpload,
}

/// Applies a [`LibraryAction`] to the library state and collects resulting side effects.
///
/// This function is the authoritative state transition engine for browsing, filtering,
/// selection, and mutation workflows. Server and browser side effects never run here;
/// they are returned as [`LibraryEffect`] intents for the host layer.
///
/// # Errors
///
/// Returns a [`ReducerError`] when an action references an item that is not present,
/// operates on a closed overlay, or fails a validation gate.
pub fn reduce_library(
    state: &mut LibraryState,
    overlay: &mut OverlayState,
    action: LibraryAction,
) -> Result<Vec<LibraryEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        LibraryAction::RefreshRequested => {
            state.last_issued_fetch += 1;
            state.pending_fetches += 1;
            state.load_error = None;
            effects.push(LibraryEffect::FetchMedia {
                seq: state.last_issued_fetch,
            });
        }
        LibraryAction::FetchCompleted { seq, outcome } => {
            state.pending_fetches = state.pending_fetches.saturating_sub(1);
            // A response for an older request than one already applied is stale;
            // keep the newer listing.
            if seq > state.last_applied_fetch {
                state.last_applied_fetch = seq;
                match outcome {
                    Ok(items) => {
                        state.items = items;
                        state.load_error = None;
                        prune_selection(state);
                    }
                    Err(message) => {
                        state.items = Vec::new();
                        state.selection.clear();
                        state.load_error = Some(message);
                    }
                }
                clamp_current_page(state);
            }
        }
        LibraryAction::SearchChanged { keyword } => {
            state.filter.keyword = keyword;
            state.page.current = 1;
        }
        LibraryAction::CategorySelected { category } => {
            state.filter.category = category;
            state.page.current = 1;
        }
        LibraryAction::UploadDaySelected { day } => {
            state.filter.upload_day = day;
            state.page.current = 1;
        }
        LibraryAction::ViewModeSet { mode } => {
            state.view_mode = mode;
            effects.push(LibraryEffect::PersistPreferences {
                prefs: preferences_of(state),
            });
        }
        LibraryAction::PageRequested { page } => {
            state.page.current = clamp_page(page, state.total_pages());
        }
        LibraryAction::PageSizeSet { size } => {
            state.page.size = size.max(1);
            clamp_current_page(state);
            effects.push(LibraryEffect::PersistPreferences {
                prefs: preferences_of(state),
            });
        }
        LibraryAction::SelectionToggled { id } => {
            if state.item(id).is_none() {
                return Err(ReducerError::MediaNotFound);
            }
            if let Some(pos) = state.selection.iter().position(|sel| *sel == id) {
                state.selection.remove(pos);
            } else {
                state.selection.push(id);
            }
        }
        LibraryAction::PageSelectionToggled => {
            let page_ids: Vec<MediaId> =
                state.page_items().iter().filter_map(|item| item.id).collect();
            let all_selected =
                !page_ids.is_empty() && page_ids.iter().all(|id| state.selection.contains(id));
            if all_selected {
                // Keep ids selected on other pages; this action is page-scoped.
                state.selection.retain(|id| !page_ids.contains(id));
            } else {
                state.selection = page_ids;
            }
        }
        LibraryAction::SelectionCleared => {
            state.selection.clear();
        }
        LibraryAction::SelectionReplaced { ids } => {
            // Order-insensitive compare so reconciliation loops settle.
            if !same_id_set(&state.selection, &ids) {
                state.selection = ids;
            }
        }
        LibraryAction::DetailsOpened { id } => {
            if state.item(id).is_none() {
                return Err(ReducerError::MediaNotFound);
            }
            overlay.details = Some(id);
        }
        LibraryAction::DetailsClosed => {
            overlay.details = None;
        }
        LibraryAction::DetailsStepped { forward } => {
            let current = overlay.details.ok_or(ReducerError::DetailsNotOpen)?;
            let ids: Vec<MediaId> = state
                .filtered_items()
                .iter()
                .filter_map(|item| item.id)
                .collect();
            let pos = ids
                .iter()
                .position(|id| *id == current)
                .ok_or(ReducerError::MediaNotFound)?;
            let next = if forward {
                (pos + 1).min(ids.len() - 1)
            } else {
                pos.saturating_sub(1)
            };
            overlay.details = Some(ids[next]);
        }
        LibraryAction::SaveRequested { update } => {
            if state.item(update.id).is_none() {
                return Err(ReducerError::MediaNotFound);
            }
            state.pending_mutations += 1;
            effects.push(LibraryEffect::UpdateMedia { update });
        }
        LibraryAction::UpdateCompleted { outcome } => {
            state.pending_mutations = state.pending_mutations.saturating_sub(1);
            match outcome {
                Ok(updated) => {
                    if let Some(id) = updated.id {
                        if let Some(slot) =
                            state.items.iter_mut().find(|item| item.id == Some(id))
                        {
                            *slot = updated;
                        }
                    }
                    push_toast(
                        overlay,
                        ToastTone::Success,
                        "Changes saved".to_string(),
                        &mut effects,
                    );
                }
                Err(message) => push_toast(overlay, ToastTone::Error, message, &mut effects),
            }
        }
        LibraryAction::DeleteRequested { targets } => {
            if targets.is_empty() {
                return Err(ReducerError::EmptySelection);
            }
            overlay.confirm = ConfirmGate::Open {
                targets,
                typed: String::new(),
            };
        }
        LibraryAction::SelectionDeleteRequested => {
            if state.selection.is_empty() {
                return Err(ReducerError::EmptySelection);
            }
            overlay.confirm = ConfirmGate::Open {
                targets: state.selection.clone(),
                typed: String::new(),
            };
        }
        LibraryAction::ConfirmTyped { input } => match &mut overlay.confirm {
            ConfirmGate::Open { typed, .. } => *typed = input,
            ConfirmGate::Closed => return Err(ReducerError::ConfirmNotOpen),
        },
        LibraryAction::ConfirmAccepted => match &overlay.confirm {
            ConfirmGate::Open { targets, typed } => {
                // Case-sensitive, exact match; anything else keeps the gate shut.
                if *typed != state.config.confirm_phrase {
                    return Err(ReducerError::ConfirmNotArmed);
                }
                let targets = targets.clone();
                overlay.confirm = ConfirmGate::Closed;
                state.pending_mutations += 1;
                effects.push(LibraryEffect::DeleteMedia { targets });
            }
            ConfirmGate::Closed => return Err(ReducerError::ConfirmNotOpen),
        },
        LibraryAction::ConfirmDismissed => {
            overlay.confirm = ConfirmGate::Closed;
        }
        LibraryAction::UploadModalSet { open } => {
            overlay.upload_open = open;
        }
        LibraryAction::UploadSubmitted { mut draft } => {
            if draft.file_name.trim().is_empty() {
                return Err(ReducerError::EmptyUpload);
            }
            if draft.name.trim().is_empty() {
                draft.name = draft.file_name.clone();
            }
            state.pending_mutations += 1;
            effects.push(LibraryEffect::UploadMedia { draft });
        }
        LibraryAction::UploadCompleted { outcome } => {
            state.pending_mutations = state.pending_mutations.saturating_sub(1);
            match outcome {
                Ok(item) => {
                    state.items.push(item);
                    overlay.upload_open = false;
                    push_toast(
                        overlay,
                        ToastTone::Success,
                        "Upload complete".to_string(),
                        &mut effects,
                    );
                }
                Err(message) => push_toast(overlay, ToastTone::Error, message, &mut effects),
            }
        }
        LibraryAction::DeleteCompleted { targets, outcome } => {
            state.pending_mutations = state.pending_mutations.saturating_sub(1);
            match outcome {
                Ok(()) => {
                    state
                        .items
                        .retain(|item| item.id.map_or(true, |id| !targets.contains(&id)));
                    state.selection.retain(|id| !targets.contains(id));
                    if overlay.details.is_some_and(|open| targets.contains(&open)) {
                        overlay.details = None;
                    }
                    clamp_current_page(state);
                    let message = if targets.len() == 1 {
                        "Deleted 1 item".to_string()
                    } else {
                        format!("Deleted {} items", targets.len())
                    };
                    push_toast(overlay, ToastTone::Success, message, &mut effects);
                }
                Err(message) => push_toast(overlay, ToastTone::Error, message, &mut effects),
            }
        }
        LibraryAction::CopyLinkRequested { id } => {
            let url = resolve_item_url(state, id)?;
            effects.push(LibraryEffect::CopyLink { url });
        }
        LibraryAction::OpenRequested { id } => {
            let url = resolve_item_url(state, id)?;
            effects.push(LibraryEffect::OpenUrl { url });
        }
        LibraryAction::LinkCopied => {
            push_toast(
                overlay,
                ToastTone::Success,
                "Link copied to clipboard".to_string(),
                &mut effects,
            );
        }
        LibraryAction::ShellFailed { message } => {
            push_toast(overlay, ToastTone::Error, message, &mut effects);
        }
        LibraryAction::ToastDismissed { id } => {
            overlay.toasts.retain(|toast| toast.id != id);
        }
        LibraryAction::PreferencesRestored { prefs } => {
            state.view_mode = prefs.view_mode;
            state.page.size = prefs.page_size.max(1);
            clamp_current_page(state);
        }
    }
    Ok(effects)
}

fn preferences_of(state: &LibraryState) -> UiPreferences {
    UiPreferences {
        view_mode: state.view_mode,
        page_size: state.page.size,
    }
}

fn prune_selection(state: &mut LibraryState) {
    let known: BTreeSet<MediaId> = state.items.iter().filter_map(|item| item.id).collect();
    state.selection.retain(|id| known.contains(id));
}

fn clamp_current_page(state: &mut LibraryState) {
    state.page.current = clamp_page(state.page.current, state.total_pages());
}

fn push_toast(
    overlay: &mut OverlayState,
    tone: ToastTone,
    message: String,
    effects: &mut Vec<LibraryEffect>,
) {
    overlay.next_toast_id += 1;
    let id = overlay.next_toast_id;
    overlay.toasts.push(ToastNote { id, tone, message });
    effects.push(LibraryEffect::ExpireToast { id });
}

fn resolve_item_url(state: &LibraryState, id: MediaId) -> Result<String, ReducerError> {
    let item = state.item(id).ok_or(ReducerError::MediaNotFound)?;
    if is_blank(item.download_url.as_deref()) {
        return Err(ReducerError::MissingDownloadUrl);
    }
    ApiRoutes::new(&state.config.api_base_url)
        .resolve_download_url(item)
        .ok_or(ReducerError::MissingDownloadUrl)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{LibraryConfig, PageState};

    fn item(id: u64, name: &str, mime: &str, day: u32) -> MediaItem {
        MediaItem {
            id: Some(MediaId(id)),
            name: name.to_string(),
            mime_type: Some(mime.to_string()),
            size: Some(2048),
            upload_date: Some(Utc.with_ymd_and_hms(2024, 5, day, 9, 30, 0).unwrap()),
            download_url: Some(format!("/uploads/{name}")),
            ..MediaItem::default()
        }
    }

    fn catalog(count: u64) -> Vec<MediaItem> {
        (1..=count)
            .map(|n| item(n, &format!("file-{n:02}.png"), "image/png", 1))
            .collect()
    }

    fn seeded(items: Vec<MediaItem>) -> (LibraryState, OverlayState) {
        let mut state = LibraryState::default();
        let mut overlay = OverlayState::default();
        reduce_library(&mut state, &mut overlay, LibraryAction::RefreshRequested)
            .expect("refresh");
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::FetchCompleted {
                seq: 1,
                outcome: Ok(items),
            },
        )
        .expect("fetch");
        (state, overlay)
    }

    #[test]
    fn refresh_issues_a_sequenced_fetch_and_marks_loading() {
        let mut state = LibraryState::default();
        let mut overlay = OverlayState::default();

        let effects =
            reduce_library(&mut state, &mut overlay, LibraryAction::RefreshRequested)
                .expect("refresh");

        assert_eq!(effects, vec![LibraryEffect::FetchMedia { seq: 1 }]);
        assert_eq!(state.pending_fetches, 1);
        assert!(state.is_loading());

        let effects =
            reduce_library(&mut state, &mut overlay, LibraryAction::RefreshRequested)
                .expect("second refresh");
        assert_eq!(effects, vec![LibraryEffect::FetchMedia { seq: 2 }]);
        assert_eq!(state.pending_fetches, 2);
    }

    #[test]
    fn fetch_completion_replaces_items_and_clears_loading() {
        let (state, _) = seeded(catalog(3));

        assert_eq!(state.items.len(), 3);
        assert_eq!(state.pending_fetches, 0);
        assert!(!state.is_loading());
        assert_eq!(state.load_error, None);
    }

    #[test]
    fn stale_fetch_results_are_dropped() {
        let mut state = LibraryState::default();
        let mut overlay = OverlayState::default();
        reduce_library(&mut state, &mut overlay, LibraryAction::RefreshRequested)
            .expect("first refresh");
        reduce_library(&mut state, &mut overlay, LibraryAction::RefreshRequested)
            .expect("second refresh");

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::FetchCompleted {
                seq: 2,
                outcome: Ok(catalog(2)),
            },
        )
        .expect("newer fetch");
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::FetchCompleted {
                seq: 1,
                outcome: Ok(catalog(9)),
            },
        )
        .expect("stale fetch");

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.pending_fetches, 0);
        assert_eq!(state.last_applied_fetch, 2);
    }

    #[test]
    fn fetch_error_clears_items_and_records_message() {
        let (mut state, mut overlay) = seeded(catalog(3));
        reduce_library(&mut state, &mut overlay, LibraryAction::RefreshRequested)
            .expect("refresh");

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::FetchCompleted {
                seq: 2,
                outcome: Err("HTTP 500: boom".to_string()),
            },
        )
        .expect("failed fetch");

        assert_eq!(state.items, Vec::new());
        assert_eq!(state.selection, Vec::new());
        assert_eq!(state.load_error, Some("HTTP 500: boom".to_string()));
    }

    #[test]
    fn filters_compose_conjunctively() {
        let items = vec![
            item(1, "beach.png", "image/png", 1),
            item(2, "beach.mp4", "video/mp4", 1),
            item(3, "beach-far.png", "image/png", 2),
            item(4, "notes.txt", "text/plain", 1),
        ];
        let (mut state, mut overlay) = seeded(items);

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::CategorySelected {
                category: MimeCategory::Images,
            },
        )
        .expect("category");
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SearchChanged {
                keyword: "beach".to_string(),
            },
        )
        .expect("keyword");
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::UploadDaySelected {
                day: NaiveDate::from_ymd_opt(2024, 5, 1),
            },
        )
        .expect("day");

        let names: Vec<String> = state
            .filtered_items()
            .iter()
            .map(|item| item.name.clone())
            .collect();
        assert_eq!(names, vec!["beach.png".to_string()]);
    }

    #[test]
    fn filter_changes_reset_to_the_first_page() {
        let (mut state, mut overlay) = seeded(catalog(12));
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::PageRequested { page: 3 },
        )
        .expect("page");
        assert_eq!(state.page.current, 3);

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SearchChanged {
                keyword: "file".to_string(),
            },
        )
        .expect("keyword");

        assert_eq!(state.page.current, 1);
    }

    #[test]
    fn pagination_reports_ceiling_totals_and_slices() {
        let (state, _) = seeded(catalog(12));

        assert_eq!(state.page.size, 5);
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.page_items().len(), 5);
    }

    #[test]
    fn page_requests_clamp_to_the_valid_range() {
        let (mut state, mut overlay) = seeded(catalog(12));

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::PageRequested { page: 99 },
        )
        .expect("page forward");
        assert_eq!(state.page.current, 3);
        assert_eq!(state.page_items().len(), 2);

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::PageRequested { page: 0 },
        )
        .expect("page back");
        assert_eq!(state.page.current, 1);
    }

    #[test]
    fn selection_toggle_adds_then_removes() {
        let (mut state, mut overlay) = seeded(catalog(3));

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SelectionToggled { id: MediaId(2) },
        )
        .expect("select");
        assert_eq!(state.selection, vec![MediaId(2)]);

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SelectionToggled { id: MediaId(2) },
        )
        .expect("deselect");
        assert_eq!(state.selection, Vec::new());
    }

    #[test]
    fn selection_toggle_rejects_unknown_media() {
        let (mut state, mut overlay) = seeded(catalog(3));

        let err = reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SelectionToggled { id: MediaId(99) },
        )
        .expect_err("unknown id");

        assert_eq!(err, ReducerError::MediaNotFound);
    }

    #[test]
    fn page_selection_toggle_selects_exactly_the_visible_page() {
        let (mut state, mut overlay) = seeded(catalog(12));
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SelectionToggled { id: MediaId(1) },
        )
        .expect("preselect");
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::PageRequested { page: 3 },
        )
        .expect("page");

        reduce_library(&mut state, &mut overlay, LibraryAction::PageSelectionToggled)
            .expect("select page");

        assert_eq!(state.selection, vec![MediaId(11), MediaId(12)]);
    }

    #[test]
    fn page_selection_toggle_clears_only_page_members() {
        let (mut state, mut overlay) = seeded(catalog(12));
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SelectionReplaced {
                ids: vec![MediaId(1), MediaId(11), MediaId(12)],
            },
        )
        .expect("preselect");
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::PageRequested { page: 3 },
        )
        .expect("page");

        reduce_library(&mut state, &mut overlay, LibraryAction::PageSelectionToggled)
            .expect("clear page");

        assert_eq!(state.selection, vec![MediaId(1)]);
    }

    #[test]
    fn selection_replacement_short_circuits_on_equal_sets() {
        let (mut state, mut overlay) = seeded(catalog(3));
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SelectionReplaced {
                ids: vec![MediaId(1), MediaId(2)],
            },
        )
        .expect("replace");
        let before = state.clone();

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SelectionReplaced {
                ids: vec![MediaId(2), MediaId(1)],
            },
        )
        .expect("same set, reordered");

        assert_eq!(state, before);
    }

    #[test]
    fn details_open_requires_existing_media() {
        let (mut state, mut overlay) = seeded(catalog(3));

        let err = reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DetailsOpened { id: MediaId(44) },
        )
        .expect_err("missing item");
        assert_eq!(err, ReducerError::MediaNotFound);

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DetailsOpened { id: MediaId(2) },
        )
        .expect("open details");
        assert_eq!(overlay.details, Some(MediaId(2)));
    }

    #[test]
    fn details_stepping_clamps_at_list_bounds() {
        let (mut state, mut overlay) = seeded(catalog(3));
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DetailsOpened { id: MediaId(3) },
        )
        .expect("open");

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DetailsStepped { forward: true },
        )
        .expect("step past end");
        assert_eq!(overlay.details, Some(MediaId(3)));

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DetailsStepped { forward: false },
        )
        .expect("step back");
        assert_eq!(overlay.details, Some(MediaId(2)));
    }

    #[test]
    fn save_request_tracks_the_mutation_and_emits_an_update() {
        let (mut state, mut overlay) = seeded(catalog(3));

        let update = MediaUpdate {
            id: MediaId(2),
            name: "renamed.png".to_string(),
            alt_text: "renamed artwork".to_string(),
            title: String::new(),
            description: String::new(),
        };
        let effects = reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SaveRequested {
                update: update.clone(),
            },
        )
        .expect("save");

        assert_eq!(effects, vec![LibraryEffect::UpdateMedia { update }]);
        assert_eq!(state.pending_mutations, 1);
        assert!(state.is_mutating());
    }

    #[test]
    fn update_completion_replaces_the_item_in_place() {
        let (mut state, mut overlay) = seeded(catalog(3));
        state.pending_mutations = 1;

        let mut updated = item(2, "renamed.png", "image/png", 1);
        updated.title = Some("Renamed".to_string());
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::UpdateCompleted {
                outcome: Ok(updated.clone()),
            },
        )
        .expect("update done");

        assert_eq!(state.items[1], updated);
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.pending_mutations, 0);
        assert_eq!(overlay.toasts.len(), 1);
        assert_eq!(overlay.toasts[0].tone, ToastTone::Success);
    }

    #[test]
    fn update_failure_keeps_items_and_toasts_the_error() {
        let (mut state, mut overlay) = seeded(catalog(3));
        state.pending_mutations = 1;
        let before = state.items.clone();

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::UpdateCompleted {
                outcome: Err("HTTP 422: bad name".to_string()),
            },
        )
        .expect("update failed");

        assert_eq!(state.items, before);
        assert_eq!(overlay.toasts[0].tone, ToastTone::Error);
        assert_eq!(overlay.toasts[0].message, "HTTP 422: bad name");
    }

    #[test]
    fn delete_request_opens_the_confirm_gate() {
        let (mut state, mut overlay) = seeded(catalog(3));

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DeleteRequested {
                targets: vec![MediaId(1)],
            },
        )
        .expect("request delete");

        assert_eq!(
            overlay.confirm,
            ConfirmGate::Open {
                targets: vec![MediaId(1)],
                typed: String::new(),
            }
        );
    }

    #[test]
    fn selection_delete_requires_a_selection() {
        let (mut state, mut overlay) = seeded(catalog(3));

        let err =
            reduce_library(&mut state, &mut overlay, LibraryAction::SelectionDeleteRequested)
                .expect_err("nothing selected");

        assert_eq!(err, ReducerError::EmptySelection);
        assert_eq!(overlay.confirm, ConfirmGate::Closed);
    }

    #[test]
    fn confirm_accepts_only_the_exact_phrase() {
        let (mut state, mut overlay) = seeded(catalog(3));
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DeleteRequested {
                targets: vec![MediaId(2)],
            },
        )
        .expect("request delete");

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::ConfirmTyped {
                input: "delete".to_string(),
            },
        )
        .expect("type lowercase");
        let err = reduce_library(&mut state, &mut overlay, LibraryAction::ConfirmAccepted)
            .expect_err("case mismatch");
        assert_eq!(err, ReducerError::ConfirmNotArmed);
        assert!(overlay.confirm.is_open());

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::ConfirmTyped {
                input: "DELETE".to_string(),
            },
        )
        .expect("type phrase");
        let effects = reduce_library(&mut state, &mut overlay, LibraryAction::ConfirmAccepted)
            .expect("armed");

        assert_eq!(
            effects,
            vec![LibraryEffect::DeleteMedia {
                targets: vec![MediaId(2)],
            }]
        );
        assert_eq!(overlay.confirm, ConfirmGate::Closed);
        assert_eq!(state.pending_mutations, 1);
    }

    #[test]
    fn dismissing_the_confirm_gate_discards_typed_input() {
        let (mut state, mut overlay) = seeded(catalog(3));
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DeleteRequested {
                targets: vec![MediaId(1)],
            },
        )
        .expect("request delete");
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::ConfirmTyped {
                input: "DEL".to_string(),
            },
        )
        .expect("partial phrase");

        reduce_library(&mut state, &mut overlay, LibraryAction::ConfirmDismissed)
            .expect("dismiss");
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DeleteRequested {
                targets: vec![MediaId(1)],
            },
        )
        .expect("reopen");

        assert_eq!(
            overlay.confirm,
            ConfirmGate::Open {
                targets: vec![MediaId(1)],
                typed: String::new(),
            }
        );
    }

    #[test]
    fn delete_completion_prunes_items_selection_and_details() {
        let (mut state, mut overlay) = seeded(catalog(3));
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SelectionReplaced {
                ids: vec![MediaId(1), MediaId(2)],
            },
        )
        .expect("select");
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DetailsOpened { id: MediaId(1) },
        )
        .expect("open details");
        state.pending_mutations = 1;

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DeleteCompleted {
                targets: vec![MediaId(1), MediaId(2)],
                outcome: Ok(()),
            },
        )
        .expect("delete done");

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].id, Some(MediaId(3)));
        assert_eq!(state.selection, Vec::new());
        assert_eq!(overlay.details, None);
        assert_eq!(overlay.toasts[0].message, "Deleted 2 items");
    }

    #[test]
    fn delete_failure_leaves_the_library_untouched() {
        let (mut state, mut overlay) = seeded(catalog(3));
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::SelectionToggled { id: MediaId(1) },
        )
        .expect("select");
        state.pending_mutations = 1;
        let items_before = state.items.clone();

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DeleteCompleted {
                targets: vec![MediaId(1)],
                outcome: Err("HTTP 500: nope".to_string()),
            },
        )
        .expect("delete failed");

        assert_eq!(state.items, items_before);
        assert_eq!(state.selection, vec![MediaId(1)]);
        assert_eq!(overlay.toasts[0].tone, ToastTone::Error);
    }

    #[test]
    fn shrinking_the_item_set_clamps_the_current_page() {
        let (mut state, mut overlay) = seeded(catalog(11));
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::PageRequested { page: 3 },
        )
        .expect("last page");
        state.pending_mutations = 1;

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::DeleteCompleted {
                targets: vec![MediaId(11)],
                outcome: Ok(()),
            },
        )
        .expect("delete done");

        assert_eq!(state.total_pages(), 2);
        assert_eq!(state.page.current, 2);
    }

    #[test]
    fn upload_submission_falls_back_to_the_file_name() {
        let (mut state, mut overlay) = seeded(Vec::new());

        let draft = UploadDraft {
            file_name: "holiday.jpg".to_string(),
            bytes: vec![1, 2, 3],
            mime_type: Some("image/jpeg".to_string()),
            size: 3,
            ..UploadDraft::default()
        };
        let effects = reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::UploadSubmitted { draft },
        )
        .expect("submit");

        match &effects[0] {
            LibraryEffect::UploadMedia { draft } => {
                assert_eq!(draft.name, "holiday.jpg");
            }
            other => panic!("unexpected effect: {other:?}"),
        }
        assert_eq!(state.pending_mutations, 1);
    }

    #[test]
    fn upload_without_a_staged_file_is_rejected() {
        let (mut state, mut overlay) = seeded(Vec::new());

        let err = reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::UploadSubmitted {
                draft: UploadDraft::default(),
            },
        )
        .expect_err("no file");

        assert_eq!(err, ReducerError::EmptyUpload);
    }

    #[test]
    fn upload_completion_appends_and_closes_the_modal() {
        let (mut state, mut overlay) = seeded(catalog(2));
        overlay.upload_open = true;
        state.pending_mutations = 1;

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::UploadCompleted {
                outcome: Ok(item(3, "new.png", "image/png", 2)),
            },
        )
        .expect("upload done");

        assert_eq!(state.items.len(), 3);
        assert!(!overlay.upload_open);
        assert_eq!(overlay.toasts[0].message, "Upload complete");
    }

    #[test]
    fn upload_failure_keeps_the_modal_open() {
        let (mut state, mut overlay) = seeded(Vec::new());
        overlay.upload_open = true;
        state.pending_mutations = 1;

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::UploadCompleted {
                outcome: Err("HTTP 413: too large".to_string()),
            },
        )
        .expect("upload failed");

        assert!(overlay.upload_open);
        assert_eq!(overlay.toasts[0].tone, ToastTone::Error);
    }

    #[test]
    fn copy_link_resolves_relative_urls_against_the_api_base() {
        let items = vec![item(1, "beach.png", "image/png", 1)];
        let mut state = LibraryState::with_config(LibraryConfig {
            api_base_url: "https://media.example/api".to_string(),
            ..LibraryConfig::default()
        });
        state.items = items;
        let mut overlay = OverlayState::default();

        let effects = reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::CopyLinkRequested { id: MediaId(1) },
        )
        .expect("copy link");

        assert_eq!(
            effects,
            vec![LibraryEffect::CopyLink {
                url: "https://media.example/api/data/files/view/uploads/beach.png".to_string(),
            }]
        );
    }

    #[test]
    fn missing_download_url_is_an_error() {
        let mut bare = item(1, "beach.png", "image/png", 1);
        bare.download_url = None;
        let (mut state, mut overlay) = seeded(vec![bare]);

        let err = reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::OpenRequested { id: MediaId(1) },
        )
        .expect_err("no url");

        assert_eq!(err, ReducerError::MissingDownloadUrl);
    }

    #[test]
    fn view_mode_change_persists_preferences() {
        let (mut state, mut overlay) = seeded(Vec::new());

        let effects = reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::ViewModeSet {
                mode: ViewMode::Grid,
            },
        )
        .expect("view mode");

        assert_eq!(state.view_mode, ViewMode::Grid);
        assert_eq!(
            effects,
            vec![LibraryEffect::PersistPreferences {
                prefs: UiPreferences {
                    view_mode: ViewMode::Grid,
                    page_size: 5,
                },
            }]
        );
    }

    #[test]
    fn restored_preferences_apply_without_persisting() {
        let (mut state, mut overlay) = seeded(catalog(12));
        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::PageRequested { page: 3 },
        )
        .expect("page");

        let effects = reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::PreferencesRestored {
                prefs: UiPreferences {
                    view_mode: ViewMode::Grid,
                    page_size: 10,
                },
            },
        )
        .expect("restore");

        assert_eq!(effects, Vec::new());
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert_eq!(state.page, PageState { current: 2, size: 10 });
    }

    #[test]
    fn toasts_expire_and_dismiss_by_id() {
        let (mut state, mut overlay) = seeded(Vec::new());

        let effects = reduce_library(&mut state, &mut overlay, LibraryAction::LinkCopied)
            .expect("toast");
        assert_eq!(effects, vec![LibraryEffect::ExpireToast { id: 1 }]);
        assert_eq!(overlay.toasts.len(), 1);

        reduce_library(
            &mut state,
            &mut overlay,
            LibraryAction::ToastDismissed { id: 1 },
        )
        .expect("dismiss");
        assert_eq!(overlay.toasts, Vec::new());
    }
}
