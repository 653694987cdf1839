use leptos::{spawn_local, SignalGetUntracked};
use media_client::{MediaUpdate, RequestOptions, UploadRequest};
use media_domain::{MediaId, MediaItem, MediaRecord};

use crate::{
    host::LibraryHostContext, model::UploadDraft, reducer::LibraryAction,
    runtime_context::LibraryRuntimeContext,
};

pub(super) fn fetch_media(host: LibraryHostContext, runtime: LibraryRuntimeContext, seq: u64) {
    spawn_local(async move {
        let media = host.media_service();
        let outcome = media
            .fetch_all(RequestOptions::default())
            .await
            .map(|records| {
                records
                    .unwrap_or_default()
                    .into_iter()
                    .map(MediaRecord::into_item)
                    .collect::<Vec<MediaItem>>()
            })
            .map_err(|err| err.to_string());
        runtime.dispatch_action(LibraryAction::FetchCompleted { seq, outcome });
    });
}

pub(super) fn upload_media(
    host: LibraryHostContext,
    runtime: LibraryRuntimeContext,
    draft: UploadDraft,
) {
    let uploaded_by = runtime.state.get_untracked().config.uploader_name;
    spawn_local(async move {
        let media = host.media_service();
        let request = UploadRequest {
            file_name: draft.file_name,
            bytes: draft.bytes,
            mime_type: draft.mime_type,
            uploaded_by,
            name: draft.name,
            title: draft.title,
            description: draft.description,
            alt_text: draft.alt_text,
        };
        let outcome = media
            .upload(request, RequestOptions::default())
            .await
            .map(|record| record.unwrap_or_default().into_item())
            .map_err(|err| err.to_string());
        runtime.dispatch_action(LibraryAction::UploadCompleted { outcome });
    });
}

pub(super) fn delete_media(
    host: LibraryHostContext,
    runtime: LibraryRuntimeContext,
    targets: Vec<MediaId>,
) {
    spawn_local(async move {
        let media = host.media_service();
        let outcome = media
            .delete_by_ids(targets.clone(), RequestOptions::default())
            .await
            .map(|_| ())
            .map_err(|err| err.to_string());
        runtime.dispatch_action(LibraryAction::DeleteCompleted { targets, outcome });
    });
}

pub(super) fn update_media(
    host: LibraryHostContext,
    runtime: LibraryRuntimeContext,
    update: MediaUpdate,
) {
    spawn_local(async move {
        let media = host.media_service();
        let outcome = media
            .update(update, RequestOptions::default())
            .await
            .map(|record| record.unwrap_or_default().into_item())
            .map_err(|err| err.to_string());
        runtime.dispatch_action(LibraryAction::UpdateCompleted { outcome });
    });
}
