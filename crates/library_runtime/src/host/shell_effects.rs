use leptos::{logging, spawn_local};

use crate::{
    host::LibraryHostContext,
    model::UiPreferences,
    prefs::{save_pref_with, VIEW_PREFS_KEY},
    reducer::LibraryAction,
    runtime_context::LibraryRuntimeContext,
};

pub(super) fn copy_link(host: LibraryHostContext, runtime: LibraryRuntimeContext, url: String) {
    spawn_local(async move {
        let shell = host.shell_gateway();
        match shell.copy_text(&url).await {
            Ok(()) => runtime.dispatch_action(LibraryAction::LinkCopied),
            Err(err) => {
                logging::warn!("clipboard copy failed for `{url}`: {err}");
                runtime.dispatch_action(LibraryAction::ShellFailed {
                    message: "Could not copy the link".to_string(),
                });
            }
        }
    });
}

pub(super) fn open_url(host: LibraryHostContext, runtime: LibraryRuntimeContext, url: String) {
    spawn_local(async move {
        let shell = host.shell_gateway();
        if let Err(err) = shell.open_url(&url).await {
            logging::warn!("open in new tab failed for `{url}`: {err}");
            runtime.dispatch_action(LibraryAction::ShellFailed {
                message: "Could not open the file in a new tab".to_string(),
            });
        }
    });
}

pub(super) fn persist_preferences(host: LibraryHostContext, prefs: UiPreferences) {
    spawn_local(async move {
        let store = host.prefs_store();
        if let Err(err) = save_pref_with(store.as_ref(), VIEW_PREFS_KEY, &prefs).await {
            logging::warn!("view preference save failed: {err}");
        }
    });
}
