use leptos::{create_effect, logging, spawn_local, Callable, Callback};

use crate::{
    host::LibraryHostContext,
    model::UiPreferences,
    prefs::{load_pref_with, VIEW_PREFS_KEY},
    reducer::LibraryAction,
};

pub(super) fn install_boot(host: LibraryHostContext, dispatch: Callback<LibraryAction>) {
    create_effect(move |_| {
        let dispatch = dispatch;
        let host = host.clone();
        spawn_local(async move {
            let prefs = host.prefs_store();
            let restored: Result<Option<UiPreferences>, String> =
                load_pref_with(prefs.as_ref(), VIEW_PREFS_KEY).await;
            match restored {
                Ok(Some(prefs)) => dispatch.call(LibraryAction::PreferencesRestored { prefs }),
                Ok(None) => {}
                Err(err) => logging::warn!("view preference load failed: {err}"),
            }

            dispatch.call(LibraryAction::RefreshRequested);
        });
    });
}
