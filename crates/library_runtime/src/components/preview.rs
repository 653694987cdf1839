use super::*;

/// Inline preview for one asset, keyed off its MIME classification.
///
/// Relative download paths resolve against the configured API base so the
/// markup works no matter where the site itself is hosted.
#[component]
pub(super) fn MediaPreview(item: MediaItem) -> impl IntoView {
    let runtime = use_library_runtime();

    let kind = PreviewKind::from_mime(item.mime_type.as_deref());
    let url = ApiRoutes::new(&runtime.state.get_untracked().config.api_base_url)
        .resolve_download_url(&item);
    let alt = item
        .alt_text
        .clone()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| item.name.clone());

    match (kind, url) {
        (PreviewKind::Image, Some(url)) => view! {
            <img src=url alt=alt loading="lazy" data-ui-slot="preview-media" />
        }
        .into_view(),
        (PreviewKind::Video, Some(url)) => view! {
            <video src=url controls=true preload="metadata" data-ui-slot="preview-media"></video>
        }
        .into_view(),
        (PreviewKind::Pdf, Some(url)) => view! {
            <iframe src=url title=alt data-ui-slot="preview-media"></iframe>
        }
        .into_view(),
        (PreviewKind::Video, None) => fallback_glyph(IconName::Video),
        _ => fallback_glyph(IconName::File),
    }
}

fn fallback_glyph(icon: IconName) -> View {
    view! {
        <div data-ui-slot="preview-fallback">
            <Icon icon size=IconSize::Lg layout_class="preview-fallback-glyph" />
        </div>
    }
    .into_view()
}
