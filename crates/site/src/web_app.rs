use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use library_runtime::{LibraryConfig, LibraryHostContext, LibraryProvider, MediaLibraryView};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Media Library" />
        <Meta
            name="description"
            content="Browser-based media library for uploading, browsing, and curating assets."
        />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=LibraryPage />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn LibraryPage() -> impl IntoView {
    let config = browser_library_config();
    let host_services = LibraryHostContext::for_config(&config);

    view! {
        <LibraryProvider host_services config>
            <MediaLibraryView />
        </LibraryProvider>
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_library_config() -> LibraryConfig {
    let query = window().location().search().unwrap_or_default();
    apply_query_overrides(LibraryConfig::default(), &query)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_library_config() -> LibraryConfig {
    LibraryConfig::default()
}

/// Applies `?api=`, `?page-size=`, and `?uploader=` overrides to the default
/// runtime configuration.
///
/// Unknown keys are ignored so the page keeps working alongside unrelated
/// query parameters such as analytics tags.
#[cfg(any(test, target_arch = "wasm32"))]
fn apply_query_overrides(mut config: LibraryConfig, query: &str) -> LibraryConfig {
    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            "api" if !value.is_empty() => {
                config.api_base_url = value.to_string();
            }
            "page-size" => {
                if let Ok(size) = value.parse::<usize>() {
                    if size > 0 {
                        config.page_size = size;
                    }
                }
            }
            "uploader" if !value.is_empty() => {
                config.uploader_name = value.to_string();
            }
            _ => {}
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_known_query_overrides() {
        let config = apply_query_overrides(
            LibraryConfig::default(),
            "?api=https://media.example/api&page-size=20&uploader=kiosk",
        );
        assert_eq!(config.api_base_url, "https://media.example/api");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.uploader_name, "kiosk");
    }

    #[test]
    fn ignores_unknown_keys_and_unparseable_sizes() {
        let defaults = LibraryConfig::default();
        let config = apply_query_overrides(
            LibraryConfig::default(),
            "?utm_source=feed&page-size=zero&api=",
        );
        assert_eq!(config.api_base_url, defaults.api_base_url);
        assert_eq!(config.page_size, defaults.page_size);
        assert_eq!(config.uploader_name, defaults.uploader_name);
    }
}
