use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use model::ExportFormat;
use wasm_bindgen_futures::spawn_local;

use crate::shared::clipboard;
use crate::shared::download;
use crate::shared::icons::icon;
use crate::state::use_visualizer;

fn export_filename(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Css => "element.css",
        ExportFormat::Scss => "element.scss",
        ExportFormat::Tailwind => "element.html",
    }
}

fn export_mime(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Css | ExportFormat::Scss => "text/css;charset=utf-8;",
        ExportFormat::Tailwind => "text/html;charset=utf-8;",
    }
}

/// Generated-code panel: format switcher, copy and download actions, and
/// the code itself.
#[component]
pub fn CodePanel() -> impl IntoView {
    let ctx = use_visualizer();
    let (copied, set_copied) = signal(false);

    let code = move || ctx.generated_code();

    let handle_copy = move |_| {
        clipboard::copy_text(&code(), move || {
            set_copied.set(true);
            spawn_local(async move {
                TimeoutFuture::new(2_000).await;
                set_copied.set(false);
            });
        });
    };

    let handle_download = move |_| {
        let format = ctx.export_format();
        if let Err(err) = download::download_text(
            &code(),
            export_filename(format),
            export_mime(format),
        ) {
            log::error!("Download failed: {err}");
        }
    };

    view! {
        <section class="code-panel">
            <div class="code-panel__header">
                <span class="code-panel__title">{icon("code")} " Generated Code"</span>
                <div class="code-panel__formats">
                    {ExportFormat::all()
                        .into_iter()
                        .map(|format| {
                            let is_active = move || ctx.export_format() == format;
                            view! {
                                <button
                                    class="code-panel__format-btn"
                                    class:is-active=is_active
                                    on:click=move |_| ctx.set_export_format(format)
                                >
                                    {format.display_name()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="code-panel__actions">
                    <button class="code-panel__icon-btn" title="Copy code" on:click=handle_copy>
                        {move || if copied.get() { icon("check") } else { icon("copy") }}
                    </button>
                    <button
                        class="code-panel__icon-btn"
                        title="Download file"
                        on:click=handle_download
                    >
                        {icon("download")}
                    </button>
                </div>
            </div>
            <pre class="code-panel__code">
                <code>{code}</code>
            </pre>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_follows_format() {
        assert_eq!(export_filename(ExportFormat::Css), "element.css");
        assert_eq!(export_filename(ExportFormat::Scss), "element.scss");
        assert_eq!(export_filename(ExportFormat::Tailwind), "element.html");
    }

    #[test]
    fn test_export_mime_matches_content() {
        assert!(export_mime(ExportFormat::Css).starts_with("text/css"));
        assert!(export_mime(ExportFormat::Scss).starts_with("text/css"));
        assert!(export_mime(ExportFormat::Tailwind).starts_with("text/html"));
    }
}
