//! Prompt-driven image generation with a download action.

use leptos::prelude::*;

use crate::state::image::ImageView;

#[component]
pub fn ImagePanel() -> impl IntoView {
    #[cfg(feature = "csr")]
    let config = StoredValue::new(expect_context::<crate::config::ClientConfig>());
    let image = expect_context::<RwSignal<ImageView>>();
    let prompt = RwSignal::new(String::new());

    let on_generate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = prompt.get_untracked();
        if text.trim().is_empty() || image.get_untracked().is_loading() {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let service = config.with_value(crate::services::image::ImageService::browser);
            leptos::task::spawn_local(async move {
                service.generate(&image, &text).await;
            });
        }
    };

    view! {
        <section class="image-panel">
            <h3>"Image Generation"</h3>
            <form class="image-panel__form" on:submit=on_generate>
                <input
                    class="image-panel__prompt"
                    type="text"
                    placeholder="Describe the image to generate..."
                    prop:value=move || prompt.get()
                    on:input=move |ev| prompt.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || image.get().is_loading() || prompt.get().trim().is_empty()
                >
                    "Generate"
                </button>
            </form>

            {move || match image.get() {
                ImageView::Idle => ().into_any(),
                ImageView::Loading { prompt } => {
                    view! {
                        <div class="image-panel__loading">
                            <span class="spinner"></span>
                            <p>"Generating image for: " <em>{prompt}</em></p>
                        </div>
                    }
                        .into_any()
                }
                ImageView::Failed { prompt, message } => {
                    view! {
                        <div class="image-panel__error">
                            <p>"Could not generate an image for: " <em>{prompt}</em></p>
                            <p>{message}</p>
                        </div>
                    }
                        .into_any()
                }
                ImageView::Ready(generated) => {
                    let src = generated.image_url.clone();
                    let alt = generated.prompt.clone();
                    let caption = generated.prompt.clone();
                    let on_download = move |_| {
                        #[cfg(feature = "csr")]
                        config.with_value(|c| crate::services::image::ImageService::browser(c).download(&generated));
                    };
                    view! {
                        <figure class="image-panel__result">
                            <img src=src alt=alt/>
                            <figcaption>{caption}</figcaption>
                            <button class="btn" on:click=on_download>
                                "Download"
                            </button>
                        </figure>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
