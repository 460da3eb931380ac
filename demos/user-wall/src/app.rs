use leptos::{either::EitherOf3, ev, prelude::*};
use leptos_paged::{PagedLoader, ScrollMetrics};

use crate::{api, cards::UserCard};

/// The app shell: owns the loader, arms the scroll listener and renders the
/// card list.
#[component]
pub fn App() -> impl IntoView {
    let loader = PagedLoader::new(api::PAGE_SIZE, api::fetch_users);
    let records = loader.records();
    let fetching = loader.fetching();

    // False until the initial load settles (success or failure), so the
    // full-page "Loading..." only ever shows once.
    let booted = RwSignal::new(false);

    // Startup trigger: exactly one initial load.
    leptos::task::spawn_local({
        let loader = loader.clone();
        async move {
            loader.load_next().await;
            booted.set(true);
        }
    });

    let scroll_handle = window_event_listener(ev::scroll, {
        let loader = loader.clone();
        move |_| {
            let at_bottom = ScrollMetrics::capture().is_some_and(|metrics| metrics.at_bottom());
            if at_bottom && !loader.fetching().get_untracked() {
                tracing::debug!("scroll reached document bottom, requesting next page");
                let loader = loader.clone();
                leptos::task::spawn_local(async move {
                    loader.load_next().await;
                });
            }
        }
    });
    // Detach before the owning state container is torn down.
    on_cleanup(move || scroll_handle.remove());

    view! {
        <main class="user-wall">
            <header>
                <h1>"User directory"</h1>
            </header>
            {move || {
                if !booted.get() {
                    EitherOf3::A(view! { <p class="status">"Loading..."</p> })
                } else if records.with(|records| records.is_empty()) {
                    EitherOf3::B(view! { <p class="status">"No users found"</p> })
                } else {
                    EitherOf3::C(view! {
                        <ul class="cards">
                            <For
                                each=move || records.get()
                                key=|record| record.email.clone()
                                children=move |record| {
                                    view! {
                                        <li>
                                            <UserCard record=record />
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    })
                }
            }}
            <Show when=move || booted.get() && fetching.get()>
                <p class="status">"Loading more..."</p>
            </Show>
        </main>
    }
}
