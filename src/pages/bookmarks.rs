//! Bookmarks page listing saved sites with add and delete actions.

use leptos::prelude::*;

use crate::components::bookmark_item::BookmarkItem;
use crate::components::bookmark_modal::AddBookmarkModal;
use crate::state::bookmarks::BookmarksState;
use crate::state::ui::UiState;

/// Bookmarks page — shows the saved list and an add-bookmark button.
#[component]
pub fn BookmarksPage() -> impl IntoView {
    let bookmarks = expect_context::<RwSignal<BookmarksState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Pull the persisted collection into the snapshot on mount.
    Effect::new(move || {
        bookmarks.update(BookmarksState::load);
    });

    let on_show = move |_| ui.update(|u| u.modal_open = true);
    let on_close = Callback::new(move |()| ui.update(|u| u.modal_open = false));

    view! {
        <div class="bookmarks-page">
            <header class="bookmarks-page__header">
                <h1>"Markboard"</h1>
                <button class="btn btn--primary" on:click=on_show>
                    "+ Add Bookmark"
                </button>
            </header>

            <div class="bookmarks-page__list">
                {move || {
                    bookmarks
                        .get()
                        .bookmarks
                        .into_values()
                        .map(|bookmark| view! { <BookmarkItem bookmark=bookmark/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || ui.get().modal_open>
                <AddBookmarkModal on_close=on_close/>
            </Show>
        </div>
    }
}
