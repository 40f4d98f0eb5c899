//! One row in the bookmark list: delete control, favicon, and link.

use leptos::prelude::*;

use crate::state::bookmarks::{Bookmark, BookmarksState};

/// A single saved site with its delete control.
///
/// The delete action closes over the row's own key, so URLs containing
/// quotes or other markup-significant characters never travel through
/// generated markup.
#[component]
pub fn BookmarkItem(bookmark: Bookmark) -> impl IntoView {
    let bookmarks = expect_context::<RwSignal<BookmarksState>>();

    let Bookmark { name, url } = bookmark;
    let favicon_src = format!("https://s2.googleusercontent.com/s2/favicons?domain={url}");
    let delete_id = url.clone();
    let on_delete = move |_| bookmarks.update(|s| s.delete(&delete_id));

    view! {
        <div class="bookmark-item">
            <button class="bookmark-item__delete" title="Delete Bookmark" on:click=on_delete>
                "\u{d7}"
            </button>
            <div class="bookmark-item__name">
                <img class="bookmark-item__favicon" src=favicon_src alt="Favicon"/>
                <a href=url target="_blank">
                    {name}
                </a>
            </div>
        </div>
    }
}
