//! Modal dialog for adding a bookmark.

use leptos::prelude::*;

use crate::state::bookmarks::BookmarksState;
use crate::util::notify;
use crate::validate;

/// Add-bookmark dialog: validates the (name, URL) pair and commits it.
///
/// A successful save resets the form and keeps the dialog open for the
/// next entry; validation failures surface as a blocking alert and change
/// nothing. Backdrop clicks close the dialog, clicks inside do not.
#[component]
pub fn AddBookmarkModal(on_close: Callback<()>) -> impl IntoView {
    let bookmarks = expect_context::<RwSignal<BookmarksState>>();

    let name = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let name_input = NodeRef::<leptos::html::Input>::new();

    let focus_name = move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = name_input.get() {
                let _ = input.focus();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name_input;
        }
    };

    // Focus the name field when the dialog opens.
    Effect::new(focus_name);

    let submit = Callback::new(move |()| {
        let name_value = name.get();
        let url_value = url.get();

        match validate::validate(&name_value, &url_value) {
            Ok(normalized) => {
                bookmarks.update(|s| s.add(normalized, name_value.clone()));
                name.set(String::new());
                url.set(String::new());
                focus_name();
            }
            Err(err) => notify::alert(&err.to_string()),
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>"Add Bookmark"</h2>
                    <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "\u{d7}"
                    </button>
                </header>
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <label class="dialog__label">
                        "Website Name"
                        <input
                            class="dialog__input"
                            type="text"
                            node_ref=name_input
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                name.set(event_target_value(&ev));
                            }
                        />
                    </label>
                    <label class="dialog__label">
                        "Website URL"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || url.get()
                            on:input=move |ev| {
                                url.set(event_target_value(&ev));
                            }
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
