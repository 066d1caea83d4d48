use leptos::prelude::*;
use crate::use_history::UseHistory;

const BUTTON_STYLE: &str = "background: #020202; color: #44dd66; border: 1px solid #33aa55; \
                            padding: 6px 12px; cursor: pointer; \
                            font-family: inherit; font-size: 12px;";

#[component]
pub fn HistoryToolbar<T>(history: UseHistory<T>) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let can_undo = history.can_undo();
    let can_redo = history.can_redo();
    let depth = history.depth();

    view! {
        <div
            style="display: flex; gap: 8px; align-items: center; \
                   font-family: 'JetBrains Mono', 'Fira Code', Consolas, monospace;"
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                history.handle_keydown(&ev);
            }
        >
            <button
                style=BUTTON_STYLE
                disabled=move || !can_undo.get()
                on:click=move |_| history.undo()
            >
                "Undo"
            </button>
            <button
                style=BUTTON_STYLE
                disabled=move || !can_redo.get()
                on:click=move |_| history.redo()
            >
                "Redo"
            </button>
            <button style=BUTTON_STYLE on:click=move |_| history.clear()>
                "Clear"
            </button>
            <span style="color: #66cc88; font-size: 11px;">
                {move || {
                    let (past, future) = depth.get();
                    format!("[{} back] [{} ahead]", past, future)
                }}
            </span>
        </div>
    }
}
