//! アップロードエリアコンポーネント（ドラッグ&ドロップ）

use chess_photo_common::ClientConfig;
use leptos::prelude::*;
use web_sys::DragEvent;

use crate::components::file_picker::FilePicker;
use crate::controller::acquire_file;
use crate::session_handle::SessionHandle;

#[component]
pub fn UploadArea(session: SessionHandle, config: StoredValue<ClientConfig>) -> impl IntoView {
    let (is_dragover, set_is_dragover) = signal(false);

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);

        // 複数ドロップされても先頭の1枚だけ
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            acquire_file(session, &config.get_value(), file);
        }
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() {
                    "drop-zone dragover"
                } else {
                    "drop-zone"
                }
            }
            on:dragenter=on_drag_enter
            on:dragover=on_drag_enter
            on:dragleave=on_drag_leave
            on:drop=on_drop
        >
            <div class="upload-icon">"♞"</div>
            <p>"Drop a photo of a chessboard here"</p>
            <p class="text-muted">"or"</p>
            <FilePicker session=session config=config label="Choose an image" />
        </div>
    }
}
