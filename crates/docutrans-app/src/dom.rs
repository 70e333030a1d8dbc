//! Small helpers over the raw browser surface.

use web_sys::{File, FileList};

/// Blocking alert, the page's only user-facing error channel.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Materializes a live `FileList` into a vector, in selection order.
pub fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}
