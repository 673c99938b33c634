// SPDX-License-Identifier: MPL-2.0
//! File-selection port definition.

use crate::domain::media::SelectedFile;

/// Port for the control the user picks files with.
///
/// The preview controller reads the current selection each time the control
/// reports a change; it never mutates the selection.
pub trait FileSelection {
    /// Returns the files currently selected, in the order the host reports them.
    ///
    /// An empty vector means the selection was cleared.
    fn selected_files(&self) -> Vec<SelectedFile>;
}

impl FileSelection for Vec<SelectedFile> {
    fn selected_files(&self) -> Vec<SelectedFile> {
        self.clone()
    }
}

impl FileSelection for Option<SelectedFile> {
    fn selected_files(&self) -> Vec<SelectedFile> {
        self.iter().cloned().collect()
    }
}
