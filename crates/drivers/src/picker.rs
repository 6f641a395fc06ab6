use photo_sorter_application::{FolderChoice, FolderPicker, PromptResponse};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

/// Native folder dialog. A dismissed dialog counts as an empty answer; the
/// follow-up notice lets the user retry or give up.
#[derive(Debug, Default)]
pub struct RfdFolderPicker;

impl FolderPicker for RfdFolderPicker {
    fn pick_folder(&self) -> FolderChoice {
        match FileDialog::new()
            .set_title("Choose a folder of photos to sort")
            .pick_folder()
        {
            Some(path) => FolderChoice::Selected(path),
            None => FolderChoice::Empty,
        }
    }

    fn notify(&self, message: &str) -> PromptResponse {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title("photo-sorter")
            .set_description(message)
            .set_buttons(MessageButtons::OkCancel)
            .show();
        match result {
            MessageDialogResult::Ok | MessageDialogResult::Yes => PromptResponse::Retry,
            _ => PromptResponse::GiveUp,
        }
    }
}
