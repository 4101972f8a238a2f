//! User-facing alert copy.
//!
//! Defaults are English; any field can be overridden from the `[strings]`
//! table of the config file.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Strings {
    pub yes: String,
    pub no: String,
    pub creating_moment: String,
    pub are_you_sure_you_want_to_create_this_moment: String,
    pub editing_moment: String,
    pub are_you_sure_you_want_to_edit_this_moment: String,
    pub deleting_moment: String,
    pub are_you_sure_you_want_to_delete_this_moment: String,
    pub no_title_entered_alert_title: String,
    pub no_title_entered_alert_description: String,
    pub no_title_entered_alert_confirm_button: String,
    pub no_category_selected_alert_title: String,
    pub no_category_selected_alert_description: String,
    pub no_category_selected_alert_confirm_button: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            yes: "Yes".to_string(),
            no: "No".to_string(),
            creating_moment: "Creating Moment".to_string(),
            are_you_sure_you_want_to_create_this_moment:
                "Are you sure you want to create this moment?".to_string(),
            editing_moment: "Editing Moment".to_string(),
            are_you_sure_you_want_to_edit_this_moment:
                "Are you sure you want to edit this moment?".to_string(),
            deleting_moment: "Deleting Moment".to_string(),
            are_you_sure_you_want_to_delete_this_moment:
                "Are you sure you want to delete this moment? This cannot be undone.".to_string(),
            no_title_entered_alert_title: "No Title Entered".to_string(),
            no_title_entered_alert_description:
                "Please enter a title for your moment before saving.".to_string(),
            no_title_entered_alert_confirm_button: "Got It".to_string(),
            no_category_selected_alert_title: "No Category Selected".to_string(),
            no_category_selected_alert_description:
                "Please select a category for your moment before saving.".to_string(),
            no_category_selected_alert_confirm_button: "Got It".to_string(),
        }
    }
}
