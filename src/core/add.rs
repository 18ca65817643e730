use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::screen::StudentScreen;
use crate::errors::AppResult;
use crate::models::student::StudentForm;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Save `form` as a new student, then show the refreshed list.
    pub fn apply(screen: &mut StudentScreen, form: &StudentForm, cfg: &Config) -> AppResult<i64> {
        let id = screen.add(form)?;

        success(format!("Student #{} added.", id));
        ListLogic::print(screen.students(), cfg);

        Ok(id)
    }
}
