use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::screen::StudentScreen;
use crate::errors::AppResult;
use crate::models::student::StudentForm;
use crate::ui::messages::{success, warning};

/// Fields given on the command line for `edit`. `None` keeps the current value.
#[derive(Debug, Default, Clone)]
pub struct EditPatch {
    pub full_name: Option<String>,
    pub student_id: Option<String>,
    pub average_grade: Option<String>,
    pub has_graduated: Option<bool>,
    pub photo_path: Option<String>,
}

impl EditPatch {
    /// Overlay the patch on a form prefilled from the stored record.
    pub fn apply_to(self, mut form: StudentForm) -> StudentForm {
        if let Some(v) = self.full_name {
            form.full_name = v;
        }
        if let Some(v) = self.student_id {
            form.student_id = v;
        }
        if let Some(v) = self.average_grade {
            form.average_grade = v;
        }
        if let Some(v) = self.has_graduated {
            form.has_graduated = v;
        }
        if let Some(v) = self.photo_path {
            form.photo_path = v;
        }
        form
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Replace student `id` with its current values overlaid by `patch`.
    ///
    /// A missing id is reported as a warning and leaves the store untouched.
    pub fn apply(
        screen: &mut StudentScreen,
        id: i64,
        patch: EditPatch,
        cfg: &Config,
    ) -> AppResult<bool> {
        let Some(original) = screen.find(id).cloned() else {
            warning(format!("Student #{} not found, nothing updated.", id));
            return Ok(false);
        };

        let form = patch.apply_to(StudentForm::from_record(&original));
        let changed = screen.save_edit(&original, form)?;

        if changed {
            success(format!("Student #{} updated.", id));
            ListLogic::print(screen.students(), cfg);
        } else {
            warning(format!("Student #{} not found, nothing updated.", id));
        }

        Ok(changed)
    }
}
