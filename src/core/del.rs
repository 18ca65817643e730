use crate::config::Config;
use crate::core::list::ListLogic;
use crate::core::screen::StudentScreen;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete student `id`. Asks for confirmation unless `assume_yes` or the
    /// configuration disables it.
    pub fn apply(
        screen: &mut StudentScreen,
        id: i64,
        assume_yes: bool,
        cfg: &Config,
    ) -> AppResult<bool> {
        let Some(student) = screen.find(id).cloned() else {
            warning(format!("Student #{} not found, nothing deleted.", id));
            return Ok(false);
        };

        if cfg.confirm_delete && !assume_yes {
            let name = student.full_name.as_deref().unwrap_or("");
            let prompt = format!(
                "Delete student #{} '{}'? This action is irreversible.",
                id, name
            );
            if !confirm(prompt) {
                info("Operation cancelled.");
                return Ok(false);
            }
        }

        let removed = screen.remove(&student)?;

        if removed {
            success(format!("Student #{} has been deleted.", id));
            ListLogic::print(screen.students(), cfg);
        } else {
            warning(format!("Student #{} not found, nothing deleted.", id));
        }

        Ok(removed)
    }
}
