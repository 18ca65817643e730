//! rStudents main entrypoint.

use rstudents::run;
use rstudents::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
