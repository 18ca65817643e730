use crate::db::queries::load_stats;
use crate::db::store::StudentStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::formatting::format_grade;
use std::fs;

pub fn print_db_info(store: &StudentStore, db_path: &str, grade_decimals: usize) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let stats = load_stats(&store.pool().conn)?;

    //
    // 2) TOTAL STUDENTS
    //
    println!(
        "{}• Total students:{} {}{}{}",
        CYAN, RESET, GREEN, stats.total, RESET
    );
    println!(
        "{}• Graduated:{} {} / {}",
        CYAN, RESET, stats.graduated, stats.total
    );

    //
    // 3) MEAN GRADE
    //
    let mean = stats
        .mean_grade
        .map(|g| format_grade(Some(g), grade_decimals))
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    println!("{}• Mean grade:{} {}", CYAN, RESET, mean);

    //
    // 4) ID RANGE
    //
    let fmt_id = |id: Option<i64>| {
        id.map(|v| format!("#{}", v))
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Id range:{}", CYAN, RESET);
    println!("    from: {}", fmt_id(stats.first_id));
    println!("    to:   {}", fmt_id(stats.last_id));

    println!();
    Ok(())
}
