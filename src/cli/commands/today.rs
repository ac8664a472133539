use crate::errors::AppResult;
use crate::models::DateWindow;

pub fn handle() -> AppResult<()> {
    let window = DateWindow::today();
    println!("min: {}", window.min_attr());
    println!("max: {}", window.max_attr());
    Ok(())
}
