use anyhow::Result;

use super::GlobalArgs;
use crate::render;

pub(crate) fn run(global: &GlobalArgs, sql: &str, json: bool) -> Result<()> {
    let result = global.database().execute(sql)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.is_empty() {
        println!("{}", sqlchat_core::constants::NO_RESULTS_MESSAGE);
    } else {
        print!("{}", render::table(&result));
        println!("({} rows)", result.row_count());
    }
    Ok(())
}
