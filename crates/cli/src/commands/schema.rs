use anyhow::Result;

use super::GlobalArgs;

pub(crate) fn run(global: &GlobalArgs, json: bool) -> Result<()> {
    let db = global.database();
    if json {
        let tables = db.list_tables()?;
        println!("{}", serde_json::to_string_pretty(&tables)?);
    } else {
        println!("{}", db.describe_schema()?);
    }
    Ok(())
}
