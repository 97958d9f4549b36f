use anyhow::Result;

use super::GlobalArgs;
use crate::render;

pub(crate) async fn run(global: &GlobalArgs, question: &str, json: bool) -> Result<()> {
    let mut session = global.session().await?;
    match session.ask(question).await {
        Ok(turn) if json => println!("{}", serde_json::to_string_pretty(&turn)?),
        Ok(turn) => print!("{}", render::assistant_turn(&turn)),
        Err(e) => {
            // main prints the error text.
            if let Some(sql) = e.sql() {
                eprintln!("Generated SQL:\n{sql}\n");
            }
            return Err(e.into());
        },
    }
    Ok(())
}
