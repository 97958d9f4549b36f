use std::io::Write as _;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::GlobalArgs;
use crate::render;

const BANNER: &str = "Ask a question about your data. Commands: /history, /schema, /quit";

pub(crate) async fn run(global: &GlobalArgs) -> Result<()> {
    let mut session = global.session().await?;
    println!("{BANNER}\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let input = line.trim();
        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/history" => print!("{}", render::history(session.conversation())),
            "/schema" => {
                if session.schema().is_empty() {
                    println!("(no tables)\n");
                } else {
                    println!("{}\n", session.schema());
                }
            },
            question => match session.ask(question).await {
                Ok(turn) => println!("\n{}", render::assistant_turn(&turn)),
                Err(e) => println!("\n{}", render::error(&e)),
            },
        }
    }

    tracing::info!(turns = session.conversation().len(), "chat ended");
    Ok(())
}
