use anyhow::Result;

use super::GlobalArgs;

pub(crate) async fn run(global: &GlobalArgs, request: Option<&str>) -> Result<()> {
    let session = global.session().await?;
    let text = session.insights(request).await?;
    println!("{text}");
    Ok(())
}
