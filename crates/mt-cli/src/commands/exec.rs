use crate::TableArgs;
use crate::render;

pub async fn run(args: &TableArgs, input: &str, json: bool) -> Result<(), String> {
    let mut table = super::open_table(args)?;
    let ctx = super::context(args);

    let response = table
        .process(&ctx, input)
        .await
        .map_err(|e| e.to_string())?;

    if json {
        let text = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        println!("{}", render::response(&response));
    }
    Ok(())
}
