use comfy_table::{ContentArrangement, Table};

use crate::TableArgs;

pub fn run(args: &TableArgs, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(args)?;

    if json {
        let systems: serde_json::Map<String, serde_json::Value> = catalog
            .iter()
            .map(|system| {
                serde_json::to_value(system)
                    .map(|value| (system.id.clone(), value))
                    .map_err(|e| e.to_string())
            })
            .collect::<Result<_, _>>()?;
        let text = serde_json::to_string_pretty(&systems).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    if catalog.is_empty() {
        println!("  No game systems found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Custom dice"]);

    for system in catalog.iter() {
        let commands = system.table_names();
        let commands = if commands.is_empty() {
            "—".to_string()
        } else {
            commands
                .iter()
                .map(|cmd| format!("!{cmd}"))
                .collect::<Vec<_>>()
                .join(", ")
        };
        table.add_row(vec![system.id.as_str(), system.display.as_str(), commands.as_str()]);
    }

    println!("{table}");
    println!();
    println!("  {} systems", catalog.len());

    Ok(())
}
