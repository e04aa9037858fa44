use comfy_table::{ContentArrangement, Table};
use th_engine::Preset;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Mode",
        "Token",
        "Gold",
        "Markdown",
        "Toughness",
        "Extras",
    ]);

    for preset in Preset::all() {
        let rules = preset.rules();
        let extras = if rules.sells_swords {
            "sword for sale".to_string()
        } else if !rules.starting_kit.is_empty() {
            let kit: Vec<&str> = rules.starting_kit.iter().map(|i| i.name()).collect();
            format!("starts with {}", kit.join(", "))
        } else {
            "—".to_string()
        };

        table.add_row(vec![
            preset.to_string(),
            preset.token().to_string(),
            rules.starting_gold.to_string(),
            rules.markdown.to_string(),
            rules.toughness.to_string(),
            extras,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} modes", Preset::all().len());

    Ok(())
}
