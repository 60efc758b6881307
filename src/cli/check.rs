use safetasks_budget::canvas::BlockKind;
use safetasks_budget::report;
use safetasks_budget::settings::{load_settings, shellexpand_path};

use super::read_spec;

pub fn run(input: &str) -> anyhow::Result<()> {
    let spec = read_spec(&shellexpand_path(input))?;
    let now = chrono::Local::now().naive_local();
    let doc = report::layout(&spec, &load_settings(), now)?;
    let id = spec.production.id.unwrap_or_default();

    println!("Budget:  {}", report::report_id(id));
    println!("File:    {}", report::file_name(id));
    println!("Items:   {}", doc.count_blocks(BlockKind::TableRow));
    println!("Pages:   {}", doc.page_count());
    Ok(())
}
