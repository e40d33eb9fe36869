use anyhow::Result;

fn main() -> Result<()> {
    lexsem_cli::main_entry()
}
