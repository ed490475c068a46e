use anyhow::Context;

use cdls::shell::{Shell, ShellInit};
use cdls::styling::print;

pub fn handle_init(shell: Shell, function_name: &str) -> anyhow::Result<()> {
    let script = ShellInit::new(shell)
        .with_function_name(function_name)
        .generate()
        .with_context(|| format!("Failed to generate {shell} integration"))?;
    print!("{script}");
    Ok(())
}
