use std::io::IsTerminal;

use cdls::resolve::resolve_target;
use cdls::styling::println;

pub fn handle_resolve(path: Option<&str>) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    // Never block on an interactive terminal
    let piped = (!stdin.is_terminal()).then(|| stdin.lock());

    let target = resolve_target(path, piped)?;
    println!("{}", target.display());
    Ok(())
}
