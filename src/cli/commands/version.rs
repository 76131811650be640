//! Version command implementation

use crate::cli::Output;
use anyhow::Result;

pub fn execute(output: &Output) -> Result<()> {
    let version = crate::VERSION;
    let name = crate::PKG_NAME;

    if output.is_quiet() {
        output.data(version);
        return Ok(());
    }

    output.header(&format!("{} v{}", name, version));
    output.key_value("Description:", env!("CARGO_PKG_DESCRIPTION"), false);
    output.key_value("Repository:", env!("CARGO_PKG_REPOSITORY"), false);

    output.category("Build Information");
    output.key_value("Target:", std::env::consts::ARCH, false);
    output.key_value(
        "Profile:",
        if cfg!(debug_assertions) { "debug" } else { "release" },
        true,
    );
    output.blank_line();

    Ok(())
}
