//! `generate` command: print embed code for the configured widget.

use std::path::Path;

use anyhow::Result;

use super::common::{copy_text, write_output};
use crate::config::StudioConfig;
use crate::embed::{EMPTY_STATE, generate};
use crate::log;
use crate::platform::share::COPIED_MESSAGE;

pub async fn generate_code(config: &StudioConfig, output: Option<&Path>, copy: bool) -> Result<()> {
    let code = generate(&config.widget, &config.embed);
    if code == EMPTY_STATE {
        log!("generate"; "no recognized platform selected");
    }

    write_output(output, &code, "generate")?;

    if copy {
        copy_text(&code, "embed code", COPIED_MESSAGE).await?;
    }
    Ok(())
}
