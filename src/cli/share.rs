//! `share` command: what a click on one platform button does for a page.
//!
//! Without `--copy` the share URL or clipboard payload is printed. With
//! `--copy` the click runs through the widget's own handler, popups printing
//! their URL to stdout and copies going to the OS clipboard.

use std::path::Path;

use anyhow::{Context, Result, bail};

use super::common::{TerminalControl, read_input};
use crate::clipboard::{Osc52, SystemClipboard};
use crate::page::{HtmlPage, PageMetadata};
use crate::platform::{ShareTarget, build_share_target, lookup};
use crate::log;
use crate::widget::{ClickOutcome, Popups, Ports, handle_click};

/// Popups that print the URL instead of opening a window.
#[derive(Debug, Default)]
struct StdoutPopups;

impl Popups for StdoutPopups {
    type Window = ();

    fn open(&mut self, url: &str, _name: &str, _features: &str) -> Option<()> {
        println!("{url}");
        Some(())
    }

    fn focus(&mut self, _window: &()) {}
}

/// Parse a saved page and fix its location: `url`, else the page's own
/// `og:url` or canonical link.
fn load_page(html: &str, url: Option<&str>) -> Result<HtmlPage> {
    let page = HtmlPage::parse(html, "")?;
    let location = match url {
        Some(url) => url.to_string(),
        None => page
            .canonical_url()
            .context("page has no og:url or canonical link, pass --url")?,
    };
    Ok(page.with_location(location))
}

/// Share target for `platform` on the page in `html`.
fn resolve(html: &str, platform: &str, url: Option<&str>) -> Result<ShareTarget> {
    let page = load_page(html, url)?;
    Ok(build_share_target(platform, &PageMetadata::extract(&page))?)
}

pub async fn share_page(platform: &str, page: &Path, url: Option<&str>, copy: bool) -> Result<()> {
    let html = read_input(page)?;

    if !copy {
        match resolve(&html, platform, url)? {
            ShareTarget::Open(url) => println!("{url}"),
            ShareTarget::Copy { text, .. } => println!("{text}"),
        }
        return Ok(());
    }

    let head = load_page(&html, url)?;
    let label = lookup(platform).map_or(platform, |p| p.label);
    let mut control = TerminalControl::new(label);
    let mut popups = StdoutPopups;
    let ports = Ports {
        head: &head,
        popups: &mut popups,
        clipboard: &SystemClipboard,
        legacy: &Osc52,
    };

    match handle_click(platform, ports, &mut control).await {
        ClickOutcome::Opened(_) => Ok(()),
        ClickOutcome::Copied { via, .. } => {
            log!("share"; "copied via {:?} clipboard", via);
            Ok(())
        }
        ClickOutcome::Blocked(url) => bail!("could not open {url}"),
        ClickOutcome::CopyFailed(err) => bail!(err),
        ClickOutcome::Skipped(err) => bail!(err),
    }
}
