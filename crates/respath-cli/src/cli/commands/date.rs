//! `respath date` – render a content date.

use respath_core::dates;
use respath_core::ResolverConfig;

pub fn run_date(cfg: &ResolverConfig, raw: &str, include_time: bool) {
    println!(
        "{}",
        dates::format_content_date(raw, &cfg.date_format, include_time)
    );
}
