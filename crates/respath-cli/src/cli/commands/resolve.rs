//! `respath resolve` – resolve raw paths to resource URLs.

use anyhow::{Context, Result};
use respath_core::{Resolution, ResolverConfig, ResourcePathResolver, Resolver, Variant};
use std::fmt::Write;

/// How resolutions are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One URL per line.
    Plain,
    /// URL, shape and warning, tab separated.
    Explain,
    Json,
}

impl OutputFormat {
    pub fn from_flags(explain: bool, json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if explain {
            OutputFormat::Explain
        } else {
            OutputFormat::Plain
        }
    }
}

pub fn run_resolve(
    cfg: ResolverConfig,
    paths: &[String],
    thumbnail: bool,
    format: OutputFormat,
) -> Result<()> {
    let resolver = ResourcePathResolver::new(cfg).context("build resolver from config")?;
    let variant = if thumbnail {
        Variant::Thumbnail
    } else {
        Variant::Full
    };
    print!("{}", render_resolutions(&resolver, paths, variant, format)?);
    Ok(())
}

/// Resolves every path and renders the output block (newline terminated).
pub fn render_resolutions<R: Resolver>(
    resolver: &R,
    paths: &[String],
    variant: Variant,
    format: OutputFormat,
) -> Result<String> {
    let resolutions: Vec<Resolution> = paths
        .iter()
        .map(|p| resolver.resolve_detailed(p, variant))
        .collect();

    let mut out = String::new();
    match format {
        OutputFormat::Plain => {
            for r in &resolutions {
                writeln!(out, "{}", r.url)?;
            }
        }
        OutputFormat::Explain => {
            for r in &resolutions {
                match r.warning {
                    Some(w) => writeln!(out, "{}\t{}\t{}", r.url, r.shape, w)?,
                    None => writeln!(out, "{}\t{}", r.url, r.shape)?,
                }
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&resolutions).context("serialize resolutions")?;
            writeln!(out, "{json}")?;
        }
    }

    let fallbacks = resolutions.iter().filter(|r| r.warning.is_some()).count();
    if fallbacks > 0 {
        tracing::debug!("{} of {} paths resolved with a warning", fallbacks, resolutions.len());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> ResourcePathResolver {
        ResourcePathResolver::new(ResolverConfig {
            base_url: "https://lxp.example.com".to_string(),
            blob_path: "/blob".to_string(),
            org_code: "ORG1".to_string(),
            blob_enabled: true,
            ..ResolverConfig::default()
        })
        .unwrap()
    }

    fn paths(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn output_format_from_flags() {
        assert_eq!(OutputFormat::from_flags(false, false), OutputFormat::Plain);
        assert_eq!(OutputFormat::from_flags(true, false), OutputFormat::Explain);
        assert_eq!(OutputFormat::from_flags(false, true), OutputFormat::Json);
    }

    #[test]
    fn render_plain() {
        let out = render_resolutions(
            &resolver(),
            &paths(&["/a.png", "x/ORG1/b.png"]),
            Variant::Full,
            OutputFormat::Plain,
        )
        .unwrap();
        assert_eq!(
            out,
            "https://content.gogetempowered.com/a.png\nhttps://content.gogetempowered.com/ORG1/b.png\n"
        );
    }

    #[test]
    fn render_explain_includes_shape_and_warning() {
        let out = render_resolutions(
            &resolver(),
            &paths(&["/a.png", "plain.png"]),
            Variant::Full,
            OutputFormat::Explain,
        )
        .unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "https://content.gogetempowered.com/a.png\troot-relative");
        assert!(lines[1].starts_with("https://content.gogetempowered.com/plain.png\tbare\t"));
    }

    #[test]
    fn render_json() {
        let out = render_resolutions(
            &resolver(),
            &paths(&["/t.png"]),
            Variant::Thumbnail,
            OutputFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["url"], "https://content.gogetempowered.com/t.png");
        assert_eq!(value[0]["variant"], "thumbnail");
        assert!(value[0].get("warning").is_none());
    }
}
