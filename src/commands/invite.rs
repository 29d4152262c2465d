use std::path::Path;

use anyhow::{Context, Result};
use eventbrief_core::config::InviteConfig;
use eventbrief_core::{CalendarEventSpec, generate_invite, parse_datetime_flexible};
use owo_colors::OwoColorize;

/// Invite fields as given on the command line.
pub struct InviteArgs {
    pub title: String,
    pub start: String,
    pub duration: Option<f64>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub uid: Option<String>,
}

pub fn run(args: InviteArgs, defaults: &InviteConfig, output: Option<&Path>) -> Result<()> {
    let spec = build_spec(args, defaults)?;
    let ics = generate_invite(&spec);

    match output {
        Some(path) => {
            std::fs::write(path, &ics)
                .with_context(|| format!("Could not write {}", path.display()))?;
            eprintln!(
                "{}",
                format!("  Wrote {} ({})", path.display(), spec.uid).green()
            );
        }
        None => print!("{ics}"),
    }
    Ok(())
}

fn build_spec(args: InviteArgs, defaults: &InviteConfig) -> Result<CalendarEventSpec> {
    let start = parse_datetime_flexible(&args.start).with_context(|| {
        format!(
            "Could not parse start '{}'. Try 2026-03-20T14:00 or \"Mar 20, 2026\"",
            args.start
        )
    })?;

    let mut builder = CalendarEventSpec::builder(args.title, start)
        .duration_hours(args.duration.unwrap_or(defaults.duration_hours))
        .organizer(&defaults.organizer_name, &defaults.organizer_email)
        .uid_domain(&defaults.uid_domain);

    if let Some(description) = args.description {
        builder = builder.description(description);
    }
    if let Some(location) = args.location {
        builder = builder.location(location);
    }
    if let Some(url) = args.url {
        builder = builder.url(url);
    }
    if let Some(uid) = args.uid {
        builder = builder.uid(uid);
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(start: &str) -> InviteArgs {
        InviteArgs {
            title: "Demo Day".into(),
            start: start.into(),
            duration: None,
            description: None,
            location: Some("Main Hall".into()),
            url: None,
            uid: None,
        }
    }

    #[test]
    fn test_config_defaults_fill_gaps() {
        let defaults = InviteConfig {
            duration_hours: 2.0,
            organizer_name: "Hub".into(),
            organizer_email: "team@hub.example".into(),
            uid_domain: "hub.example".into(),
        };
        let spec = build_spec(args("2026-03-20T14:00"), &defaults).unwrap();

        assert_eq!(spec.duration_hours, 2.0);
        assert_eq!(spec.organizer_email, "team@hub.example");
        assert!(spec.uid.ends_with("@hub.example"));
        assert_eq!(spec.location, "Main Hall");
    }

    #[test]
    fn test_explicit_values_win() {
        let mut a = args("Mar 20, 2026");
        a.duration = Some(0.5);
        a.uid = Some("sent-before@hub.example".into());
        let spec = build_spec(a, &InviteConfig::default()).unwrap();

        assert_eq!(spec.duration_hours, 0.5);
        assert_eq!(spec.uid, "sent-before@hub.example");
    }

    #[test]
    fn test_oversized_duration_is_rejected() {
        let mut a = args("2026-03-20T14:00");
        a.duration = Some(1e12);
        let err = build_spec(a, &InviteConfig::default()).unwrap_err();
        assert!(err.to_string().contains("date range"), "{err}");
    }

    #[test]
    fn test_bad_start_is_reported() {
        let err = build_spec(args("whenever"), &InviteConfig::default()).unwrap_err();
        assert!(err.to_string().contains("whenever"), "{err}");
    }
}
