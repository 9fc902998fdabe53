use anyhow::Result;
use libkeyset_core::{AlphabeticLayout, Config, DeviceClass, InputSet, InputSetKind, KeyboardCase};
use std::path::PathBuf;

pub struct RowsOptions {
    pub kind: InputSetKind,
    pub layout: Option<AlphabeticLayout>,
    pub device: Option<DeviceClass>,
    pub currency: Option<String>,
    pub uppercase: bool,
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Command-line flags win over the config file, which wins over defaults.
fn resolve_config(opts: &RowsOptions) -> Result<Config> {
    let mut config = match &opts.config {
        Some(path) => Config::load_toml(path)?,
        None => Config::default(),
    };
    if let Some(device) = opts.device {
        config.set_device(device);
    }
    if let Some(layout) = opts.layout {
        config.alphabetic_layout = layout;
    }
    if let Some(currency) = &opts.currency {
        config.set_numeric_currency(currency);
        // An explicit currency re-derives the symbolic list
        config.symbolic_currencies = None;
    }
    Ok(config)
}

pub fn run(opts: RowsOptions) -> Result<()> {
    let config = resolve_config(&opts)?;
    tracing::debug!(kind = %opts.kind, device = %config.device, "building input set");

    let set = InputSet::for_kind(opts.kind, &config);
    let case = if opts.uppercase {
        KeyboardCase::Uppercased
    } else {
        KeyboardCase::Lowercased
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&set.characters(case))?);
        return Ok(());
    }

    for row in &set.rows {
        println!("{}", row.characters(case).join(" "));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> RowsOptions {
        RowsOptions {
            kind: InputSetKind::Numeric,
            layout: None,
            device: None,
            currency: None,
            uppercase: false,
            config: None,
            json: false,
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let mut opts = options();
        opts.device = Some(DeviceClass::Pad);
        opts.currency = Some("£".to_string());

        let config = resolve_config(&opts).unwrap();
        assert_eq!(config.device, DeviceClass::Pad);
        assert_eq!(config.numeric_currency, "£");
        assert_eq!(config.symbolic_currencies(), vec!["$", "€", "¥"]);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let mut opts = options();
        opts.config = Some(PathBuf::from("/nonexistent/keyset.toml"));
        assert!(resolve_config(&opts).is_err());
    }
}
